//! Headless Portal3D demo
//!
//! Loads the four-room sample level, replays a short scripted walk through
//! it and logs which sectors the portal culler keeps each frame.
//!
//! Run with: RUST_LOG=debug cargo run -p portal3d_demo

use glam::{Vec2, Vec3};
use portal_3d_engine::portal3d::{self, Engine};
use portal_3d_engine::portal3d::camera::{Camera, InputKeys, InputSnapshot, Movement};
use portal_3d_engine::portal3d::level::{Level, SectorKey};
use portal_3d_engine::portal3d::log::{LogEntry, LogSeverity, Logger};
use portal_3d_engine::portal3d::visibility::{BruteForceCuller, PortalCuller, SectorCuller};

/// Simulated frame time (60 Hz)
const FRAME_TIME: f32 = 1.0 / 60.0;

/// Forwards engine log entries to the `log` crate, one target per engine source.
struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

/// Four rooms chained by portals: a hall, a corridor, a bend and a closet.
///
/// Floors rise slightly from one room to the next.
fn build_sample_level() -> portal3d::Result<(Level, Vec<SectorKey>)> {
    let mut level = Level::new();
    for (x, y) in [
        (0.0, 0.0), (4.0, 0.0), (5.0, 2.0), (7.0, 2.0),
        (7.0, 4.0), (5.0, 4.0), (4.0, 6.0), (0.0, 6.0),
        (9.0, 1.0), (11.0, 1.0), (11.0, 3.0), (9.0, 3.0),
    ] {
        level.add_vertex(Vec2::new(x, y));
    }

    let hall = level.add_sector(0.0, 3.0);
    let corridor = level.add_sector(0.25, 2.0);
    let bend = level.add_sector(0.5, 3.0);
    let closet = level.add_sector(0.75, 3.0);

    let loops: [(SectorKey, &[(usize, usize, Option<SectorKey>)]); 4] = [
        (hall, &[
            (0, 1, None), (1, 2, None), (2, 5, Some(corridor)),
            (5, 6, None), (6, 7, None), (7, 0, None),
        ]),
        (corridor, &[(2, 3, None), (3, 4, Some(bend)), (4, 5, None), (5, 2, Some(hall))]),
        (bend, &[(3, 8, None), (8, 11, Some(closet)), (11, 4, None), (4, 3, Some(corridor))]),
        (closet, &[(8, 9, None), (9, 10, None), (10, 11, None), (11, 8, Some(bend))]),
    ];
    for (sector, walls) in loops {
        for &(v1, v2, portal) in walls {
            level.add_wall(sector, v1, v2, portal)?;
        }
    }

    Ok((level, vec![hall, corridor, bend, closet]))
}

/// Scripted input: (frame count, input held for those frames)
fn input_script() -> Vec<(u32, InputSnapshot)> {
    vec![
        (30, InputSnapshot::default()),
        (30, InputSnapshot::new(InputKeys::empty(), Vec2::new(30.0, 0.0))),
        (90, InputSnapshot::new(InputKeys::FORWARD, Vec2::ZERO)),
        (60, InputSnapshot::new(InputKeys::FORWARD | InputKeys::SPRINT, Vec2::ZERO)),
        (40, InputSnapshot::new(InputKeys::empty(), Vec2::new(-20.0, 5.0))),
        (60, InputSnapshot::new(InputKeys::BACKWARD | InputKeys::LEFT, Vec2::ZERO)),
    ]
}

fn main() -> portal3d::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    Engine::initialize()?;
    Engine::set_logger(LogBridge);

    let (level, names) = build_sample_level()?;
    Engine::load_level(level)?;
    let level = Engine::level()?;

    let sector_name = |key: &SectorKey| match names.iter().position(|k| k == key) {
        Some(0) => "hall",
        Some(1) => "corridor",
        Some(2) => "bend",
        Some(3) => "closet",
        _ => "?",
    };

    let mut camera = Camera::new(Vec3::new(2.0, 1.0, -3.0), 70.0, 640.0 / 480.0, 0.1, 1000.0);
    let mut movement = Movement::default();
    let mut portal_culler = PortalCuller::new();
    let mut brute_force = BruteForceCuller::new();

    let mut frame = 0u32;
    for (frames, input) in input_script() {
        for _ in 0..frames {
            movement.update(&mut camera, &input, FRAME_TIME);

            let view = portal_culler.cull(&level, &camera);
            if frame % 30 == 0 {
                let total = brute_force.cull(&level, &camera).visible_count();
                let visible: Vec<&str> = view.visible_sectors().iter().map(sector_name).collect();
                log::info!(
                    "frame {:3}: pos {:.2} yaw {:6.1} pitch {:5.1} -> {}/{} sectors {:?}",
                    frame, camera.position, camera.yaw, camera.pitch,
                    view.visible_count(), total, visible
                );
            }
            frame += 1;
        }
    }

    Engine::unload_level()?;
    Engine::shutdown();
    Ok(())
}
