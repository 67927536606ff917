//! Shared level fixtures for visibility unit tests.

use glam::{Vec2, Vec3};
use crate::camera::Camera;
use crate::level::{Level, SectorKey};

/// Four 4×4 rooms in a 2×2 ring, floor 0, ceiling 2.
///
/// ```text
///  y
///  8 +----+----+
///    | D  | C  |
///  4 +----+----+
///    | A  | B  |
///  0 +----+----+
///    0    4    8  x
/// ```
///
/// Each room has a portal to its two neighbors. Returns `[A, B, C, D]`.
pub fn create_ring_level() -> (Level, [SectorKey; 4]) {
    let mut level = Level::new();
    for y in [0.0, 4.0, 8.0] {
        for x in [0.0, 4.0, 8.0] {
            level.add_vertex(Vec2::new(x, y));
        }
    }

    let a = level.add_sector(0.0, 2.0);
    let b = level.add_sector(0.0, 2.0);
    let c = level.add_sector(0.0, 2.0);
    let d = level.add_sector(0.0, 2.0);

    let loops = [
        (a, [(0, 1, None), (1, 4, Some(b)), (4, 3, Some(d)), (3, 0, None)]),
        (b, [(1, 2, None), (2, 5, None), (5, 4, Some(c)), (4, 1, Some(a))]),
        (c, [(4, 5, Some(b)), (5, 8, None), (8, 7, None), (7, 4, Some(d))]),
        (d, [(3, 4, Some(a)), (4, 7, Some(c)), (7, 6, None), (6, 3, None)]),
    ];
    for (sector, walls) in loops {
        for (v1, v2, portal) in walls {
            level.add_wall(sector, v1, v2, portal).unwrap();
        }
    }

    (level, [a, b, c, d])
}

/// Three wedges around the origin, each a portal neighbor of the other
/// two, so every path loops back (A → C → B → A). Returns `[A, B, C]`.
pub fn create_wedge_cycle_level() -> (Level, [SectorKey; 3]) {
    let mut level = Level::new();
    let o = level.add_vertex(Vec2::ZERO);
    let p0 = level.add_vertex(Vec2::new(4.0, 0.0));
    let p1 = level.add_vertex(Vec2::new(-2.0, 3.464));
    let p2 = level.add_vertex(Vec2::new(-2.0, -3.464));

    let a = level.add_sector(0.0, 3.0);
    let b = level.add_sector(0.0, 3.0);
    let c = level.add_sector(0.0, 3.0);

    let loops = [
        (a, [(o, p0, Some(c)), (p0, p1, None), (p1, o, Some(b))]),
        (b, [(o, p1, Some(a)), (p1, p2, None), (p2, o, Some(c))]),
        (c, [(o, p2, Some(b)), (p2, p0, None), (p0, o, Some(a))]),
    ];
    for (sector, walls) in loops {
        for (v1, v2, portal) in walls {
            level.add_wall(sector, v1, v2, portal).unwrap();
        }
    }

    (level, [a, b, c])
}

/// Viewer standing in room A of the ring, eye height 1, 90° square view
/// facing diagonally toward +x / -y (into B, away from D).
pub fn create_ring_camera() -> Camera {
    let mut camera = Camera::new(Vec3::new(3.0, 1.0, -2.0), 90.0, 1.0, 0.1, 100.0);
    camera.yaw = -135.0;
    camera
}
