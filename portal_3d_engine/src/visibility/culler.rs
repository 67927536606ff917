/// Sector culling strategies.
///
/// A SectorCuller decides which sectors of a level are visible from a
/// camera. Implementations range from brute-force (everything) to the
/// frustum-clipped portal walk.

use crate::camera::Camera;
use crate::engine_debug;
use crate::engine_trace;
use crate::level::{to_level, Level};
use super::portal_traversal::find_visible_sectors;
use super::sector_view::SectorView;

/// Strategy for determining visible sectors from a camera.
///
/// Called once per frame before drawing. The returned SectorView is
/// ephemeral and consumed by the caller's renderer.
///
/// `&mut self` allows stateful implementations (e.g. caching the last
/// camera sector) to keep state across frames.
pub trait SectorCuller: Send + Sync {
    /// Cull the level against the camera and return visible sectors.
    fn cull(&mut self, level: &Level, camera: &Camera) -> SectorView;
}

/// Brute-force culler — returns ALL sectors (no actual culling).
///
/// Baseline for comparison and a fallback for tiny levels.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorCuller for BruteForceCuller {
    fn cull(&mut self, level: &Level, camera: &Camera) -> SectorView {
        SectorView::new(camera.clone(), level.sector_keys().collect())
    }
}

/// Portal culler — walks portals from the camera's sector through its frustum.
///
/// Gives an empty view when the camera stands outside every sector.
pub struct PortalCuller;

impl PortalCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PortalCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorCuller for PortalCuller {
    fn cull(&mut self, level: &Level, camera: &Camera) -> SectorView {
        let Some(start) = level.locate_sector(camera.position) else {
            engine_debug!("portal3d::PortalCuller",
                "Camera at {} is outside every sector", to_level(camera.position));
            return SectorView::new(camera.clone(), Vec::new());
        };

        let visible = find_visible_sectors(level, start, &camera.frustum());
        engine_trace!("portal3d::PortalCuller",
            "{} of {} sectors visible", visible.len(), level.sector_count());

        SectorView::new(camera.clone(), visible)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
