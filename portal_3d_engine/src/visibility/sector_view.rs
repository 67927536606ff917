/// SectorView — result of sector culling.
///
/// Created by a `SectorCuller`. Holds a snapshot of the camera at culling
/// time and the visible sector keys in traversal order.
///
/// Ephemeral: lives for one frame. No Arc, no Mutex.

use crate::camera::Camera;
use crate::level::SectorKey;

/// Visible sectors for one camera, one frame.
#[derive(Debug, Clone)]
pub struct SectorView {
    camera: Camera,
    visible_sectors: Vec<SectorKey>,
}

impl SectorView {
    /// Create a new SectorView (crate-internal: only cullers create these).
    pub(crate) fn new(camera: Camera, visible_sectors: Vec<SectorKey>) -> Self {
        Self {
            camera,
            visible_sectors,
        }
    }

    /// Camera snapshot at the time of culling.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Visible sectors, the camera's own sector first.
    pub fn visible_sectors(&self) -> &[SectorKey] {
        &self.visible_sectors
    }

    pub fn visible_count(&self) -> usize {
        self.visible_sectors.len()
    }

    /// True when nothing is visible (e.g. camera outside the level).
    pub fn is_empty(&self) -> bool {
        self.visible_sectors.is_empty()
    }
}

#[cfg(test)]
#[path = "sector_view_tests.rs"]
mod tests;
