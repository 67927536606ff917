/// Sector and wall records of the level graph.
///
/// Both live in `Level`'s slot maps and refer to each other through
/// stable keys, so portal loops (A → B → C → A) need no shared
/// ownership.

use glam::{Vec2, Vec3};
use slotmap::new_key_type;

// ===== SLOT MAP KEYS =====

new_key_type! {
    /// Stable key for a Sector within a Level.
    pub struct SectorKey;

    /// Stable key for a Wall within a Level.
    pub struct WallKey;
}

/// Map a 2D level point to world space at `height`.
///
/// Level `(x, y)` becomes world `(x, height, -y)`.
pub fn to_world(point: Vec2, height: f32) -> Vec3 {
    Vec3::new(point.x, height, -point.y)
}

/// Map a world position back onto the 2D level plane.
pub fn to_level(point: Vec3) -> Vec2 {
    Vec2::new(point.x, -point.z)
}

/// A region of the level bounded by an ordered loop of walls.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub floor_height: f32,
    pub ceiling_height: f32,
    walls: Vec<WallKey>,
}

impl Sector {
    pub(crate) fn new(floor_height: f32, ceiling_height: f32) -> Self {
        Self {
            floor_height,
            ceiling_height,
            walls: Vec::new(),
        }
    }

    /// Walls in loop order.
    pub fn walls(&self) -> &[WallKey] {
        &self.walls
    }

    pub fn height(&self) -> f32 {
        self.ceiling_height - self.floor_height
    }

    pub(crate) fn push_wall(&mut self, wall: WallKey) {
        self.walls.push(wall);
    }
}

/// One edge of a sector's loop: solid, or a portal into a neighbor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    vertices: [usize; 2],
    sector: SectorKey,
    portal: Option<SectorKey>,
}

impl Wall {
    pub(crate) fn new(sector: SectorKey, v1: usize, v2: usize, portal: Option<SectorKey>) -> Self {
        Self {
            vertices: [v1, v2],
            sector,
            portal,
        }
    }

    /// Indices into `Level::vertices`.
    pub fn vertices(&self) -> [usize; 2] {
        self.vertices
    }

    /// Sector whose loop contains this wall.
    pub fn sector(&self) -> SectorKey {
        self.sector
    }

    /// Neighbor seen through this wall, `None` for a solid wall.
    pub fn portal(&self) -> Option<SectorKey> {
        self.portal
    }

    pub fn is_portal(&self) -> bool {
        self.portal.is_some()
    }

    pub(crate) fn set_portal(&mut self, portal: Option<SectorKey>) {
        self.portal = portal;
    }
}
