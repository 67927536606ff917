//! Level module — the sector/wall graph the visibility traversal walks.

mod level;
mod sector;

pub use level::Level;
pub use sector::{to_level, to_world, Sector, SectorKey, Wall, WallKey};
