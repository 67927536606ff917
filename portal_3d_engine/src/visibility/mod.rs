//! Visibility module
//!
//! Portal traversal over the level graph, and the culling strategies
//! built on it.

mod portal_traversal;
mod culler;
mod sector_view;

#[cfg(test)]
mod test_levels;

pub use portal_traversal::{
    find_visible_sectors, portal_opening_box, visible_sectors_from, PORTAL_PADDING,
};
pub use culler::{SectorCuller, BruteForceCuller, PortalCuller};
pub use sector_view::SectorView;
