/// Portal traversal — which sectors can be seen from a viewer.
///
/// Starting from the viewer's sector, every portal whose opening touches
/// the frustum leads into its neighbor. Each sector is entered at most
/// once (first discovery wins), so cyclic portal graphs terminate and the
/// result order only depends on wall loop order.

use glam::Vec3;
use rustc_hash::FxHashSet;
use crate::camera::Frustum;
use crate::level::{to_world, Level, SectorKey, Wall};
use crate::math::AABB;

/// Thickness added on both sides of a portal opening, along the wall normal.
///
/// Keeps portals that are coplanar with a frustum plane from being culled by
/// rounding.
pub const PORTAL_PADDING: f32 = 0.05;

/// Box around a portal opening.
///
/// The wall is extruded from the floor to the ceiling of its owning sector,
/// then padded by `PORTAL_PADDING` along its horizontal right vector. A
/// zero-length wall gives a NaN box that intersects nothing.
pub fn portal_opening_box(level: &Level, wall: &Wall) -> AABB {
    let (Some(sector), Some(segment)) = (level.sector(wall.sector()), level.wall_segment(wall)) else {
        return AABB::invalid();
    };

    let a = to_world(segment.v1, sector.floor_height);
    let b = to_world(segment.v2, sector.floor_height);
    let right = (b - a).cross(Vec3::Y).normalize();

    let mut opening = AABB::from_points(&[
        a,
        b,
        to_world(segment.v1, sector.ceiling_height),
        to_world(segment.v2, sector.ceiling_height),
    ]);
    opening.expand(right * PORTAL_PADDING);
    opening
}

/// Sectors visible from `start` through `frustum`, in traversal order.
///
/// `start` is always first. An unknown `start` key gives an empty list.
pub fn find_visible_sectors(level: &Level, start: SectorKey, frustum: &Frustum) -> Vec<SectorKey> {
    let mut visited = FxHashSet::default();
    let mut visible = Vec::new();

    if level.sector(start).is_some() {
        visit_sector(level, start, frustum, &mut visited, &mut visible);
    }

    visible
}

/// Sectors visible from a world position, starting in the sector that
/// contains it. Empty when `viewer` is outside every sector.
pub fn visible_sectors_from(level: &Level, viewer: Vec3, frustum: &Frustum) -> Vec<SectorKey> {
    match level.locate_sector(viewer) {
        Some(start) => find_visible_sectors(level, start, frustum),
        None => Vec::new(),
    }
}

fn visit_sector(
    level: &Level,
    sector: SectorKey,
    frustum: &Frustum,
    visited: &mut FxHashSet<SectorKey>,
    visible: &mut Vec<SectorKey>,
) {
    visited.insert(sector);
    visible.push(sector);

    for (_, wall) in level.walls_of(sector) {
        let Some(neighbor) = wall.portal() else {
            continue;
        };
        if visited.contains(&neighbor) {
            continue;
        }

        if frustum.intersects_box(&portal_opening_box(level, wall)) {
            visit_sector(level, neighbor, frustum, visited, visible);
        }
    }
}

#[cfg(test)]
#[path = "portal_traversal_tests.rs"]
mod tests;
