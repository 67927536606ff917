//! Level — arena-backed sector/wall graph.
//!
//! Vertices are a plain list of 2D points; sectors and walls live in slot
//! maps and reference each other by key. Iteration follows definition
//! order, which makes traversals reproducible.
//!
//! A level is built once, checked with `validate()`, then shared
//! read-only (typically through `Engine::load_level`).

use glam::{Vec2, Vec3};
use slotmap::SlotMap;
use crate::{engine_bail, engine_error};
use crate::error::{Error, Result};
use crate::math::{point_in_polygon_xz, Line2, AABB};
use super::sector::{to_world, Sector, SectorKey, Wall, WallKey};

/// Sector graph of one level.
#[derive(Debug, Clone)]
pub struct Level {
    vertices: Vec<Vec2>,
    sectors: SlotMap<SectorKey, Sector>,
    walls: SlotMap<WallKey, Wall>,
}

impl Level {
    /// Create an empty level
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            sectors: SlotMap::with_key(),
            walls: SlotMap::with_key(),
        }
    }

    // ===== CONSTRUCTION =====

    /// Append a 2D vertex and return its index.
    pub fn add_vertex(&mut self, position: Vec2) -> usize {
        self.vertices.push(position);
        self.vertices.len() - 1
    }

    /// Add a sector with an empty wall loop.
    pub fn add_sector(&mut self, floor_height: f32, ceiling_height: f32) -> SectorKey {
        self.sectors.insert(Sector::new(floor_height, ceiling_height))
    }

    /// Append a wall from vertex `v1` to vertex `v2` to `sector`'s loop.
    ///
    /// # Errors
    ///
    /// Fails if `sector` or `portal` is not a sector of this level, if the
    /// portal leads back into `sector`, or if a vertex index is out of range.
    pub fn add_wall(
        &mut self,
        sector: SectorKey,
        v1: usize,
        v2: usize,
        portal: Option<SectorKey>,
    ) -> Result<WallKey> {
        if !self.sectors.contains_key(sector) {
            engine_error!("portal3d::Level", "add_wall: unknown sector {:?}", sector);
            return Err(Error::InvalidResource(format!("Sector {:?} not found", sector)));
        }
        for index in [v1, v2] {
            if index >= self.vertices.len() {
                engine_bail!("portal3d::Level",
                    "add_wall: vertex {} out of range ({} vertices)",
                    index, self.vertices.len());
            }
        }
        self.check_portal(sector, portal)?;

        let key = self.walls.insert(Wall::new(sector, v1, v2, portal));
        if let Some(owner) = self.sectors.get_mut(sector) {
            owner.push_wall(key);
        }
        Ok(key)
    }

    /// Turn a wall into a portal to `portal`, or back into a solid wall with `None`.
    pub fn set_portal(&mut self, wall: WallKey, portal: Option<SectorKey>) -> Result<()> {
        let owner = match self.walls.get(wall) {
            Some(w) => w.sector(),
            None => {
                engine_error!("portal3d::Level", "set_portal: unknown wall {:?}", wall);
                return Err(Error::InvalidResource(format!("Wall {:?} not found", wall)));
            }
        };
        self.check_portal(owner, portal)?;

        if let Some(w) = self.walls.get_mut(wall) {
            w.set_portal(portal);
        }
        Ok(())
    }

    fn check_portal(&self, owner: SectorKey, portal: Option<SectorKey>) -> Result<()> {
        match portal {
            Some(target) if target == owner => {
                engine_bail!("portal3d::Level", "Portal of sector {:?} leads back into itself", owner);
            }
            Some(target) if !self.sectors.contains_key(target) => {
                engine_bail!("portal3d::Level", "Portal to unknown sector {:?}", target);
            }
            _ => Ok(()),
        }
    }

    // ===== ACCESS =====

    pub fn vertex(&self, index: usize) -> Option<Vec2> {
        self.vertices.get(index).copied()
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn sector(&self, key: SectorKey) -> Option<&Sector> {
        self.sectors.get(key)
    }

    pub fn wall(&self, key: WallKey) -> Option<&Wall> {
        self.walls.get(key)
    }

    /// Iterate over all sectors in definition order.
    pub fn sectors(&self) -> impl Iterator<Item = (SectorKey, &Sector)> {
        self.sectors.iter()
    }

    /// Iterate over all sector keys in definition order.
    pub fn sector_keys(&self) -> impl Iterator<Item = SectorKey> + '_ {
        self.sectors.keys()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Walls of `sector` in loop order. Empty for an unknown sector.
    pub fn walls_of(&self, sector: SectorKey) -> impl Iterator<Item = (WallKey, &Wall)> + '_ {
        self.sectors
            .get(sector)
            .map(|s| s.walls())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&key| self.walls.get(key).map(|wall| (key, wall)))
    }

    // ===== GEOMETRY =====

    /// 2D segment of a wall, `None` if the wall or a vertex is missing.
    pub fn wall_segment(&self, wall: &Wall) -> Option<Line2> {
        let [v1, v2] = wall.vertices();
        Some(Line2::new(self.vertex(v1)?, self.vertex(v2)?))
    }

    /// Floor outline of a sector in world space, one point per wall.
    pub fn sector_polygon(&self, sector: SectorKey) -> Vec<Vec3> {
        let floor = match self.sectors.get(sector) {
            Some(s) => s.floor_height,
            None => return Vec::new(),
        };

        self.walls_of(sector)
            .filter_map(|(_, wall)| self.vertex(wall.vertices()[0]))
            .map(|point| to_world(point, floor))
            .collect()
    }

    /// World-space box around a sector, floor to ceiling.
    ///
    /// Invalid for an unknown sector or an empty wall loop.
    pub fn sector_bounds(&self, sector: SectorKey) -> AABB {
        let Some(s) = self.sectors.get(sector) else {
            return AABB::invalid();
        };

        let mut bounds = AABB::invalid();
        for (_, wall) in self.walls_of(sector) {
            if let Some(point) = self.vertex(wall.vertices()[0]) {
                bounds += to_world(point, s.floor_height);
                bounds += to_world(point, s.ceiling_height);
            }
        }
        bounds
    }

    /// First sector, in definition order, whose footprint contains `position`.
    ///
    /// Only the ground-plane projection is tested; heights are ignored.
    pub fn locate_sector(&self, position: Vec3) -> Option<SectorKey> {
        self.sector_keys()
            .find(|&key| point_in_polygon_xz(position, &self.sector_polygon(key)))
    }

    // ===== VALIDATION =====

    /// Check the whole graph for structural errors.
    ///
    /// # Errors
    ///
    /// `Error::InvalidLevel` on the first problem found: a sector with fewer
    /// than three walls, non-finite heights, a floor above its ceiling, a
    /// wall vertex out of range, or a portal that leads nowhere or back
    /// into its own sector.
    pub fn validate(&self) -> Result<()> {
        for (key, sector) in self.sectors.iter() {
            if sector.walls().len() < 3 {
                engine_bail!("portal3d::Level",
                    "Sector {:?} has {} walls, at least 3 required",
                    key, sector.walls().len());
            }
            if !sector.floor_height.is_finite() || !sector.ceiling_height.is_finite() {
                engine_bail!("portal3d::Level", "Sector {:?} has non-finite heights", key);
            }
            if sector.floor_height > sector.ceiling_height {
                engine_bail!("portal3d::Level",
                    "Sector {:?} floor {} is above its ceiling {}",
                    key, sector.floor_height, sector.ceiling_height);
            }
        }

        for (key, wall) in self.walls.iter() {
            if wall.vertices().iter().any(|&index| index >= self.vertices.len()) {
                engine_bail!("portal3d::Level",
                    "Wall {:?} references vertices {:?} ({} vertices)",
                    key, wall.vertices(), self.vertices.len());
            }
            if !self.sectors.contains_key(wall.sector()) {
                engine_bail!("portal3d::Level", "Wall {:?} belongs to no sector", key);
            }
            self.check_portal(wall.sector(), wall.portal())?;
        }

        Ok(())
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
