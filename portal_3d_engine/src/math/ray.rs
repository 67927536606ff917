/// Ray — origin plus direction.
///
/// The direction is not normalized by the type. Queries that need a
/// unit direction say so.

use glam::Vec3;
use super::aabb::AABB;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// `origin + direction * distance`
    pub fn point_at_distance(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Perpendicular distance from `point` to the supporting line.
    ///
    /// Only meaningful for a unit-length direction.
    pub fn closest_distance_to_point(&self, point: Vec3) -> f32 {
        self.direction.cross(point - self.origin).length()
    }

    /// Slab-method interval `(t_enter, t_exit)` of the supporting line
    /// through `aabb`, or `None` when the line misses the box.
    ///
    /// Zero direction components rely on IEEE division (±inf). The
    /// interval is not clipped to `t >= 0`: a box behind the origin still
    /// yields an interval, with negative parameters.
    pub fn slab_interval(&self, aabb: &AABB) -> Option<(f32, f32)> {
        if !aabb.is_valid() {
            return None;
        }

        let inv_dir = self.direction.recip();
        let t0 = (aabb.min - self.origin) * inv_dir;
        let t1 = (aabb.max - self.origin) * inv_dir;
        let t_enter = t0.min(t1).max_element();
        let t_exit = t0.max(t1).min_element();

        if t_enter <= t_exit {
            Some((t_enter, t_exit))
        } else {
            None
        }
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::NAN,
            direction: Vec3::NAN,
        }
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;
