/// AABB — axis-aligned bounding box with an explicit invalid state.
///
/// An invalid box has NaN extents and acts as the identity for union:
/// adding a point collapses it onto that point, adding another invalid
/// box leaves it invalid. Every containment query on an invalid box
/// returns `false`; derived quantities (center, size, volume) are NaN.

use std::ops::{AddAssign, MulAssign};
use glam::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
    valid: bool,
}

impl AABB {
    /// Create an invalid (empty) box.
    pub fn invalid() -> Self {
        Self {
            min: Vec3::NAN,
            max: Vec3::NAN,
            valid: false,
        }
    }

    /// Create a valid box from its extents.
    ///
    /// `min <= max` component-wise is the caller's responsibility.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max, valid: true }
    }

    /// Create a cube of half-size `half_extent` around `center`.
    pub fn from_center_half_extent(center: Vec3, half_extent: f32) -> Self {
        Self::new(center - Vec3::splat(half_extent), center + Vec3::splat(half_extent))
    }

    /// Smallest box enclosing `points`. Empty input gives an invalid box.
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut aabb = Self::invalid();
        for point in points {
            aabb += *point;
        }
        aabb
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full edge lengths (max - min).
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half edge lengths.
    pub fn extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    pub fn volume(&self) -> f32 {
        let size = self.size();
        size.x * size.y * size.z
    }

    /// Inclusive point test. Always `false` on an invalid box.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.valid && point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test if `other` lies entirely within `self` (inclusive).
    pub fn contains_aabb(&self, other: &AABB) -> bool {
        self.valid
            && other.valid
            && other.min.cmpge(self.min).all()
            && other.max.cmple(self.max).all()
    }

    /// The eight corners.
    ///
    /// Index bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = min, 1 = max).
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Grow the box by `|amount|` on both sides of every axis.
    pub fn expand(&mut self, amount: Vec3) -> &mut Self {
        let amount = amount.abs();
        self.min -= amount;
        self.max += amount;
        self
    }

    /// Copy of this box grown by `|amount|` per axis.
    pub fn expanded(mut self, amount: Vec3) -> Self {
        self.expand(amount);
        self
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::invalid()
    }
}

impl AddAssign<Vec3> for AABB {
    fn add_assign(&mut self, point: Vec3) {
        if self.valid {
            self.min = self.min.min(point);
            self.max = self.max.max(point);
        } else {
            self.min = point;
            self.max = point;
            self.valid = true;
        }
    }
}

impl AddAssign<AABB> for AABB {
    fn add_assign(&mut self, other: AABB) {
        if other.valid {
            *self += other.min;
            *self += other.max;
        }
    }
}

/// Scales the box about its center. Negative factors mirror it, keeping min <= max.
impl MulAssign<f32> for AABB {
    fn mul_assign(&mut self, scalar: f32) {
        let center = self.center();
        let half = self.extents() * scalar.abs();
        self.min = center - half;
        self.max = center + half;
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
