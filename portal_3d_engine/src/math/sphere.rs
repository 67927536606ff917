/// Sphere — bounding sphere with NaN-radius invalid state.
///
/// Growth by points is incremental: each point outside the sphere moves
/// the center toward it and enlarges the radius just enough to cover
/// both the point and the previous sphere. The result depends on
/// insertion order and is generally larger than the minimal enclosing
/// sphere.

use std::ops::AddAssign;
use glam::Vec3;

/// Bounding sphere
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    /// NaN marks an empty sphere
    pub radius: f32,
}

impl Sphere {
    /// Create an invalid (empty) sphere.
    pub fn invalid() -> Self {
        Self {
            center: Vec3::NAN,
            radius: f32::NAN,
        }
    }

    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Grow a sphere over `points` in order. Empty input gives an invalid sphere.
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut sphere = Self::invalid();
        for point in points {
            sphere += *point;
        }
        sphere
    }

    pub fn is_valid(&self) -> bool {
        !self.radius.is_nan()
    }

    /// Inclusive point test. `false` on an invalid sphere.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Test if `other` lies entirely within `self`.
    pub fn contains_sphere(&self, other: &Sphere) -> bool {
        other.center.distance(self.center) + other.radius <= self.radius
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::invalid()
    }
}

impl AddAssign<Vec3> for Sphere {
    fn add_assign(&mut self, point: Vec3) {
        if !self.is_valid() {
            self.center = point;
            self.radius = 0.0;
            return;
        }

        let distance = point.distance(self.center);
        if distance > self.radius {
            let radius = (self.radius + distance) * 0.5;
            self.center += (point - self.center) * ((radius - self.radius) / distance);
            self.radius = radius;
        }
    }
}

#[cfg(test)]
#[path = "sphere_tests.rs"]
mod tests;
