/// Line segments in 3D (`Line`) and 2D (`Line2`).

use glam::{Vec2, Vec3};

/// Absolute tolerance for point-on-segment tests.
pub const LINE_EPSILON: f32 = 1e-4;

/// 3D line segment from `v1` to `v2`
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub v1: Vec3,
    pub v2: Vec3,
}

impl Line {
    pub fn new(v1: Vec3, v2: Vec3) -> Self {
        Self { v1, v2 }
    }

    /// Closest point on the segment to `point` (projection clamped to the endpoints).
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let v = self.v2 - self.v1;
        let w = point - self.v1;

        let c1 = w.dot(v);
        if c1 <= 0.0 {
            return self.v1;
        }

        let c2 = v.dot(v);
        if c2 <= c1 {
            return self.v2;
        }

        self.v1 + v * (c1 / c2)
    }

    pub fn closest_distance_to_point(&self, point: Vec3) -> f32 {
        point.distance(self.closest_point(point))
    }

    /// True when `point` lies within `LINE_EPSILON` of the segment.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.closest_distance_to_point(point) < LINE_EPSILON
    }

    /// True when both endpoints of `other` lie on this segment.
    pub fn contains_line(&self, other: &Line) -> bool {
        self.contains_point(other.v1) && self.contains_point(other.v2)
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            v1: Vec3::NAN,
            v2: Vec3::NAN,
        }
    }
}

/// 2D segment, used for wall footprints
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Line2 {
    pub v1: Vec2,
    pub v2: Vec2,
}

impl Line2 {
    pub fn new(v1: Vec2, v2: Vec2) -> Self {
        Self { v1, v2 }
    }

    /// Unit normal, rotated 90° counter-clockwise from the direction.
    ///
    /// NaN for a zero-length segment.
    pub fn normal(&self) -> Vec2 {
        let direction = (self.v2 - self.v1).normalize();
        Vec2::new(-direction.y, direction.x)
    }

    pub fn length(&self) -> f32 {
        self.v1.distance(self.v2)
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
