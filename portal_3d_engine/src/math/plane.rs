/// Planes in 3D (`Plane`) and 2D (`Plane2D`).
///
/// A 3D plane stores `(normal, distance)` such that
/// `dot(normal, p) + distance` is the signed distance of `p`
/// (scaled by `|normal|` when the normal is not unit length).

use glam::{Vec2, Vec3, Vec4};

/// Which side of a plane a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Positive signed distance
    Front,
    /// Negative signed distance
    Back,
    /// Exactly on the plane
    On,
}

impl PlaneSide {
    fn from_signed_distance(distance: f32) -> Self {
        if distance > 0.0 {
            PlaneSide::Front
        } else if distance < 0.0 {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }
}

/// 3D plane. The default value is the zero plane, on which every point lies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through three points; the normal follows the winding `a → b → c`
    /// (right-hand rule). NaN for collinear points.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self {
            normal,
            distance: -normal.dot(a),
        }
    }

    /// Plane from packed `(A, B, C, D)` coefficients.
    pub fn from_vec4(coefficients: Vec4) -> Self {
        Self {
            normal: coefficients.truncate(),
            distance: coefficients.w,
        }
    }

    /// Rescale so the normal is unit length. Zero normals are left untouched.
    pub fn normalized(self) -> Self {
        let length = self.normal.length();
        if length > 0.0 {
            Self {
                normal: self.normal / length,
                distance: self.distance / length,
            }
        } else {
            self
        }
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    pub fn point_side(&self, point: Vec3) -> PlaneSide {
        PlaneSide::from_signed_distance(self.signed_distance(point))
    }
}

/// 2D plane (a line with a facing direction): `dot(normal, p) - distance`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane2D {
    pub normal: Vec2,
    pub distance: f32,
}

impl Plane2D {
    pub fn new(normal: Vec2, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane with `normal` passing through `point`.
    pub fn through_point(normal: Vec2, point: Vec2) -> Self {
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    pub fn signed_distance(&self, point: Vec2) -> f32 {
        self.normal.dot(point) - self.distance
    }

    pub fn side(&self, point: Vec2) -> PlaneSide {
        PlaneSide::from_signed_distance(self.signed_distance(point))
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
