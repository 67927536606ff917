/// Frustum — clipping planes for portal visibility tests.
///
/// Six plane slots, each a `Plane` whose normal points inward: a point is
/// inside a slot when its signed distance is `>= 0`.
///
/// Only five planes are extracted. The far slot always holds the zero
/// plane, which every point passes, so nothing is ever culled by
/// distance.

use glam::{Mat4, Vec4};
use crate::math::{Plane, Sphere, AABB};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// View volume in world space.
///
/// `Default` gives six zero planes: an unbounded frustum that contains
/// every point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far (unused)
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a projection-view matrix.
    ///
    /// Gribb & Hartmann: each plane is the sum or difference of the 4th
    /// row with one of the first three rows. Assumes OpenGL clip space
    /// (`-w <= z <= w`) for the near plane. Planes are normalized.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();
        let row = |r: usize| Vec4::new(m[0][r], m[1][r], m[2][r], m[3][r]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let mut planes = [Plane::default(); 6];
        planes[PLANE_LEFT] = Plane::from_vec4(r3 + r0).normalized();
        planes[PLANE_RIGHT] = Plane::from_vec4(r3 - r0).normalized();
        planes[PLANE_BOTTOM] = Plane::from_vec4(r3 + r1).normalized();
        planes[PLANE_TOP] = Plane::from_vec4(r3 - r1).normalized();
        planes[PLANE_NEAR] = Plane::from_vec4(r3 + r2).normalized();
        // PLANE_FAR stays the zero plane

        Self { planes }
    }

    /// Test if a point is on the inner side of every plane.
    pub fn contains_point(&self, point: glam::Vec3) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(point) >= 0.0)
    }

    /// Test if a sphere is not more than `radius` behind any plane.
    ///
    /// Despite the name this is an overlap test: spheres straddling a
    /// plane pass.
    pub fn contains_sphere(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(sphere.center) >= -sphere.radius)
    }

    /// Compatibility test with inverted semantics.
    ///
    /// Returns `true` only when **none** of the box's corners is inside
    /// the frustum, which is not what the name suggests. Kept so callers
    /// relying on the historical behavior keep working; use
    /// `fully_contains_box` for real containment.
    pub fn contains_box(&self, aabb: &AABB) -> bool {
        !aabb.corners().iter().any(|corner| self.contains_point(*corner))
    }

    /// Test if all eight corners of the box are inside the frustum.
    pub fn fully_contains_box(&self, aabb: &AABB) -> bool {
        aabb.is_valid() && aabb.corners().iter().all(|corner| self.contains_point(*corner))
    }

    /// Test if a box (potentially) intersects the frustum.
    ///
    /// A box is rejected only when a single plane has all eight corners
    /// strictly behind it. May return false positives near frustum
    /// edges, never false negatives. Invalid boxes never intersect.
    pub fn intersects_box(&self, aabb: &AABB) -> bool {
        let corners = aabb.corners();

        self.planes.iter().all(|plane| {
            corners.iter().any(|corner| plane.signed_distance(*corner) >= 0.0)
        })
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
