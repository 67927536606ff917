/// Pairwise intersection predicates.
///
/// Every pair is exposed through the `Intersects` trait, implemented in
/// both argument orders where the pair is mixed, plus the free function
/// `intersects(a, b)`. All predicates are pure and return `false` when
/// either operand is invalid.

use glam::Vec3;
use super::aabb::AABB;
use super::line::Line;
use super::ray::Ray;
use super::sphere::Sphere;

/// Determinant below which two segments count as parallel.
///
/// Absolute, so long near-parallel segments that do cross can also be
/// rejected. Known approximation.
pub const LINE_PARALLEL_THRESHOLD: f32 = 1e-4;

/// Boolean overlap test between two shapes.
pub trait Intersects<Rhs: ?Sized = Self> {
    fn intersects(&self, other: &Rhs) -> bool;
}

/// `a.intersects(b)` as a free function.
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: Intersects<B>,
{
    a.intersects(b)
}

// ===== AABB / SPHERE =====

impl Intersects for AABB {
    fn intersects(&self, other: &AABB) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        let overlap = self.max.min(other.max) - self.min.max(other.min);
        overlap.cmpge(Vec3::ZERO).all()
    }
}

impl Intersects for Sphere {
    fn intersects(&self, other: &Sphere) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        self.center.distance(other.center) <= self.radius + other.radius
    }
}

impl Intersects<Sphere> for AABB {
    fn intersects(&self, sphere: &Sphere) -> bool {
        if !self.is_valid() || !sphere.is_valid() {
            return false;
        }
        let closest = sphere.center.clamp(self.min, self.max);
        sphere.center.distance(closest) <= sphere.radius
    }
}

impl Intersects<AABB> for Sphere {
    fn intersects(&self, aabb: &AABB) -> bool {
        aabb.intersects(self)
    }
}

// ===== RAY =====

impl Intersects<AABB> for Ray {
    fn intersects(&self, aabb: &AABB) -> bool {
        self.slab_interval(aabb).is_some()
    }
}

impl Intersects<Ray> for AABB {
    fn intersects(&self, ray: &Ray) -> bool {
        ray.intersects(self)
    }
}

impl Intersects<Sphere> for Ray {
    fn intersects(&self, sphere: &Sphere) -> bool {
        if !sphere.is_valid() {
            return false;
        }

        let m = self.origin - sphere.center;
        let b = m.dot(self.direction);
        let c = m.dot(m) - sphere.radius * sphere.radius;

        // Origin outside the sphere and pointing away from it
        if c > 0.0 && b > 0.0 {
            return false;
        }

        let a = self.direction.dot(self.direction);
        b * b - a * c >= 0.0
    }
}

impl Intersects<Ray> for Sphere {
    fn intersects(&self, ray: &Ray) -> bool {
        ray.intersects(self)
    }
}

// ===== LINE =====

/// Closest-approach test between two segments.
///
/// Solves for the parameters `s`, `t` of the closest points on the two
/// supporting lines and reports an intersection when both lie in
/// `[0, 1]`. The distance between those closest points is not checked,
/// so skew segments that pass near each other within their extents also
/// count. Near-parallel pairs (`det < LINE_PARALLEL_THRESHOLD`) never
/// intersect.
impl Intersects for Line {
    fn intersects(&self, other: &Line) -> bool {
        let d1 = self.v2 - self.v1;
        let d2 = other.v2 - other.v1;
        let r = self.v1 - other.v1;

        let a = d1.dot(d1);
        let b = d1.dot(d2);
        let e = d2.dot(d2);
        let c = d1.dot(r);
        let f = d2.dot(r);

        let det = a * e - b * b;
        if det.is_nan() || det < LINE_PARALLEL_THRESHOLD {
            return false;
        }

        let s = (b * f - c * e) / det;
        let t = (a * f - b * c) / det;

        (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)
    }
}

#[cfg(test)]
#[path = "intersection_tests.rs"]
mod tests;
