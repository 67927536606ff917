/// Polygon queries: ground-plane point-in-polygon and ray hits against
/// triangles and convex polygon fans.

use glam::Vec3;
use super::ray::Ray;

/// Smallest accepted hit distance and determinant for ray/triangle tests.
const RAY_TRIANGLE_EPSILON: f32 = 1e-6;

/// Even-odd crossing test of `point` against a polygon, on the XZ plane.
///
/// Y coordinates are ignored. Points exactly on an edge may land on
/// either side.
pub fn point_in_polygon_xz(point: Vec3, vertices: &[Vec3]) -> bool {
    let mut inside = false;
    let mut j = match vertices.len() {
        0 => return false,
        n => n - 1,
    };

    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.z > point.z) != (vj.z > point.z) {
            let crossing_x = (vj.x - vi.x) * (point.z - vi.z) / (vj.z - vi.z) + vi.x;
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Distance along `ray` to triangle `(a, b, c)`, two-sided.
///
/// Only hits in front of the origin are reported; the distance is in
/// units of `ray.direction`.
pub fn ray_triangle_intersection(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);

    if det.abs() < RAY_TRIANGLE_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if t > RAY_TRIANGLE_EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Hit point of `ray` on a convex polygon, tested as a triangle fan
/// around `vertices[0]`. The first fan triangle hit wins.
pub fn ray_polygon_intersection(ray: &Ray, vertices: &[Vec3]) -> Option<Vec3> {
    let (&first, rest) = vertices.split_first()?;

    rest.windows(2)
        .find_map(|edge| ray_triangle_intersection(ray, first, edge[0], edge[1]))
        .map(|t| ray.point_at_distance(t))
}

#[cfg(test)]
#[path = "polygon_tests.rs"]
mod tests;
