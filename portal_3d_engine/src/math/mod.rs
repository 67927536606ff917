//! Math module — bounding volumes and intersection tests.
//!
//! Value types only. Invalid shapes are NaN-sentineled and every query
//! on them answers `false` instead of failing.

mod aabb;
mod intersection;
mod line;
mod plane;
mod polygon;
mod ray;
mod sphere;

pub use aabb::AABB;
pub use intersection::{intersects, Intersects, LINE_PARALLEL_THRESHOLD};
pub use line::{Line, Line2, LINE_EPSILON};
pub use plane::{Plane, Plane2D, PlaneSide};
pub use polygon::{point_in_polygon_xz, ray_polygon_intersection, ray_triangle_intersection};
pub use ray::Ray;
pub use sphere::Sphere;
