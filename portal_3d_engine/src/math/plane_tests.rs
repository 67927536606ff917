use glam::{Vec2, Vec3, Vec4};
use super::*;

// ============================================================================
// Plane
// ============================================================================

#[test]
fn test_plane_from_points_winding() {
    let plane = Plane::from_points(
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 1.0),
        Vec3::new(1.0, 2.0, 0.0),
    );

    assert!((plane.normal - Vec3::Y).length() < 1e-6);
    assert!((plane.distance + 2.0).abs() < 1e-6);
    assert!((plane.signed_distance(Vec3::new(5.0, 7.0, -3.0)) - 5.0).abs() < 1e-5);
}

#[test]
fn test_plane_from_collinear_points_is_nan() {
    let plane = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
    assert!(plane.normal.is_nan());
}

#[test]
fn test_point_side() {
    let plane = Plane::new(Vec3::Z, -1.0);

    assert_eq!(plane.point_side(Vec3::new(0.0, 0.0, 2.0)), PlaneSide::Front);
    assert_eq!(plane.point_side(Vec3::new(0.0, 0.0, 0.0)), PlaneSide::Back);
    assert_eq!(plane.point_side(Vec3::new(9.0, 9.0, 1.0)), PlaneSide::On);
}

#[test]
fn test_zero_plane_passes_every_point() {
    let plane = Plane::default();

    assert_eq!(plane.signed_distance(Vec3::new(1e6, -1e6, 3.0)), 0.0);
    assert_eq!(plane.normalized(), plane);
}

#[test]
fn test_normalized_keeps_sign() {
    let plane = Plane::from_vec4(Vec4::new(0.0, 2.0, 0.0, 4.0)).normalized();

    assert_eq!(plane.normal, Vec3::Y);
    assert_eq!(plane.distance, 2.0);
    assert_eq!(plane.signed_distance(Vec3::new(0.0, -3.0, 0.0)), -1.0);
}

// ============================================================================
// Plane2D
// ============================================================================

#[test]
fn test_plane2d_through_point() {
    let plane = Plane2D::through_point(Vec2::X, Vec2::new(3.0, 8.0));

    assert_eq!(plane.distance, 3.0);
    assert_eq!(plane.side(Vec2::new(4.0, 0.0)), PlaneSide::Front);
    assert_eq!(plane.side(Vec2::new(2.0, 0.0)), PlaneSide::Back);
    assert_eq!(plane.side(Vec2::new(3.0, -1.0)), PlaneSide::On);
}
