use glam::Vec3;
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_invalid_sphere() {
    let sphere = Sphere::invalid();

    assert!(!sphere.is_valid());
    assert!(!sphere.contains_point(Vec3::ZERO));
    assert!(!Sphere::from_points(&[]).is_valid());
}

#[test]
fn test_first_point_gives_zero_radius() {
    let mut sphere = Sphere::default();
    sphere += Vec3::new(1.0, 2.0, 3.0);

    assert!(sphere.is_valid());
    assert_eq!(sphere.center, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(sphere.radius, 0.0);
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn test_contains_point() {
    let sphere = Sphere::new(Vec3::ZERO, 1.0);

    assert!(!sphere.contains_point(Vec3::new(2.0, 0.0, 0.0)));
    assert!(sphere.contains_point(Vec3::new(0.5, 0.0, 0.0)));
    assert!(sphere.contains_point(Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn test_contains_sphere() {
    let outer = Sphere::new(Vec3::ZERO, 3.0);

    assert!(outer.contains_sphere(&Sphere::new(Vec3::new(1.0, 0.0, 0.0), 1.5)));
    assert!(!outer.contains_sphere(&Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.5)));
}

// ============================================================================
// Incremental growth
// ============================================================================

#[test]
fn test_growth_covers_new_point_and_previous_sphere() {
    let mut sphere = Sphere::new(Vec3::ZERO, 1.0);
    let point = Vec3::new(5.0, 0.0, 0.0);
    sphere += point;

    // New radius is the average of the old radius and the distance
    assert!((sphere.radius - 3.0).abs() < 1e-5);
    assert!((sphere.center - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    assert!((sphere.center.distance(point) - sphere.radius).abs() < 1e-5);
    assert!(sphere.contains_sphere(&Sphere::new(Vec3::ZERO, 1.0 - 1e-4)));
}

#[test]
fn test_point_inside_does_not_grow() {
    let mut sphere = Sphere::new(Vec3::ZERO, 2.0);
    sphere += Vec3::new(0.5, 0.5, 0.5);

    assert_eq!(sphere.center, Vec3::ZERO);
    assert_eq!(sphere.radius, 2.0);
}

#[test]
fn test_from_points_contains_all_points() {
    let points = [
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 3.0, 0.0),
        Vec3::new(0.0, 0.0, -2.0),
    ];
    let sphere = Sphere::from_points(&points);

    for p in &points {
        assert!(sphere.center.distance(*p) <= sphere.radius + 1e-4);
    }
}

#[test]
fn test_growth_is_order_dependent() {
    let a = Vec3::new(-4.0, 0.0, 0.0);
    let b = Vec3::new(4.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 4.0, 0.0);

    let forward = Sphere::from_points(&[a, b, c]);
    let reversed = Sphere::from_points(&[c, b, a]);

    assert!((forward.center - reversed.center).length() > 1e-3);
}
