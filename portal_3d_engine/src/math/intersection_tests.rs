use glam::Vec3;
use super::*;

// ============================================================================
// AABB / AABB
// ============================================================================

#[test]
fn test_aabb_overlap() {
    let a = AABB::new(Vec3::ZERO, Vec3::splat(2.0));
    let b = AABB::new(Vec3::splat(1.0), Vec3::splat(3.0));
    let c = AABB::new(Vec3::new(2.5, 0.0, 0.0), Vec3::new(4.0, 1.0, 1.0));

    assert!(intersects(&a, &b));
    assert!(!intersects(&a, &c));
}

#[test]
fn test_aabb_touching_faces_intersect() {
    let a = AABB::new(Vec3::ZERO, Vec3::ONE);
    let b = AABB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    assert!(a.intersects(&b));
}

#[test]
fn test_aabb_separated_on_one_axis_only() {
    let a = AABB::new(Vec3::ZERO, Vec3::ONE);
    let b = AABB::new(Vec3::new(0.0, 0.0, 1.5), Vec3::new(1.0, 1.0, 2.0));
    assert!(!a.intersects(&b));
}

#[test]
fn test_aabb_invalid_never_intersects() {
    let a = AABB::new(Vec3::ZERO, Vec3::ONE);
    assert!(!a.intersects(&AABB::invalid()));
    assert!(!AABB::invalid().intersects(&a));
}

// ============================================================================
// Sphere pairs
// ============================================================================

#[test]
fn test_sphere_sphere() {
    let a = Sphere::new(Vec3::ZERO, 1.0);
    let b = Sphere::new(Vec3::new(1.5, 0.0, 0.0), 0.5);
    let c = Sphere::new(Vec3::new(3.0, 0.0, 0.0), 0.5);

    assert!(intersects(&a, &b));
    assert!(!intersects(&a, &c));
    assert!(!intersects(&a, &Sphere::invalid()));
}

#[test]
fn test_aabb_sphere_both_orders() {
    let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);
    let near_corner = Sphere::new(Vec3::new(1.5, 1.5, 0.5), 0.75);
    let far_corner = Sphere::new(Vec3::new(1.5, 1.5, 1.5), 0.75);
    let inside = Sphere::new(Vec3::splat(0.5), 0.1);

    assert!(intersects(&aabb, &near_corner));
    assert!(intersects(&near_corner, &aabb));
    assert!(!intersects(&aabb, &far_corner));
    assert!(!intersects(&far_corner, &aabb));
    assert!(intersects(&aabb, &inside));
    assert!(!intersects(&AABB::invalid(), &inside));
}

// ============================================================================
// Ray pairs
// ============================================================================

#[test]
fn test_ray_aabb_hit() {
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    let aabb = AABB::new(Vec3::new(5.0, -1.0, -1.0), Vec3::new(6.0, 1.0, 1.0));

    assert!(intersects(&ray, &aabb));
    assert!(intersects(&aabb, &ray));
    assert_eq!(ray.slab_interval(&aabb).map(|(t, _)| t), Some(5.0));
}

#[test]
fn test_ray_aabb_zero_direction_components() {
    // Direction has two zero components; relies on ±inf reciprocals
    let ray = Ray::new(Vec3::new(0.5, 0.5, -10.0), Vec3::Z);
    let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);
    assert!(ray.intersects(&aabb));

    let offset = Ray::new(Vec3::new(2.0, 0.5, -10.0), Vec3::Z);
    assert!(!offset.intersects(&aabb));
}

#[test]
fn test_ray_aabb_miss() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0).normalize());
    let aabb = AABB::new(Vec3::new(5.0, -1.0, -1.0), Vec3::new(6.0, 1.0, 1.0));

    assert!(!intersects(&ray, &aabb));
}

#[test]
fn test_ray_sphere() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);

    let toward = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    let away = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
    let beside = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));

    assert!(intersects(&toward, &sphere));
    assert!(intersects(&sphere, &toward));
    assert!(!intersects(&away, &sphere));
    assert!(!intersects(&beside, &sphere));
}

#[test]
fn test_ray_sphere_origin_inside() {
    let sphere = Sphere::new(Vec3::ZERO, 2.0);
    let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::X);
    assert!(ray.intersects(&sphere));
}

#[test]
fn test_ray_sphere_unnormalized_direction() {
    let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0);

    let grazing = Ray::new(Vec3::ZERO, Vec3::new(10.0, 0.9, 0.0));
    let missing = Ray::new(Vec3::ZERO, Vec3::new(10.0, 1.5, 0.0));

    assert!(grazing.intersects(&sphere));
    assert!(!missing.intersects(&sphere));
}

// ============================================================================
// Line / Line
// ============================================================================

#[test]
fn test_crossing_segments_intersect() {
    let a = Line::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
    let b = Line::new(Vec3::new(1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));

    assert!(intersects(&a, &b));
    assert!(intersects(&b, &a));
}

#[test]
fn test_segments_crossing_outside_extent() {
    let a = Line::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
    let b = Line::new(Vec3::new(3.0, -1.0, 0.0), Vec3::new(3.0, 1.0, 0.0));

    assert!(!intersects(&a, &b));
    assert!(!intersects(&b, &a));
}

#[test]
fn test_parallel_segments_never_intersect() {
    let a = Line::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
    let b = Line::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

    assert!(!a.intersects(&b));
}

#[test]
fn test_skew_segments_within_extent_count_as_intersecting() {
    let a = Line::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
    let b = Line::new(Vec3::new(1.0, -1.0, 0.5), Vec3::new(1.0, 1.0, 0.5));

    assert!(a.intersects(&b));
}

// ============================================================================
// Symmetry
// ============================================================================

#[test]
fn test_predicates_are_symmetric() {
    let boxes = [
        AABB::new(Vec3::ZERO, Vec3::ONE),
        AABB::new(Vec3::splat(0.5), Vec3::splat(4.0)),
        AABB::new(Vec3::splat(3.0), Vec3::splat(5.0)),
        AABB::invalid(),
    ];
    let spheres = [
        Sphere::new(Vec3::ZERO, 0.5),
        Sphere::new(Vec3::splat(4.5), 1.0),
        Sphere::invalid(),
    ];
    let rays = [
        Ray::new(Vec3::new(-5.0, 0.5, 0.5), Vec3::X),
        Ray::new(Vec3::splat(10.0), Vec3::new(0.0, 1.0, 0.0)),
    ];

    for a in &boxes {
        for b in &boxes {
            assert_eq!(intersects(a, b), intersects(b, a));
        }
        for s in &spheres {
            assert_eq!(intersects(a, s), intersects(s, a));
        }
        for r in &rays {
            assert_eq!(intersects(a, r), intersects(r, a));
        }
    }
    for a in &spheres {
        for b in &spheres {
            assert_eq!(intersects(a, b), intersects(b, a));
        }
        for r in &rays {
            assert_eq!(intersects(a, r), intersects(r, a));
        }
    }
}
