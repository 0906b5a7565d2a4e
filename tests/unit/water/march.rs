use super::*;
use glam::{Vec2, vec3};

struct Flat(f32);

impl HeightField for Flat {
    fn sample(&self, _xz: Vec2, _iterations: usize) -> f32 {
        self.0
    }
}

const UP: Vec3 = Vec3::Y;

#[test]
fn intersect_plane_hits_in_front() {
    let t = intersect_plane(vec3(0.0, 1.5, 0.0), vec3(0.0, -1.0, 0.0), Vec3::ZERO, UP);
    assert!((t - 1.5).abs() < 1e-6);
}

#[test]
fn intersect_plane_clamps_behind_and_parallel() {
    let origin = vec3(0.0, 1.5, 0.0);
    assert_eq!(intersect_plane(origin, UP, Vec3::ZERO, UP), -1.0);
    assert_eq!(intersect_plane(origin, Vec3::Z, Vec3::ZERO, UP), -1.0);

    let grazing = vec3(0.0, -1e-9, 1.0).normalize();
    assert_eq!(intersect_plane(origin, grazing, Vec3::ZERO, UP), PLANE_T_MAX);
}

#[test]
fn flat_field_vertical_ray_hits_analytic_plane() {
    let field = Flat(0.4);
    let depth = 1.0;
    let h0 = 0.4 * depth - depth;
    let camera = vec3(0.0, 1.5, 0.0);

    let r = raymarch_water_detailed(
        &field,
        camera,
        Vec3::ZERO,
        vec3(0.0, -depth, 0.0),
        depth,
        12,
    );
    assert!(r.converged);
    assert_eq!(r.steps, 1);
    assert!((r.distance - (1.5 - h0)).abs() < 1e-5, "{}", r.distance);
}

#[test]
fn flat_field_oblique_ray_converges_before_the_fallback() {
    let field = Flat(0.4);
    let depth = 1.0;
    let h0 = 0.4 * depth - depth;
    let camera = vec3(0.25, 1.5, -3.0);
    let ray = vec3(0.0, -0.5, 1.0).normalize();

    let t_high = intersect_plane(camera, ray, Vec3::ZERO, UP);
    let t_low = intersect_plane(camera, ray, vec3(0.0, -depth, 0.0), UP);
    let start = camera + ray * t_high;
    let end = camera + ray * t_low;

    let r = raymarch_water_detailed(&field, camera, start, end, depth, 12);
    let analytic = (h0 - camera.y) / ray.y;

    assert!(r.converged);
    assert!(r.steps < RAYMARCH_STEPS);
    assert!(r.distance <= analytic + 1e-4);
    assert!(
        analytic - r.distance <= HIT_EPSILON / ray.y.abs() + 1e-4,
        "distance {} analytic {}",
        r.distance,
        analytic
    );
    assert!((r.distance - start.distance(camera)).abs() > 0.1);
}

#[test]
fn surface_at_high_plane_hits_immediately() {
    let camera = vec3(0.0, 1.5, 0.0);
    let r = raymarch_water_detailed(
        &Flat(1.0),
        camera,
        Vec3::ZERO,
        vec3(0.0, -1.0, 0.0),
        1.0,
        12,
    );
    assert!(r.converged);
    assert_eq!(r.steps, 0);
    assert!((r.distance - 1.5).abs() < 1e-6);
}

#[test]
fn degenerate_segment_falls_back_to_start_distance() {
    let camera = vec3(0.0, 1.5, 0.0);
    let start = vec3(0.0, 1.5, -1.0);

    let r = raymarch_water_detailed(&Flat(0.5), camera, start, start, 1.0, 12);
    assert!(!r.converged);
    assert_eq!(r.steps, RAYMARCH_STEPS);
    assert!((r.distance - 1.0).abs() < 1e-6);
    assert_eq!(
        raymarch_water(&Flat(0.5), camera, start, start, 1.0, 12),
        r.distance
    );
}
