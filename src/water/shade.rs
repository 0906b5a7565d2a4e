use glam::{Vec2, Vec3, Vec4, vec2, vec3};

use crate::{
    foundation::math::{mix, reflect},
    water::{
        march::{intersect_plane, raymarch_water_detailed},
        normal::normal,
        params::{FOV_Z, FRESNEL_F0, WaterParams, scatter_tint},
        tonemap::aces_tonemap,
        waves::{HeightField, WaveField},
    },
};

/// Every intermediate of one pixel evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeSample {
    /// Camera position.
    pub origin: Vec3,
    /// Normalized view ray.
    pub ray: Vec3,
    /// Distance from the camera to the water hit.
    pub distance: f32,
    /// Whether the ray march found the surface within its step budget.
    pub converged: bool,
    /// World-space hit position.
    pub hit: Vec3,
    /// Shading normal after distance smoothing.
    pub normal: Vec3,
    /// Schlick reflectance.
    pub fresnel: f32,
    /// Mirror direction, folded to point upward.
    pub reflected: Vec3,
    /// Approximate subsurface color.
    pub scattering: Vec3,
    /// Linear color before exposure and tonemapping.
    pub linear: Vec3,
    /// Display color with alpha 1.
    pub color: Vec4,
}

/// View ray for a UV coordinate in `[0, 1]²` (v grows downward).
pub fn camera_ray(uv: Vec2) -> Vec3 {
    let ndc = vec2(uv.x, 1.0 - uv.y) * 2.0 - 1.0;
    vec3(ndc.x, ndc.y, FOV_Z).normalize()
}

/// Camera origin drifting diagonally over the wave field with time.
pub fn camera_origin(params: &WaterParams, time: f32) -> Vec3 {
    vec3(time, params.camera_height, time)
}

/// Schlick fresnel with `F0 = 0.04`.
pub fn fresnel(n: Vec3, ray: Vec3) -> f32 {
    FRESNEL_F0 + (1.0 - FRESNEL_F0) * (1.0 - (-n).dot(ray).max(0.0)).powi(5)
}

/// Evaluate the full water pipeline for one pixel.
pub fn shade_sample(params: &WaterParams, uv: Vec2, time: f32) -> ShadeSample {
    let field = WaveField {
        time,
        drag_mult: params.drag_mult,
    };
    shade_sample_with(&field, params, uv, time)
}

/// [`shade_sample`] over an arbitrary height field.
pub fn shade_sample_with<H: HeightField + ?Sized>(
    field: &H,
    params: &WaterParams,
    uv: Vec2,
    time: f32,
) -> ShadeSample {
    let depth = params.water_depth;
    let ray = camera_ray(uv);

    let plane_high = Vec3::ZERO;
    let plane_low = vec3(0.0, -depth, 0.0);
    let origin = camera_origin(params, time);

    let high_t = intersect_plane(origin, ray, plane_high, Vec3::Y);
    let low_t = intersect_plane(origin, ray, plane_low, Vec3::Y);
    let high_hit = origin + ray * high_t;
    let low_hit = origin + ray * low_t;

    let march = raymarch_water_detailed(
        field,
        origin,
        high_hit,
        low_hit,
        depth,
        params.iterations_raymarch,
    );
    let dist = march.distance;
    let hit = origin + ray * dist;

    let n = normal(
        field,
        vec2(hit.x, hit.z),
        params.normal_epsilon,
        depth,
        params.iterations_normal,
    );
    // Far away the normal degrades toward flat to hide high-frequency noise.
    let n = mix(n, Vec3::Y, 0.8 * ((dist * 0.01).sqrt() * 1.1).min(1.0));

    let f = fresnel(n, ray);

    let mut reflected = reflect(ray, n).normalize();
    reflected.y = reflected.y.abs();

    let scattering = scatter_tint() * (0.2 + (hit.y + depth) / depth);

    let linear = Vec3::splat(f) + (1.0 - f) * scattering;
    let color = aces_tonemap(linear * params.exposure).extend(1.0);

    ShadeSample {
        origin,
        ray,
        distance: dist,
        converged: march.converged,
        hit,
        normal: n,
        fresnel: f,
        reflected,
        scattering,
        linear,
        color,
    }
}

/// Display color for one pixel.
pub fn shade(params: &WaterParams, uv: Vec2, time: f32) -> Vec4 {
    shade_sample(params, uv, time).color
}

#[cfg(test)]
#[path = "../../tests/unit/water/shade.rs"]
mod tests;
