use glam::Vec3;

use crate::water::{
    params::{HIT_EPSILON, PLANE_T_MAX, PLANE_T_MIN, RAYMARCH_STEPS},
    waves::HeightField,
};

/// Ray parameter of a plane hit, clamped to `[PLANE_T_MIN, PLANE_T_MAX]`.
///
/// Hits behind the camera clamp to `-1` and parallel rays (infinite `t`) clamp to a bound
/// instead of being rejected.
pub fn intersect_plane(origin: Vec3, direction: Vec3, point: Vec3, normal: Vec3) -> f32 {
    ((point - origin).dot(normal) / direction.dot(normal)).clamp(PLANE_T_MIN, PLANE_T_MAX)
}

/// Outcome of a ray march between the two water planes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchResult {
    /// Distance from the camera to the reported hit.
    pub distance: f32,
    /// Steps taken before the hit, or [`RAYMARCH_STEPS`] on a miss.
    pub steps: usize,
    /// `false` when the step budget ran out and the high-plane distance was reported.
    pub converged: bool,
}

/// March from `start` (high plane) toward `end` (low plane) over `field`.
///
/// Each step moves along the segment by the vertical mismatch between the marched point and
/// the surface. A point within [`HIT_EPSILON`] above the surface is a hit.
pub fn raymarch_water_detailed<H: HeightField + ?Sized>(
    field: &H,
    camera: Vec3,
    start: Vec3,
    end: Vec3,
    depth: f32,
    iterations: usize,
) -> MarchResult {
    let mut pos = start;
    // A degenerate segment has no direction; marching in place ends in the miss fallback.
    let dir = (end - start).normalize_or_zero();

    for step in 0..RAYMARCH_STEPS {
        let height = field.sample(glam::vec2(pos.x, pos.z), iterations) * depth - depth;
        if height + HIT_EPSILON > pos.y {
            return MarchResult {
                distance: pos.distance(camera),
                steps: step,
                converged: true,
            };
        }
        pos += dir * (pos.y - height);
    }

    MarchResult {
        distance: start.distance(camera),
        steps: RAYMARCH_STEPS,
        converged: false,
    }
}

/// Distance from `camera` to the water surface along the `start..end` segment.
pub fn raymarch_water<H: HeightField + ?Sized>(
    field: &H,
    camera: Vec3,
    start: Vec3,
    end: Vec3,
    depth: f32,
    iterations: usize,
) -> f32 {
    raymarch_water_detailed(field, camera, start, end, depth, iterations).distance
}

#[cfg(test)]
#[path = "../../tests/unit/water/march.rs"]
mod tests;
