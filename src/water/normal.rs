use glam::{Vec2, Vec3, vec2, vec3};

use crate::water::waves::HeightField;

/// Surface normal at `pos` from two forward differences of `field`.
///
/// The tangents run toward `-x` and `+z`, and their cross product points up for any finite
/// field, so the result is a unit vector with a positive `y` component.
pub fn normal<H: HeightField + ?Sized>(
    field: &H,
    pos: Vec2,
    e: f32,
    depth: f32,
    iterations: usize,
) -> Vec3 {
    let h = field.sample(pos, iterations) * depth;
    let hx = field.sample(pos - vec2(e, 0.0), iterations) * depth;
    let hz = field.sample(pos + vec2(0.0, e), iterations) * depth;

    let a = vec3(pos.x, h, pos.y);
    let along_x = a - vec3(pos.x - e, hx, pos.y);
    let along_z = a - vec3(pos.x, hz, pos.y + e);
    along_x.cross(along_z).normalize()
}

#[cfg(test)]
#[path = "../../tests/unit/water/normal.rs"]
mod tests;
