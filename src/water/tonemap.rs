use glam::{Mat3, Vec3, vec3};

use crate::foundation::math::pow3;

/// Display gamma applied after tonemapping.
pub const GAMMA: f32 = 2.2;

/// Linear sRGB to the ACES fitted input space (column-major).
pub fn aces_input_matrix() -> Mat3 {
    Mat3::from_cols(
        vec3(0.59719, 0.07600, 0.02840),
        vec3(0.35458, 0.90834, 0.13383),
        vec3(0.04823, 0.01566, 0.83777),
    )
}

/// ACES fitted output space back to linear sRGB (column-major).
pub fn aces_output_matrix() -> Mat3 {
    Mat3::from_cols(
        vec3(1.60475, -0.10208, -0.00327),
        vec3(-0.53108, 1.10813, -0.07276),
        vec3(-0.07367, -0.00605, 1.07602),
    )
}

/// Rational fit of the ACES RRT + ODT curve.
fn rrt_and_odt_fit(v: Vec3) -> Vec3 {
    let a = v * (v + 0.0245786) - 0.000090537;
    let b = v * (0.983729 * v + 0.4329510) + 0.238081;
    a / b
}

/// ACES filmic tonemap followed by gamma encoding; output is clamped to `[0, 1]`.
pub fn aces_tonemap(color: Vec3) -> Vec3 {
    let v = aces_input_matrix() * color;
    let mapped = aces_output_matrix() * rrt_and_odt_fit(v);
    pow3(mapped.clamp(Vec3::ZERO, Vec3::ONE), 1.0 / GAMMA)
}

#[cfg(test)]
#[path = "../../tests/unit/water/tonemap.rs"]
mod tests;
