use std::ops::{Add, Mul, Sub};

use glam::{Vec3, vec3};

/// Linear blend `x * (1 - a) + y * a`.
pub fn mix<X, A>(x: X, y: X, a: A) -> X
where
    X: Copy + Mul<A, Output = X> + Add<Output = X> + Sub<Output = X>,
    A: Copy,
{
    x - x * a + y * a
}

/// Clamp to `[0, 1]`.
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Per-lane `powf`.
pub fn pow3(v: Vec3, power: f32) -> Vec3 {
    vec3(v.x.powf(power), v.y.powf(power), v.z.powf(power))
}

/// Mirror `incident` about the plane with normal `normal`.
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn unit_to_u8(v: f32) -> u8 {
    (saturate(v) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
