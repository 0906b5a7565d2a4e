use glam::{Vec3, vec3};

use crate::foundation::error::{SeaglassError, SeaglassResult};

/// How strongly each octave drags the sample position of the next one.
pub const DRAG_MULT: f32 = 0.28;
/// Vertical distance between the high (`y = 0`) and low water planes.
pub const WATER_DEPTH: f32 = 1.0;
/// Camera height above the high water plane.
pub const CAMERA_HEIGHT: f32 = 1.5;
/// Octaves used while searching for the surface.
pub const ITERATIONS_RAYMARCH: usize = 12;
/// Octaves used for shading normals.
pub const ITERATIONS_NORMAL: usize = 40;
/// Hard cap on octaves per height evaluation.
pub const MAX_ITERATIONS: usize = 100;
/// Hard cap on ray-march steps.
pub const RAYMARCH_STEPS: usize = 64;
/// A marched point this close above the surface counts as a hit.
pub const HIT_EPSILON: f32 = 0.01;
/// Finite-difference offset for normals.
pub const NORMAL_EPSILON: f32 = 0.01;
/// Camera ray z component; fixes the field of view.
pub const FOV_Z: f32 = 1.5;
/// Ray parameter bounds for plane intersections.
pub const PLANE_T_MIN: f32 = -1.0;
/// Upper bound for plane intersection distance.
pub const PLANE_T_MAX: f32 = 9_991_999.0;
/// Reflectance at normal incidence.
pub const FRESNEL_F0: f32 = 0.04;
/// Exposure applied before tonemapping.
pub const EXPOSURE: f32 = 2.0;
/// Fixed animation step applied once per tick.
pub const DEFAULT_TICK_STEP: f32 = 0.2;

/// Base tint of light scattered inside the water volume.
pub fn scatter_tint() -> Vec3 {
    vec3(0.0293, 0.0698, 0.1717)
}

/// Tunable constants of the water kernel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaterParams {
    /// See [`DRAG_MULT`].
    pub drag_mult: f32,
    /// See [`WATER_DEPTH`].
    pub water_depth: f32,
    /// See [`CAMERA_HEIGHT`].
    pub camera_height: f32,
    /// Octaves per height sample while ray marching.
    pub iterations_raymarch: usize,
    /// Octaves per height sample while estimating normals.
    pub iterations_normal: usize,
    /// Finite-difference offset for normals.
    pub normal_epsilon: f32,
    /// Multiplier applied to the linear color before tonemapping.
    pub exposure: f32,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            drag_mult: DRAG_MULT,
            water_depth: WATER_DEPTH,
            camera_height: CAMERA_HEIGHT,
            iterations_raymarch: ITERATIONS_RAYMARCH,
            iterations_normal: ITERATIONS_NORMAL,
            normal_epsilon: NORMAL_EPSILON,
            exposure: EXPOSURE,
        }
    }
}

impl WaterParams {
    /// Reject values that would make the kernel degenerate.
    pub fn validate(&self) -> SeaglassResult<()> {
        if !self.drag_mult.is_finite() {
            return Err(SeaglassError::validation("water drag_mult must be finite"));
        }
        if !self.water_depth.is_finite() || self.water_depth <= 0.0 {
            return Err(SeaglassError::validation(
                "water water_depth must be finite and > 0",
            ));
        }
        if !self.camera_height.is_finite() {
            return Err(SeaglassError::validation(
                "water camera_height must be finite",
            ));
        }
        if !self.normal_epsilon.is_finite() || self.normal_epsilon <= 0.0 {
            return Err(SeaglassError::validation(
                "water normal_epsilon must be finite and > 0",
            ));
        }
        if !self.exposure.is_finite() || self.exposure < 0.0 {
            return Err(SeaglassError::validation(
                "water exposure must be finite and >= 0",
            ));
        }
        for (name, its) in [
            ("iterations_raymarch", self.iterations_raymarch),
            ("iterations_normal", self.iterations_normal),
        ] {
            if its == 0 || its > MAX_ITERATIONS {
                return Err(SeaglassError::validation(format!(
                    "water {name} must be in 1..={MAX_ITERATIONS}, got {its}"
                )));
            }
        }
        Ok(())
    }
}
