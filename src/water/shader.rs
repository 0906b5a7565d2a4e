use glam::{Vec2, Vec4, vec2};
use rayon::prelude::*;

use crate::{
    foundation::{
        core::Canvas,
        error::{SeaglassError, SeaglassResult},
        math::unit_to_u8,
    },
    water::{
        params::{DEFAULT_TICK_STEP, WaterParams},
        shade::{ShadeSample, shade, shade_sample},
    },
};

/// Per-draw uniform block bound by the host before rasterizing the water quad.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaterUniforms {
    /// Animation time; grows by a fixed step per tick.
    #[serde(rename = "iTime")]
    pub i_time: f32,
}

/// The water kernel plus its mutable time uniform.
///
/// Shading is pure; the only state is `i_time`, which the host advances once per frame with
/// [`WaterShader::advance`] and reads back through [`WaterShader::uniforms`].
#[derive(Clone, Debug)]
pub struct WaterShader {
    params: WaterParams,
    uniforms: WaterUniforms,
    tick_step: f32,
}

impl WaterShader {
    /// Build a shader at `iTime = 0`.
    pub fn new(params: WaterParams) -> SeaglassResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            uniforms: WaterUniforms::default(),
            tick_step: DEFAULT_TICK_STEP,
        })
    }

    /// Override the fixed step used by [`WaterShader::tick`].
    pub fn with_tick_step(mut self, step: f32) -> SeaglassResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(SeaglassError::validation(
                "water tick_step must be finite and > 0",
            ));
        }
        self.tick_step = step;
        Ok(self)
    }

    /// Kernel constants.
    pub fn params(&self) -> &WaterParams {
        &self.params
    }

    /// Current uniform values.
    pub fn uniforms(&self) -> WaterUniforms {
        self.uniforms
    }

    /// Fixed per-tick step.
    pub fn tick_step(&self) -> f32 {
        self.tick_step
    }

    /// Advance the time uniform by `step`.
    pub fn advance(&mut self, step: f32) {
        self.uniforms.i_time += step;
    }

    /// Advance the time uniform by the fixed tick step.
    pub fn tick(&mut self) {
        self.advance(self.tick_step);
    }

    /// Replace the time uniform.
    pub fn set_time(&mut self, time: f32) {
        self.uniforms.i_time = time;
    }

    /// Display color at `uv` for the current uniforms.
    pub fn shade(&self, uv: Vec2) -> Vec4 {
        shade(&self.params, uv, self.uniforms.i_time)
    }

    /// Full diagnostic sample at `uv` for the current uniforms.
    pub fn sample(&self, uv: Vec2) -> ShadeSample {
        shade_sample(&self.params, uv, self.uniforms.i_time)
    }

    /// Opaque RGBA8 color at `uv`.
    pub fn shade_rgba8(&self, uv: Vec2) -> [u8; 4] {
        let c = self.shade(uv);
        [unit_to_u8(c.x), unit_to_u8(c.y), unit_to_u8(c.z), unit_to_u8(c.w)]
    }

    /// Shade a full `width × height` texture, sampling UV at pixel centers.
    ///
    /// Rows are independent, so `parallel` only changes scheduling, never the bytes.
    #[tracing::instrument(skip(self), fields(time = self.uniforms.i_time))]
    pub fn render_rgba8(
        &self,
        width: u32,
        height: u32,
        parallel: bool,
    ) -> SeaglassResult<Vec<u8>> {
        let mut out = vec![0u8; Canvas::new(width, height)?.rgba8_len()];
        let row_len = width as usize * 4;
        let (w, h) = (width as f32, height as f32);
        let shade_row = |(y, row): (usize, &mut [u8])| {
            let v = (y as f32 + 0.5) / h;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let uv = vec2((x as f32 + 0.5) / w, v);
                px.copy_from_slice(&self.shade_rgba8(uv));
            }
        };

        if parallel {
            out.par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(shade_row);
        } else {
            out.chunks_exact_mut(row_len).enumerate().for_each(shade_row);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/water/shader.rs"]
mod tests;
