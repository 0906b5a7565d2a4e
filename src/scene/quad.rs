use glam::vec2;
use rayon::prelude::*;

use crate::{
    foundation::{
        core::{Affine, Point, Rect, Transform2D},
        error::{SeaglassError, SeaglassResult},
    },
    render::{composite::over, renderer::Renderer, surface::Surface},
    scene::drawable::Drawable,
    water::{mesh::QuadMesh, shader::WaterShader},
};

/// The water shader applied to a quad mesh.
///
/// Pixels whose centers fall inside the transformed quad are shaded with the mesh UV at that
/// point; everything else is left untouched.
#[derive(Clone, Debug)]
pub struct WaterQuad {
    /// Geometry in local space.
    pub mesh: QuadMesh,
    /// Kernel and time uniform.
    pub shader: WaterShader,
    /// Placement relative to the parent.
    pub transform: Transform2D,
}

impl WaterQuad {
    /// Validate the mesh and wrap it with `shader`.
    pub fn new(
        mesh: QuadMesh,
        shader: WaterShader,
        transform: Transform2D,
    ) -> SeaglassResult<Self> {
        mesh.validate()?;
        Ok(Self {
            mesh,
            shader,
            transform,
        })
    }
}

impl Drawable for WaterQuad {
    #[tracing::instrument(skip_all, fields(time = self.shader.uniforms().i_time))]
    fn draw(&self, target: &mut Surface, world: Affine, renderer: &Renderer) -> SeaglassResult<()> {
        let world = world * self.transform.to_affine();
        if world.determinant().abs() < 1e-12 {
            return Ok(());
        }
        let to_uv = self.mesh.local_to_uv() * world.inverse();

        let canvas = target.canvas();
        let covered = world
            .transform_rect_bbox(self.mesh.local_bounds())
            .intersect(canvas.rect());
        if covered.width() <= 0.0 || covered.height() <= 0.0 {
            return Ok(());
        }
        let x0 = covered.x0.floor().max(0.0) as usize;
        let x1 = (covered.x1.ceil() as usize).min(canvas.width as usize);
        let y0 = covered.y0.floor().max(0.0) as usize;
        let y1 = (covered.y1.ceil() as usize).min(canvas.height as usize);
        tracing::debug!(x0, x1, y0, y1, "shading water quad");

        let row_len = canvas.width as usize * 4;
        let shade_row = |(y, row): (usize, &mut [u8])| {
            for x in x0..x1 {
                let uv = to_uv * Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if !(0.0..=1.0).contains(&uv.x) || !(0.0..=1.0).contains(&uv.y) {
                    continue;
                }
                let src = self.shader.shade_rgba8(vec2(uv.x as f32, uv.y as f32));
                let px = &mut row[x * 4..x * 4 + 4];
                let out = over([px[0], px[1], px[2], px[3]], src, 1.0);
                px.copy_from_slice(&out);
            }
        };

        let rows = target
            .data_mut()
            .get_mut(y0 * row_len..y1 * row_len)
            .ok_or_else(|| SeaglassError::render("water quad rows out of range"))?;
        if renderer.settings().parallel {
            rows.par_chunks_exact_mut(row_len)
                .enumerate()
                .map(|(i, row)| (y0 + i, row))
                .for_each(shade_row);
        } else {
            rows.chunks_exact_mut(row_len)
                .enumerate()
                .map(|(i, row)| (y0 + i, row))
                .for_each(shade_row);
        }
        Ok(())
    }

    fn advance(&mut self, step: f32) {
        self.shader.advance(step);
    }

    fn local_bounds(&self) -> Option<Rect> {
        Some(
            self.transform
                .to_affine()
                .transform_rect_bbox(self.mesh.local_bounds()),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/quad.rs"]
mod tests;
