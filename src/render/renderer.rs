use crate::{
    foundation::{
        core::{Affine, Canvas, Rgba8Premul},
        error::SeaglassResult,
    },
    render::{
        surface::{FrameRGBA, Surface},
        texture::Texture,
    },
    scene::drawable::Drawable,
};

/// Knobs shared by every frame a [`Renderer`] produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Straight-alpha background for [`Renderer::render`]; transparent when unset.
    pub clear_rgba: Option<[u8; 4]>,
    /// Shade water rows on the rayon pool.
    pub parallel: bool,
}

/// CPU renderer for one canvas size.
///
/// Passed explicitly to everything that needs to rasterize, including texture generation
/// during scene construction.
#[derive(Clone, Debug)]
pub struct Renderer {
    canvas: Canvas,
    settings: RenderSettings,
}

impl Renderer {
    /// Create a renderer for `canvas`.
    pub fn new(canvas: Canvas, settings: RenderSettings) -> SeaglassResult<Self> {
        canvas.validate()?;
        Ok(Self { canvas, settings })
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Active settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Fresh transparent canvas-sized surface.
    pub fn new_surface(&self) -> SeaglassResult<Surface> {
        Surface::new(self.canvas)
    }

    /// Render `root` over the configured background.
    #[tracing::instrument(skip_all, fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn render(&self, root: &dyn Drawable) -> SeaglassResult<FrameRGBA> {
        let mut surface = self.new_surface()?;
        if let Some(rgba) = self.settings.clear_rgba {
            surface.clear(Rgba8Premul::from_straight(rgba));
        }
        root.draw(&mut surface, Affine::IDENTITY, self)?;
        Ok(surface.to_frame())
    }

    /// Render `drawable` alone onto a transparent canvas-sized texture.
    #[tracing::instrument(skip_all)]
    pub fn generate_texture(&self, drawable: &dyn Drawable) -> SeaglassResult<Texture> {
        let mut surface = self.new_surface()?;
        drawable.draw(&mut surface, Affine::IDENTITY, self)?;
        Ok(Texture::from_surface(surface))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
