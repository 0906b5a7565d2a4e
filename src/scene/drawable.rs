use crate::{
    foundation::{
        core::{Affine, Rect},
        error::SeaglassResult,
    },
    render::{renderer::Renderer, surface::Surface},
};

/// Anything that can paint itself onto a surface.
///
/// `world` maps the drawable's local space to surface pixels. Implementations may read the
/// renderer's canvas and settings but never hold on to it.
pub trait Drawable {
    /// Paint onto `target`.
    fn draw(&self, target: &mut Surface, world: Affine, renderer: &Renderer) -> SeaglassResult<()>;

    /// Move animated state forward by `step` time units.
    fn advance(&mut self, _step: f32) {}

    /// Local-space extent, when known.
    fn local_bounds(&self) -> Option<Rect> {
        None
    }
}

impl<D: Drawable + ?Sized> Drawable for Box<D> {
    fn draw(&self, target: &mut Surface, world: Affine, renderer: &Renderer) -> SeaglassResult<()> {
        (**self).draw(target, world, renderer)
    }

    fn advance(&mut self, step: f32) {
        (**self).advance(step);
    }

    fn local_bounds(&self) -> Option<Rect> {
        (**self).local_bounds()
    }
}
