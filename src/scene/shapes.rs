use crate::{
    foundation::{
        core::{Affine, BezPath, Rect},
        error::{SeaglassError, SeaglassResult},
    },
    render::{
        renderer::Renderer,
        surface::{Surface, affine_to_cpu, bezpath_to_cpu},
    },
    scene::drawable::Drawable,
};

pub(crate) fn paint_color(rgba: [u8; 4]) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = rgba;
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

/// Solid axis-aligned rectangle in local space.
#[derive(Clone, Debug, PartialEq)]
pub struct FillRect {
    /// Local-space rectangle.
    pub rect: Rect,
    /// Straight-alpha RGBA8 fill.
    pub color: [u8; 4],
}

impl FillRect {
    /// Rectangle with its top-left corner at the local origin.
    pub fn sized(width: f64, height: f64, color: [u8; 4]) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            color,
        }
    }
}

impl Drawable for FillRect {
    fn draw(
        &self,
        target: &mut Surface,
        world: Affine,
        _renderer: &Renderer,
    ) -> SeaglassResult<()> {
        let r = self.rect;
        target.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(world));
            ctx.set_paint(paint_color(self.color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
            Ok(())
        })
    }

    fn local_bounds(&self) -> Option<Rect> {
        Some(self.rect)
    }
}

/// Solid filled outline, non-zero winding.
#[derive(Clone, Debug)]
pub struct FillPath {
    /// Local-space outline.
    pub path: BezPath,
    /// Straight-alpha RGBA8 fill.
    pub color: [u8; 4],
}

impl FillPath {
    /// Parse SVG path data (`d` attribute syntax).
    pub fn from_svg(d: &str, color: [u8; 4]) -> SeaglassResult<Self> {
        let d = d.trim();
        if d.is_empty() {
            return Err(SeaglassError::validation("svg path data must be non-empty"));
        }
        let path = BezPath::from_svg(d)
            .map_err(|e| SeaglassError::validation(format!("invalid svg path data: {e}")))?;
        Ok(Self { path, color })
    }
}

impl Drawable for FillPath {
    fn draw(
        &self,
        target: &mut Surface,
        world: Affine,
        _renderer: &Renderer,
    ) -> SeaglassResult<()> {
        let path = bezpath_to_cpu(&self.path);
        target.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(world));
            ctx.set_paint(paint_color(self.color));
            ctx.fill_path(&path);
            Ok(())
        })
    }

    fn local_bounds(&self) -> Option<Rect> {
        use kurbo::Shape as _;
        Some(self.path.bounding_box())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shapes.rs"]
mod tests;
