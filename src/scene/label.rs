use std::borrow::Cow;

use crate::{
    foundation::{
        core::{Affine, Point, Rect, Vec2},
        error::{SeaglassError, SeaglassResult},
    },
    render::{
        renderer::Renderer,
        surface::{Surface, affine_to_cpu},
    },
    scene::drawable::Drawable,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<[u8; 4]> for TextBrushRgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Reusable Parley contexts for shaping single-line labels from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    weight: parley::style::FontWeight,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Fresh contexts with no registered fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            weight: parley::style::FontWeight::NORMAL,
        }
    }

    /// Weight requested for every layout; a collection with several faces picks the closest.
    pub fn with_weight(mut self, weight: parley::style::FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Shape `text` with the first family found in `font_bytes`.
    pub fn layout_line(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> SeaglassResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SeaglassError::validation(
                "label size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SeaglassError::validation("font bytes contain no font family"))?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SeaglassError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(self.weight));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Shaped text placed by an anchor point.
///
/// `anchor` is a fraction of the laid-out box: `(0.5, 0.5)` centers the text on `position`.
pub struct Label {
    layout: parley::Layout<TextBrushRgba8>,
    font: vello_cpu::peniko::FontData,
    /// Local position of the anchor point.
    pub position: Point,
    /// Anchor as a fraction of the text box.
    pub anchor: Vec2,
}

impl Label {
    /// Lay out `text` once; drawing reuses the glyph positions.
    pub fn new(
        engine: &mut TextLayoutEngine,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        color: [u8; 4],
    ) -> SeaglassResult<Self> {
        let layout = engine.layout_line(text, font_bytes, size_px, color.into())?;
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );
        Ok(Self {
            layout,
            font,
            position: Point::ORIGIN,
            anchor: Vec2::ZERO,
        })
    }

    /// Builder-style placement.
    pub fn placed(mut self, position: Point, anchor: Vec2) -> Self {
        self.position = position;
        self.anchor = anchor;
        self
    }

    /// Laid-out width and height.
    pub fn size(&self) -> Vec2 {
        Vec2::new(f64::from(self.layout.width()), f64::from(self.layout.height()))
    }

    fn origin(&self) -> Point {
        let size = self.size();
        self.position - Vec2::new(self.anchor.x * size.x, self.anchor.y * size.y)
    }
}

impl Drawable for Label {
    fn draw(
        &self,
        target: &mut Surface,
        world: Affine,
        _renderer: &Renderer,
    ) -> SeaglassResult<()> {
        let transform = world * Affine::translate(self.origin().to_vec2());
        target.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(transform));
            for line in self.layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };

                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));

                    // Pen offset and baseline are folded into each glyph.
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&self.font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            Ok(())
        })
    }

    fn local_bounds(&self) -> Option<Rect> {
        Some(Rect::from_origin_size(self.origin(), self.size().to_size()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/label.rs"]
mod tests;
