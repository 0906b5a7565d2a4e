use std::path::Path;

use anyhow::Context as _;

use crate::{
    config::DemoConfig,
    foundation::{
        core::{Affine, Rect, Transform2D, Vec2},
        error::SeaglassResult,
    },
    render::{
        renderer::{RenderSettings, Renderer},
        surface::{FrameRGBA, Surface},
    },
    scene::{
        drawable::Drawable,
        label::{Label, TextLayoutEngine},
        mask::{MaskLayout, MaskTextureGenerator, Masked, Sprite},
        node::SceneNode,
        quad::WaterQuad,
        shapes::{FillPath, FillRect},
    },
    water::{mesh::QuadMesh, shader::WaterShader},
};

/// Read a font file for the mask label.
pub fn load_font(path: &Path) -> SeaglassResult<Vec<u8>> {
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    Ok(bytes)
}

/// Renderer sized and cleared for `config`.
pub fn renderer_for(config: &DemoConfig, parallel: bool) -> SeaglassResult<Renderer> {
    Renderer::new(
        config.canvas,
        RenderSettings {
            clear_rgba: Some(config.background),
            parallel,
        },
    )
}

/// The demo composition: a translucent overlay with a text-shaped hole, and the water quad
/// drawn above it.
///
/// The mask texture is rendered once at build time and never refreshed.
pub struct DemoScene {
    root: SceneNode,
    tick_step: f32,
    ticks: u64,
    time: f32,
}

impl DemoScene {
    /// Build the scene, rendering the mask stencil through `renderer`.
    ///
    /// Without `font` the label is left out of the stencil.
    #[tracing::instrument(skip_all)]
    pub fn build(
        config: &DemoConfig,
        renderer: &Renderer,
        font: Option<&[u8]>,
    ) -> SeaglassResult<Self> {
        config.validate()?;
        let canvas = renderer.canvas();
        let center = canvas.center();

        let label = match (font, config.mask.label.is_empty()) {
            (_, true) => None,
            (Some(bytes), false) => {
                let mut engine =
                    TextLayoutEngine::new().with_weight(parley::style::FontWeight::BOLD);
                let label = Label::new(
                    &mut engine,
                    &config.mask.label,
                    bytes,
                    config.mask.font_size,
                    config.mask.label_rgba,
                )?;
                Some(label.placed(center, Vec2::new(0.5, 0.5)))
            }
            (None, false) => {
                tracing::warn!(label = %config.mask.label, "no font available; mask label skipped");
                None
            }
        };
        let cutouts = config
            .mask
            .cutouts
            .iter()
            .map(|d| FillPath::from_svg(d, config.mask.label_rgba))
            .collect::<SeaglassResult<Vec<_>>>()?;

        let mask = MaskTextureGenerator::new(renderer).generate(MaskLayout {
            fill: [255, 255, 255, 255],
            label,
            cutouts,
        })?;

        let overlay = SceneNode::new(
            Transform2D::at(center.x, center.y).with_pivot(center.x, center.y),
        )
        .with_alpha(config.mask.overlay_alpha)?
        .with_child(Masked {
            content: Box::new(FillRect {
                rect: canvas.rect(),
                color: config.mask.overlay_rgba,
            }),
            mask: Box::new(Sprite::new(mask)),
            channel: config.mask.channel,
        });

        let w = &config.water;
        let shader = WaterShader::new(w.params)?.with_tick_step(w.tick_step)?;
        let quad = WaterQuad::new(
            QuadMesh::centered(w.half_extent)?,
            shader,
            Transform2D::at(w.position[0], w.position[1]).with_scale(w.scale),
        )?;

        let root = SceneNode::new(Transform2D::default())
            .with_child(overlay)
            .with_child(quad);

        Ok(Self {
            root,
            tick_step: w.tick_step,
            ticks: 0,
            time: 0.0,
        })
    }

    /// Advance by one fixed tick.
    pub fn tick(&mut self) {
        self.advance(self.tick_step);
    }

    /// Ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current water time uniform.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Fixed tick step.
    pub fn tick_step(&self) -> f32 {
        self.tick_step
    }

    /// Scene graph root.
    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    /// Render the current state.
    pub fn render(&self, renderer: &Renderer) -> SeaglassResult<FrameRGBA> {
        renderer.render(self)
    }
}

impl Drawable for DemoScene {
    fn draw(&self, target: &mut Surface, world: Affine, renderer: &Renderer) -> SeaglassResult<()> {
        self.root.draw(target, world, renderer)
    }

    fn advance(&mut self, step: f32) {
        self.root.advance(step);
        self.time += step;
        self.ticks += 1;
    }

    fn local_bounds(&self) -> Option<Rect> {
        self.root.local_bounds()
    }
}

#[cfg(test)]
#[path = "../tests/unit/demo.rs"]
mod tests;
