use crate::{
    foundation::{
        core::{Affine, Rect, Transform2D},
        error::SeaglassResult,
    },
    render::{
        composite::{MaskChannel, mask_in_place, over_in_place},
        renderer::Renderer,
        surface::{Surface, affine_to_cpu},
        texture::Texture,
    },
    scene::{
        drawable::Drawable,
        label::Label,
        node::SceneNode,
        shapes::{FillPath, FillRect},
    },
};

/// A texture drawn at a transform; its local space is the texture's pixel grid.
#[derive(Clone, Debug)]
pub struct Sprite {
    /// Pixels to draw.
    pub texture: Texture,
    /// Placement relative to the parent.
    pub transform: Transform2D,
}

impl Sprite {
    /// Sprite at the parent origin.
    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            transform: Transform2D::default(),
        }
    }
}

impl Drawable for Sprite {
    fn draw(
        &self,
        target: &mut Surface,
        world: Affine,
        _renderer: &Renderer,
    ) -> SeaglassResult<()> {
        let world = world * self.transform.to_affine();
        if world == Affine::IDENTITY && self.texture.canvas() == target.canvas() {
            return over_in_place(target.data_mut(), self.texture.data(), 1.0);
        }

        let size = self.texture.canvas();
        target.paint(|ctx| {
            ctx.set_transform(affine_to_cpu(world));
            ctx.set_paint(self.texture.paint());
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(size.width),
                f64::from(size.height),
            ));
            Ok(())
        })
    }

    fn local_bounds(&self) -> Option<Rect> {
        Some(
            self.transform
                .to_affine()
                .transform_rect_bbox(self.texture.canvas().rect()),
        )
    }
}

/// Draws `content` with its coverage multiplied by the rendered `mask`.
///
/// Both are drawn with the same world transform, so a mask attached to a node moves with it.
pub struct Masked {
    /// What is shown.
    pub content: Box<dyn Drawable>,
    /// Where it is shown.
    pub mask: Box<dyn Drawable>,
    /// Which mask channel gives coverage.
    pub channel: MaskChannel,
}

impl Drawable for Masked {
    fn draw(&self, target: &mut Surface, world: Affine, renderer: &Renderer) -> SeaglassResult<()> {
        let mut content = Surface::new(target.canvas())?;
        self.content.draw(&mut content, world, renderer)?;

        let mut mask = Surface::new(target.canvas())?;
        self.mask.draw(&mut mask, world, renderer)?;

        mask_in_place(content.data_mut(), mask.data(), self.channel)?;
        target.composite_over(&content, 1.0)
    }

    fn advance(&mut self, step: f32) {
        self.content.advance(step);
        self.mask.advance(step);
    }

    fn local_bounds(&self) -> Option<Rect> {
        self.content.local_bounds()
    }
}

/// Parts of a canvas-sized stencil: an opaque fill with dark shapes punched into it.
pub struct MaskLayout {
    /// Straight RGBA8 fill covering the canvas.
    pub fill: [u8; 4],
    /// Optional text drawn on top of the fill.
    pub label: Option<Label>,
    /// Extra shapes drawn on top of the fill.
    pub cutouts: Vec<FillPath>,
}

/// Renders mask stencils into textures through an injected renderer.
pub struct MaskTextureGenerator<'r> {
    renderer: &'r Renderer,
}

impl<'r> MaskTextureGenerator<'r> {
    /// Generator bound to `renderer`.
    pub fn new(renderer: &'r Renderer) -> Self {
        Self { renderer }
    }

    /// Assemble the stencil container without rendering it.
    pub fn container(&self, layout: MaskLayout) -> SceneNode {
        let canvas = self.renderer.canvas();
        let mut node = SceneNode::new(Transform2D::default()).with_child(FillRect {
            rect: canvas.rect(),
            color: layout.fill,
        });
        if let Some(label) = layout.label {
            node.push(Box::new(label));
        }
        for cutout in layout.cutouts {
            node.push(Box::new(cutout));
        }
        node
    }

    /// Render the stencil once into a static texture.
    #[tracing::instrument(skip_all)]
    pub fn generate(&self, layout: MaskLayout) -> SeaglassResult<Texture> {
        let container = self.container(layout);
        self.renderer.generate_texture(&container)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mask.rs"]
mod tests;
