use crate::{
    foundation::{
        core::{Affine, Rect, Transform2D},
        error::{SeaglassError, SeaglassResult},
    },
    render::{renderer::Renderer, surface::Surface},
    scene::drawable::Drawable,
};

/// Container with a transform and group opacity, drawing its children in order.
pub struct SceneNode {
    /// Placement relative to the parent.
    pub transform: Transform2D,
    /// Group opacity in `[0, 1]`.
    pub alpha: f32,
    /// Drawn back to front.
    pub children: Vec<Box<dyn Drawable>>,
}

impl SceneNode {
    /// Empty, fully opaque node.
    pub fn new(transform: Transform2D) -> Self {
        Self {
            transform,
            alpha: 1.0,
            children: Vec::new(),
        }
    }

    /// Builder-style group opacity.
    pub fn with_alpha(mut self, alpha: f32) -> SeaglassResult<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(SeaglassError::validation("node alpha must be in [0, 1]"));
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: impl Drawable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Append a child on top of the existing ones.
    pub fn push(&mut self, child: Box<dyn Drawable>) {
        self.children.push(child);
    }
}

impl Drawable for SceneNode {
    fn draw(&self, target: &mut Surface, world: Affine, renderer: &Renderer) -> SeaglassResult<()> {
        if self.alpha <= 0.0 {
            return Ok(());
        }
        let world = world * self.transform.to_affine();

        if self.alpha >= 1.0 {
            for child in &self.children {
                child.draw(target, world, renderer)?;
            }
            return Ok(());
        }

        // Group opacity applies to the flattened children, not to each one.
        let mut layer = Surface::new(target.canvas())?;
        for child in &self.children {
            child.draw(&mut layer, world, renderer)?;
        }
        target.composite_over(&layer, self.alpha)
    }

    fn advance(&mut self, step: f32) {
        for child in &mut self.children {
            child.advance(step);
        }
    }

    fn local_bounds(&self) -> Option<Rect> {
        let local = self.transform.to_affine();
        self.children
            .iter()
            .filter_map(|c| c.local_bounds())
            .map(|r| local.transform_rect_bbox(r))
            .reduce(|a, b| a.union(b))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
