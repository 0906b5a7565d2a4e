use std::sync::Arc;

use crate::{
    foundation::core::Canvas,
    render::{composite::PremulRgba8, surface::Surface},
};

/// Immutable premultiplied image, cheap to clone and share between sprites.
#[derive(Clone)]
pub struct Texture {
    pixmap: Arc<vello_cpu::Pixmap>,
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.canvas();
        f.debug_struct("Texture")
            .field("width", &c.width)
            .field("height", &c.height)
            .finish()
    }
}

impl Texture {
    /// Freeze a rendered surface.
    pub fn from_surface(surface: Surface) -> Self {
        Self {
            pixmap: Arc::new(surface.into_pixmap()),
        }
    }

    /// Texture dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.pixmap.width()),
            height: u32::from(self.pixmap.height()),
        }
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Pixel at `(x, y)`, or `None` outside the texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        let c = self.canvas();
        if x >= c.width || y >= c.height {
            return None;
        }
        let i = (y as usize * c.width as usize + x as usize) * 4;
        let px = self.data().get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Image paint sampling this texture.
    pub(crate) fn paint(&self) -> vello_cpu::Image {
        vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::clone(&self.pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        }
    }
}
