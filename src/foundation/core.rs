use crate::foundation::error::{SeaglassError, SeaglassResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas, rejecting empty or oversized dimensions.
    pub fn new(width: u32, height: u32) -> SeaglassResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Surfaces are backed by `u16`-sized pixmaps.
    pub fn validate(self) -> SeaglassResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SeaglassError::validation("canvas must be non-empty"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(SeaglassError::validation("canvas dimensions exceed u16"));
        }
        Ok(())
    }

    /// Canvas center in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Number of bytes in an RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Premultiply a straight `[r, g, b, a]` array.
    pub fn from_straight(rgba: [u8; 4]) -> Self {
        Self::from_straight_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Placement of a scene node relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Position of the pivot in parent space.
    pub translate: Vec2,
    /// Rotation around the pivot, in radians.
    pub rotation_rad: f64,
    /// Scale around the pivot; default (1,1).
    pub scale: Vec2,
    /// Pivot in local space.
    pub pivot: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
            pivot: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    /// Translation-only transform.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Builder-style uniform scale.
    pub fn with_scale(mut self, s: f64) -> Self {
        self.scale = Vec2::new(s, s);
        self
    }

    /// Builder-style pivot.
    pub fn with_pivot(mut self, x: f64, y: f64) -> Self {
        self.pivot = Vec2::new(x, y);
        self
    }

    /// Local-to-parent matrix.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_rotate = Affine::rotate(self.rotation_rad);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);
        let t_unpivot = Affine::translate(-self.pivot);

        // The pivot lands on `translate`: T(translate) * R(rot) * S(scale) * T(-pivot)
        t_translate * t_rotate * t_scale * t_unpivot
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
