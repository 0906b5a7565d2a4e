use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Canvas,
        error::{SeaglassError, SeaglassResult},
    },
    render::composite::MaskChannel,
    water::params::{DEFAULT_TICK_STEP, WaterParams},
};

/// Everything needed to build and animate the demo scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Output size.
    pub canvas: Canvas,
    /// Straight RGBA8 clear color.
    pub background: [u8; 4],
    /// Water quad and kernel.
    pub water: WaterConfig,
    /// Masked overlay.
    pub mask: MaskConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            background: [0x10, 0x99, 0xbb, 0xff],
            water: WaterConfig::default(),
            mask: MaskConfig::default(),
        }
    }
}

/// Placement and animation of the water quad.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Kernel constants.
    #[serde(flatten)]
    pub params: WaterParams,
    /// Time added per tick.
    pub tick_step: f32,
    /// Half the side of the square mesh, in local units.
    pub half_extent: f32,
    /// Canvas position of the mesh origin.
    pub position: [f64; 2],
    /// Uniform scale of the mesh.
    pub scale: f64,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            params: WaterParams::default(),
            tick_step: DEFAULT_TICK_STEP,
            half_extent: 100.0,
            position: [400.0, 300.0],
            scale: 10.0,
        }
    }
}

/// Translucent overlay and the stencil that cuts it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Group opacity of the overlay.
    pub overlay_alpha: f32,
    /// Straight RGBA8 overlay fill.
    pub overlay_rgba: [u8; 4],
    /// Text punched out of the overlay; empty for none.
    pub label: String,
    /// Label size in pixels.
    pub font_size: f32,
    /// Font file for the label.
    pub font_path: Option<PathBuf>,
    /// Straight RGBA8 label color in the stencil.
    pub label_rgba: [u8; 4],
    /// Extra stencil shapes as SVG path data, drawn in `label_rgba`.
    pub cutouts: Vec<String>,
    /// Stencil channel that carries coverage.
    pub channel: MaskChannel,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            overlay_alpha: 0.75,
            overlay_rgba: [255, 255, 255, 255],
            label: "EXAMPLE MASK".to_string(),
            font_size: 200.0,
            font_path: None,
            label_rgba: [0, 0, 0, 255],
            cutouts: Vec::new(),
            channel: MaskChannel::Red,
        }
    }
}

impl DemoConfig {
    /// Parse JSON, filling omitted fields with defaults.
    pub fn from_json_str(s: &str) -> SeaglassResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: &Path) -> SeaglassResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Pretty JSON with every field spelled out.
    pub fn to_json_pretty(&self) -> SeaglassResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the scene cannot be built from.
    pub fn validate(&self) -> SeaglassResult<()> {
        self.canvas.validate()?;
        self.water.params.validate()?;

        let w = &self.water;
        if !w.tick_step.is_finite() || w.tick_step <= 0.0 {
            return Err(SeaglassError::validation(
                "water tick_step must be finite and > 0",
            ));
        }
        if !w.half_extent.is_finite() || w.half_extent <= 0.0 {
            return Err(SeaglassError::validation(
                "water half_extent must be finite and > 0",
            ));
        }
        if !w.scale.is_finite() || w.scale == 0.0 {
            return Err(SeaglassError::validation(
                "water scale must be finite and non-zero",
            ));
        }
        if w.position.iter().any(|v| !v.is_finite()) {
            return Err(SeaglassError::validation("water position must be finite"));
        }

        let m = &self.mask;
        if !m.overlay_alpha.is_finite() || !(0.0..=1.0).contains(&m.overlay_alpha) {
            return Err(SeaglassError::validation(
                "mask overlay_alpha must be in [0, 1]",
            ));
        }
        if !m.label.is_empty() && (!m.font_size.is_finite() || m.font_size <= 0.0) {
            return Err(SeaglassError::validation(
                "mask font_size must be finite and > 0",
            ));
        }
        if m.cutouts.iter().any(|d| d.trim().is_empty()) {
            return Err(SeaglassError::validation(
                "mask cutouts must be non-empty path data",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
