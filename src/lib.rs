//! Seaglass renders a procedural ocean and a text-masked overlay on the CPU.
//!
//! The ocean is a per-pixel kernel: a domain-warped sum of exponential-sine wave octaves is
//! ray marched between two horizontal planes, shaded with a Fresnel sky reflection and a
//! depth-based scattering tint, and ACES tonemapped. The kernel is drawn onto a textured quad
//! inside a small scene graph that also composites a translucent overlay through a sprite mask.
//!
//! # Pipeline overview
//!
//! 1. **Build**: [`DemoScene::build`] renders the static mask stencil through an injected
//!    [`Renderer`] and assembles the scene graph.
//! 2. **Tick**: [`Drawable::advance`] moves the water time uniform by a fixed step.
//! 3. **Render**: [`Renderer::render`] paints the graph into a premultiplied [`FrameRGBA`].
//! 4. **Write** (optional): [`write_png`] encodes a frame.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same configuration and tick count produce identical bytes, with or
//!   without the rayon pool.
//! - **Premultiplied RGBA8** end-to-end until PNG encoding.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod demo;
mod foundation;
mod render;
mod scene;
mod water;

pub use config::{DemoConfig, MaskConfig, WaterConfig};
pub use demo::{DemoScene, load_font, renderer_for};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Transform2D, Vec2};
pub use foundation::error::{SeaglassError, SeaglassResult};
pub use foundation::math::{mix, pow3, reflect, saturate};
pub use render::composite::{
    MaskChannel, PremulRgba8, mask_in_place, over, over_in_place, unpremultiply,
};
pub use render::pipeline::{RenderStats, SequenceOpts, advance_ticks, render_sequence, write_png};
pub use render::renderer::{RenderSettings, Renderer};
pub use render::surface::{FrameRGBA, Surface};
pub use render::texture::Texture;
pub use scene::drawable::Drawable;
pub use scene::label::{Label, TextBrushRgba8, TextLayoutEngine};
pub use scene::mask::{MaskLayout, MaskTextureGenerator, Masked, Sprite};
pub use scene::node::SceneNode;
pub use scene::quad::WaterQuad;
pub use scene::shapes::{FillPath, FillRect};
pub use water::march::{MarchResult, intersect_plane, raymarch_water, raymarch_water_detailed};
pub use water::mesh::QuadMesh;
pub use water::normal::normal;
pub use water::params::{
    CAMERA_HEIGHT, DEFAULT_TICK_STEP, DRAG_MULT, EXPOSURE, FRESNEL_F0, HIT_EPSILON,
    ITERATIONS_NORMAL, ITERATIONS_RAYMARCH, MAX_ITERATIONS, NORMAL_EPSILON, RAYMARCH_STEPS,
    WATER_DEPTH, WaterParams,
};
pub use water::shade::{
    ShadeSample, camera_origin, camera_ray, fresnel, shade, shade_sample, shade_sample_with,
};
pub use water::shader::{WaterShader, WaterUniforms};
pub use water::tonemap::aces_tonemap;
pub use water::waves::{
    HeightField, WaveField, WaveOctave, getwaves, getwaves_with_drag, octaves, wavedx,
};
