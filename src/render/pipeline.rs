use std::{path::Path, time::Instant};

use anyhow::Context as _;

use crate::{
    foundation::error::{SeaglassError, SeaglassResult},
    render::{renderer::Renderer, surface::FrameRGBA},
    scene::drawable::Drawable,
};

/// Options for [`render_sequence`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceOpts {
    /// Number of frames to produce.
    pub frames: u64,
    /// Time step applied between consecutive frames.
    pub step: f32,
}

/// Counters collected by [`render_sequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames handed to the sink.
    pub frames_rendered: u64,
    /// Wall time spent rasterizing, in milliseconds.
    pub render_ms: u64,
}

/// Advance `root` by `ticks` fixed steps, the same way a frame loop would.
pub fn advance_ticks(root: &mut dyn Drawable, ticks: u64, step: f32) {
    for _ in 0..ticks {
        root.advance(step);
    }
}

/// Render `opts.frames` frames, advancing `root` by `opts.step` after each one.
///
/// Frame `i` is the state after `i` ticks. Each frame goes to `sink` before the next is drawn.
#[tracing::instrument(skip(renderer, root, sink))]
pub fn render_sequence<F>(
    renderer: &Renderer,
    root: &mut dyn Drawable,
    opts: SequenceOpts,
    mut sink: F,
) -> SeaglassResult<RenderStats>
where
    F: FnMut(u64, FrameRGBA) -> SeaglassResult<()>,
{
    if opts.frames == 0 {
        return Err(SeaglassError::validation("sequence must have at least one frame"));
    }
    if !opts.step.is_finite() {
        return Err(SeaglassError::validation("sequence step must be finite"));
    }

    let mut stats = RenderStats::default();
    for i in 0..opts.frames {
        let start = Instant::now();
        let frame = renderer.render(root)?;
        let ms = start.elapsed().as_millis() as u64;
        tracing::debug!(frame = i, ms, "rendered frame");
        stats.render_ms += ms;
        stats.frames_rendered += 1;

        sink(i, frame)?;
        root.advance(opts.step);
    }
    Ok(stats)
}

/// Encode a frame as a straight-alpha PNG, creating parent directories as needed.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> SeaglassResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let rgba = frame.to_straight_rgba8();
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
