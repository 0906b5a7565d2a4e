//! Summed, domain-warped wave octaves.
//!
//! Octave `i` is derived from octave `i - 1` by fixed factors, so the whole wave stack is a
//! pure function of the octave index. The directions come from an angle that advances by a
//! large constant per octave, which scatters them around the circle without any randomness.

use glam::{Vec2, vec2};

use crate::water::params::{DRAG_MULT, MAX_ITERATIONS};

const WEIGHT_DECAY: f32 = 0.82;
const FREQUENCY_GROWTH: f32 = 1.18;
const TIME_GROWTH: f32 = 1.07;
const PHASE_STEP: f32 = 1232.399963;

/// Parameters of a single wave octave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveOctave {
    /// Position in the sequence, starting at 0.
    pub index: usize,
    /// Angle the direction is derived from, accumulated in `f32`.
    pub phase: f32,
    /// Spatial frequency.
    pub frequency: f32,
    /// Multiplier applied to the time value.
    pub time_multiplier: f32,
    /// Weight in the normalized sum.
    pub weight: f32,
}

impl WaveOctave {
    /// The first octave of every wave stack.
    pub const FIRST: Self = Self {
        index: 0,
        phase: 0.0,
        frequency: 1.0,
        time_multiplier: 2.0,
        weight: 1.0,
    };

    /// Unit travel direction `(sin(phase), cos(phase))`.
    pub fn direction(&self) -> Vec2 {
        vec2(self.phase.sin(), self.phase.cos())
    }

    /// The octave that follows this one.
    pub fn next(self) -> Self {
        Self {
            index: self.index + 1,
            phase: self.phase + PHASE_STEP,
            frequency: self.frequency * FREQUENCY_GROWTH,
            time_multiplier: self.time_multiplier * TIME_GROWTH,
            weight: self.weight * WEIGHT_DECAY,
        }
    }
}

/// Unbounded iterator over the octave sequence.
pub fn octaves() -> impl Iterator<Item = WaveOctave> {
    std::iter::successors(Some(WaveOctave::FIRST), |o| Some(o.next()))
}

/// Wave value and negated derivative for one octave.
///
/// The value is `exp(sin(x) - 1)`, which lies in `[e^-2, 1]`.
pub fn wavedx(position: Vec2, direction: Vec2, frequency: f32, timeshift: f32) -> Vec2 {
    let x = direction.dot(position) * frequency + timeshift;
    let wave = (x.sin() - 1.0).exp();
    let dx = wave * x.cos();
    vec2(wave, -dx)
}

/// Normalized wave height in `(0, 1]` with a configurable drag.
///
/// All [`MAX_ITERATIONS`] octaves are always summed. `iterations` bounds only how many of the
/// leading octaves drag the sample position for the ones after them.
pub fn getwaves_with_drag(position: Vec2, iterations: usize, time: f32, drag_mult: f32) -> f32 {
    let mut position = position;
    let mut sum_of_values = 0.0f32;
    let mut sum_of_weights = 0.0f32;

    for octave in octaves().take(MAX_ITERATIONS) {
        let dir = octave.direction();
        let res = wavedx(position, dir, octave.frequency, time * octave.time_multiplier);

        if octave.index < iterations {
            position += dir * res.y * octave.weight * drag_mult;
        }

        sum_of_values += res.x * octave.weight;
        sum_of_weights += octave.weight;
    }

    sum_of_values / sum_of_weights
}

/// Normalized wave height in `(0, 1]` using [`DRAG_MULT`].
pub fn getwaves(position: Vec2, iterations: usize, time: f32) -> f32 {
    getwaves_with_drag(position, iterations, time, DRAG_MULT)
}

/// A normalized scalar field over the horizontal plane.
///
/// Implementations return values in `(0, 1]`; callers scale them into the water volume.
pub trait HeightField {
    /// Sample the field at `xz` using `iterations` octaves of detail.
    fn sample(&self, xz: Vec2, iterations: usize) -> f32;
}

/// The animated wave stack frozen at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveField {
    /// The `iTime` uniform.
    pub time: f32,
    /// Octave drag strength.
    pub drag_mult: f32,
}

impl WaveField {
    /// Wave field at `time` with the default drag.
    pub fn at(time: f32) -> Self {
        Self {
            time,
            drag_mult: DRAG_MULT,
        }
    }
}

impl HeightField for WaveField {
    fn sample(&self, xz: Vec2, iterations: usize) -> f32 {
        getwaves_with_drag(xz, iterations, self.time, self.drag_mult)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/water/waves.rs"]
mod tests;
