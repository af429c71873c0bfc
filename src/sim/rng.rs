//! Injectable uniform random source
//!
//! The shipped game seeds a `Pcg32` from the clock; tests seed it with a
//! constant or script the exact values they need.

use rand::Rng;
use rand_pcg::Pcg32;

/// Source of uniform samples in `[0, 1)`
pub trait UniformSource {
    fn next_uniform(&mut self) -> f32;

    /// Uniform sample in `[min, min + span)`
    fn in_span(&mut self, min: f32, span: f32) -> f32 {
        let u = self.next_uniform();
        if span.is_nan() || span <= 0.0 {
            return min;
        }
        // A sample close to 1 can round up onto the excluded bound
        (min + u * span).min(just_below(min + span))
    }
}

/// Largest `f32` strictly less than `x`
fn just_below(x: f32) -> f32 {
    if x.is_nan() || x == f32::NEG_INFINITY {
        x
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

impl UniformSource for Pcg32 {
    fn next_uniform(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when it runs out
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Values are clamped into `[0, 1)`; an empty script yields zeros
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, 1.0 - f32::EPSILON) } else { 0.0 })
            .collect();
        Self { values, cursor: 0 }
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
