//! Seedable random source
//!
//! The simulation never touches a global RNG. Everything random is drawn
//! through [`RandomSource`] so a run is reproducible from its seed and tests
//! can script exact sequences.

use rand::Rng;
use rand_pcg::Pcg32;

/// Uniform sampling primitives the spawner needs
pub trait RandomSource {
    /// Uniform sample in `[low, high)`
    fn uniform(&mut self, low: f32, high: f32) -> f32;

    /// Uniform index in `0..n` (`n` > 0)
    fn index(&mut self, n: usize) -> usize;
}

impl RandomSource for Pcg32 {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        if !(high - low).is_finite() {
            return low + (high / 2.0 - low / 2.0);
        }
        self.random_range(low..high)
    }

    fn index(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        self.random_range(0..n)
    }
}

/// Replays a fixed list of unit samples in `[0, 1)`, cycling when exhausted.
///
/// `uniform` maps each sample onto the requested range; `index` scales it
/// onto `0..n`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, cursor: 0 }
    }

    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample.clamp(0.0, 0.999_999)
    }
}

impl RandomSource for ScriptedRng {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_unit()
    }

    fn index(&mut self, n: usize) -> usize {
        ((self.next_unit() * n as f32) as usize).min(n.saturating_sub(1))
    }
}
