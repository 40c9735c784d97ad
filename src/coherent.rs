//! Coherent noise used for the agent's shake.
//!
//! A [`CoherentNoise`] is a pure function of its coordinates: identical inputs
//! always give identical outputs, and nearby inputs give nearby outputs, so a
//! signal sampled along a slowly advancing clock moves smoothly frame to frame.

use noise::{NoiseFn, Perlin};

/// Smooth deterministic signal in `[0, 1]`.
pub trait CoherentNoise: Send + Sync {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Perlin gradient noise remapped from `[-1, 1]` to `[0, 1]`.
pub struct PerlinNoise {
    noise: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CoherentNoise for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        (self.noise.get([x, y]) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

/// Returns the same value everywhere. Used to pin the shake in tests.
#[derive(Debug, Clone, Copy)]
pub struct ConstantNoise(pub f64);

impl CoherentNoise for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}
