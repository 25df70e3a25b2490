//! Seedable random source with bounded precision.
//!
//! Draws are quantized to 1/32767 of the requested span and rounded up to six
//! decimal places, so equal seeds give equal results across platforms.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const RESOLUTION: u32 = 0x7fff;
const PRECISION: f64 = 1_000_000.0;

/// Deterministic RNG for all simulation randomness.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: ChaCha8Rng,
}

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Quantized draw in `[min, max)`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        let step = self.inner.gen_range(0..RESOLUTION) as f64;
        let value = min + (max - min) * step / RESOLUTION as f64;
        (value * PRECISION).ceil() / PRECISION
    }

    /// Symmetric draw in `[-extent, extent)`.
    pub fn signed(&mut self, extent: f64) -> f64 {
        self.uniform(-extent, extent)
    }

    /// Integer draw in `[0, n)`. Returns 0 when `n == 0`.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            0
        } else {
            self.inner.gen_range(0..n)
        }
    }

    /// Fair coin.
    pub fn coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}
