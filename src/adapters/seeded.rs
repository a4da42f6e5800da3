//! Seeded adapter for the `RandomSource` port.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::ports::RandomSource;

/// Deterministic random source derived from a fixed seed.
///
/// Two sources built from the same seed produce the same byte stream,
/// making identifier generation reproducible in tests.
pub struct SeededRandomSource {
    rng: StdRng,
}

impl SeededRandomSource {
    /// Creates a source producing the byte stream determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}
