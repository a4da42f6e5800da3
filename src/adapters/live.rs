//! Live adapter for the `RandomSource` port.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::ports::RandomSource;

/// Random source drawing from the operating system.
pub struct OsRandomSource;

impl OsRandomSource {
    /// Creates a new OS-backed random source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsRandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}
