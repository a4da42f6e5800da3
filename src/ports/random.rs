//! Random source port for obtaining random bytes.

/// Produces random bytes.
///
/// Abstracting randomness allows deterministic identifier generation in
/// tests by substituting a seeded source for the operating system's.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}
