//! Port traits defining external boundaries.
//!
//! The only boundary the identifier core has is randomness. Keeping it
//! behind a trait lets tests substitute a deterministic source.
//! Implementations live in `src/adapters/`.

pub mod random;

pub use random::RandomSource;
