//! Adapter implementations of the port traits.

pub mod live;
pub mod seeded;

pub use live::OsRandomSource;
pub use seeded::SeededRandomSource;
