//! Trait definitions shared across the tsha crates

pub mod hash;

pub use hash::HashAlgorithm;
