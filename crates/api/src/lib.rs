//! Public API traits and types for the tsha library
//!
//! This crate provides the public API surface shared by the tsha crates:
//! the ecosystem-level error type, the hash algorithm descriptor trait, and
//! the runtime algorithm selector used by front ends.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::HashAlgorithm;
pub use types::Algorithm;
