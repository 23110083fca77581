//! Common implementations and shared functionality for the tsha library
//!
//! Zeroizing wrappers for transient secrets (message schedules, working
//! variables, scratch buffers), constant-time comparison, and compiler
//! barriers around the compression function.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, ZeroizeGuard};

// Re-export memory safety traits and utilities
pub use security::memory::{barrier, SecureCompare};
