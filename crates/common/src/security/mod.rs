//! Security primitives and memory safety utilities
//!
//! Every buffer that can hold message-derived data while a block is being
//! processed goes through one of these types so it is wiped on drop.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, ZeroizeGuard};

// Re-export memory safety traits and utilities
pub use memory::{barrier, SecureCompare};
