//! Finite-state-machine SHA-2 engines
//!
//! This crate implements SHA-256 and SHA-512/256 as byte-at-a-time state
//! machines. Input is fed one byte at a time into a single block-sized
//! buffer; the padding sequence (terminator byte, zero fill, bit length) is
//! driven by an explicit state machine instead of being assembled in a
//! second copy of the message. The design goal is to keep sensitive input,
//! such as a password being hashed, resident in exactly one small buffer
//! that is wiped after every block.
//!
//! # Layers
//!
//! - [`hash::sha2::DigestState`] is the low-level engine: `reset`,
//!   `ingest_byte`, `advance`, `extract_digest`, `close`.
//! - [`hash::HashFunction`] drives that engine for ordinary
//!   `update`/`finalize` use through [`Sha256`] and [`Sha512_256`].
//! - [`vectors`] holds the known-answer vectors used by the self test.
//!
//! # Security Features
//!
//! - Message schedule, working variables and output scratch buffers are
//!   zeroized after use
//! - Hash states zeroize themselves on `close` and on drop
//! - Digest comparison is constant time
//! - Diagnostics never include message bytes or digest words

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::sha2::{
    DigestState, FsmState, Sha256, Sha256Algorithm, Sha512_256, Sha512_256Algorithm,
};
pub use hash::{hash_with, HashFunction};

// Type system
pub mod types;
pub use types::{Digest, Sha2Digest};

// Known-answer vectors
pub mod vectors;

// Re-export API-level items that appear in this crate's signatures
pub use tsha_api::{Algorithm, HashAlgorithm};
