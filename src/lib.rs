//! # tsha
//!
//! SHA-256 and SHA-512/256 computed by a byte-at-a-time finite state
//! machine. Message bytes are written straight into a single block-sized
//! buffer that is wiped after every compression, and padding is produced
//! by an explicit state machine rather than by copying the message tail.
//!
//! ## Usage
//!
//! ```
//! use tsha::prelude::*;
//!
//! let digest = Sha256::digest(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! The raw engine is available for callers that want to drive the state
//! machine themselves:
//!
//! ```
//! use tsha::algorithms::hash::sha2::{DigestState, FsmState, Sha256Algorithm};
//!
//! let mut state = DigestState::<Sha256Algorithm>::new();
//! for &byte in b"abc" {
//!     assert_eq!(state.ingest_byte(byte).unwrap(), 1);
//! }
//! while state.advance(true).unwrap() != FsmState::Complete {}
//! assert_eq!(state.extract_digest().unwrap()[0], 0xba7816bf);
//! state.close();
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: error type, algorithm selector, `HashAlgorithm` trait
//! - [`common`]: zeroizing wrappers and constant-time comparison
//! - [`params`]: SHA-2 constants
//! - [`algorithms`]: the state-machine engines

#![cfg_attr(not(feature = "std"), no_std)]

pub use tsha_algorithms as algorithms;
pub use tsha_api as api;
pub use tsha_common as common;
pub use tsha_params as params;

/// Common imports for tsha users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and selectors
    pub use crate::algorithms::HashFunction;
    pub use crate::api::{Algorithm, HashAlgorithm};

    // Hashers and digests
    pub use crate::algorithms::{Digest, Sha256, Sha2Digest, Sha512_256};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecureCompare, ZeroizeGuard};

    // Re-export zeroize for convenience
    pub use zeroize::{Zeroize, ZeroizeOnDrop};
}
