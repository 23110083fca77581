//! Constant values for tsha hashing operations
//!
//! Round constants, initial hash values, rotation amounts and block geometry
//! for SHA-256 and SHA-512/256. Everything here is a `const` item, so the
//! tables live in read-only memory and are shared by every hash state.

#![no_std]

pub mod traditional;
pub mod utils;
