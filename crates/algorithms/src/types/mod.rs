//! Digest types returned by the hashing engines

pub mod digest;

pub use digest::{Digest, Sha2Digest};
