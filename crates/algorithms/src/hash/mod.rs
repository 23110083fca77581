//! Hash function front end
//!
//! [`HashFunction`] is the streaming interface implemented by every hasher
//! in this crate; [`hash_with`] selects one at run time.

use tsha_api::{Algorithm, HashAlgorithm};

use crate::error::Result;
use crate::types::Sha2Digest;

pub mod sha2;

pub use self::sha2::{Sha256, Sha512_256};

/// Streaming hash function
pub trait HashFunction: Sized {
    /// Compile-time algorithm descriptor
    type Algorithm: HashAlgorithm;

    /// Digest type
    type Output;

    /// Create a hasher ready to accept input
    fn new() -> Self;

    /// Feed message bytes
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Complete padding and return the digest
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Hash `data` in one call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Message block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}

/// Hash `data` with an algorithm chosen at run time
pub fn hash_with(algorithm: Algorithm, data: &[u8]) -> Result<Sha2Digest> {
    match algorithm {
        Algorithm::Sha256 => Sha256::digest(data),
        Algorithm::Sha512_256 => Sha512_256::digest(data),
    }
}
