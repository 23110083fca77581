//! Hash algorithm descriptors

use crate::types::Algorithm;

/// Compile-time description of a hash algorithm
///
/// Implemented by zero-sized marker types so that the sizes are available as
/// associated constants wherever the algorithm is a type parameter.
pub trait HashAlgorithm {
    /// Digest size in bytes after truncation
    const OUTPUT_SIZE: usize;

    /// Message block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable identifier, e.g. `"SHA-256"`
    const ALGORITHM_ID: &'static str;

    /// Runtime selector matching this algorithm
    const ALGORITHM: Algorithm;

    /// Get the algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}
