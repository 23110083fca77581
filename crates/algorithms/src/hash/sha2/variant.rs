//! Algorithm parameters for the SHA-2 variants
//!
//! A variant bundles the word width, round count, rotation amounts, block
//! geometry and constant tables. The engine is written once against this
//! trait; `Sha256Algorithm` and `Sha512_256Algorithm` are the only
//! implementations.

use tsha_api::{Algorithm, HashAlgorithm};
use tsha_params::traditional::sha2::{K256, K512, SHA256_H0, SHA512_256_H0};
use tsha_params::utils::hash::{
    DIGEST_WORDS, SHA256_BIG_SIGMA0, SHA256_BIG_SIGMA1, SHA256_BLOCK_SIZE,
    SHA256_LENGTH_FIELD_SIZE, SHA256_OUTPUT_SIZE, SHA256_ROUNDS, SHA256_SIGMA0, SHA256_SIGMA1,
    SHA512_256_OUTPUT_SIZE, SHA512_BIG_SIGMA0, SHA512_BIG_SIGMA1, SHA512_BLOCK_SIZE,
    SHA512_LENGTH_FIELD_SIZE, SHA512_ROUNDS, SHA512_SIGMA0, SHA512_SIGMA1,
};

use super::fsm::BlockGeometry;
use super::word::Word;

/// Parameter set of one SHA-2 variant
pub trait Variant: HashAlgorithm + 'static {
    /// Word width of the variant
    type Word: Word;

    /// Number of compression rounds (and message schedule length)
    const ROUNDS: usize;

    /// Size of the trailing big-endian bit-length field in bytes
    const LENGTH_FIELD_SIZE: usize;

    /// σ0 amounts: two rotations then a shift
    const SIGMA0: [u32; 3];

    /// σ1 amounts: two rotations then a shift
    const SIGMA1: [u32; 3];

    /// Σ0 rotation amounts
    const BIG_SIGMA0: [u32; 3];

    /// Σ1 rotation amounts
    const BIG_SIGMA1: [u32; 3];

    /// Round constants, `ROUNDS` entries
    const ROUND_CONSTANTS: &'static [Self::Word];

    /// Initial hash value
    const INITIAL_DIGEST: [Self::Word; DIGEST_WORDS];

    /// Block geometry seen by the padding state machine
    fn geometry() -> BlockGeometry {
        BlockGeometry::new(Self::BLOCK_SIZE, Self::LENGTH_FIELD_SIZE)
    }
}

/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
    const ALGORITHM: Algorithm = Algorithm::Sha256;
}

impl Variant for Sha256Algorithm {
    type Word = u32;

    const ROUNDS: usize = SHA256_ROUNDS;
    const LENGTH_FIELD_SIZE: usize = SHA256_LENGTH_FIELD_SIZE;
    const SIGMA0: [u32; 3] = SHA256_SIGMA0;
    const SIGMA1: [u32; 3] = SHA256_SIGMA1;
    const BIG_SIGMA0: [u32; 3] = SHA256_BIG_SIGMA0;
    const BIG_SIGMA1: [u32; 3] = SHA256_BIG_SIGMA1;
    const ROUND_CONSTANTS: &'static [u32] = &K256;
    const INITIAL_DIGEST: [u32; DIGEST_WORDS] = SHA256_H0;
}

/// Marker type for SHA-512/256 algorithm
pub enum Sha512_256Algorithm {}

impl HashAlgorithm for Sha512_256Algorithm {
    const OUTPUT_SIZE: usize = SHA512_256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-512/256";
    const ALGORITHM: Algorithm = Algorithm::Sha512_256;
}

impl Variant for Sha512_256Algorithm {
    type Word = u64;

    const ROUNDS: usize = SHA512_ROUNDS;
    const LENGTH_FIELD_SIZE: usize = SHA512_LENGTH_FIELD_SIZE;
    const SIGMA0: [u32; 3] = SHA512_SIGMA0;
    const SIGMA1: [u32; 3] = SHA512_SIGMA1;
    const BIG_SIGMA0: [u32; 3] = SHA512_BIG_SIGMA0;
    const BIG_SIGMA1: [u32; 3] = SHA512_BIG_SIGMA1;
    const ROUND_CONSTANTS: &'static [u64] = &K512;
    const INITIAL_DIGEST: [u64; DIGEST_WORDS] = SHA512_256_H0;
}
