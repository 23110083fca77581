//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-512/256 in bytes (truncated from 64)
pub const SHA512_256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-512 family in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Size of the trailing message length field of SHA-256 in bytes
pub const SHA256_LENGTH_FIELD_SIZE: usize = 8;

/// Size of the trailing message length field of SHA-512 family in bytes
pub const SHA512_LENGTH_FIELD_SIZE: usize = 16;

/// Number of compression rounds of SHA-256
pub const SHA256_ROUNDS: usize = 64;

/// Number of compression rounds of SHA-512 family
pub const SHA512_ROUNDS: usize = 80;

/// Number of words in the running digest (both variants)
pub const DIGEST_WORDS: usize = 8;

/// Number of words in one message block (both variants)
pub const BLOCK_WORDS: usize = 16;

/// Largest round count of any supported variant
pub const MAX_ROUNDS: usize = SHA512_ROUNDS;

/// Largest output size of any supported variant
pub const MAX_OUTPUT_SIZE: usize = 32;

/// Largest length field of any supported variant
pub const MAX_LENGTH_FIELD_SIZE: usize = SHA512_LENGTH_FIELD_SIZE;

// Rotation and shift amounts, ordered as used by the round functions.
// The small sigmas end in a logical right shift; the big sigmas are all
// rotations.

/// SHA-256 σ0: rotr 7, rotr 18, shr 3
pub const SHA256_SIGMA0: [u32; 3] = [7, 18, 3];

/// SHA-256 σ1: rotr 17, rotr 19, shr 10
pub const SHA256_SIGMA1: [u32; 3] = [17, 19, 10];

/// SHA-256 Σ0: rotr 2, 13, 22
pub const SHA256_BIG_SIGMA0: [u32; 3] = [2, 13, 22];

/// SHA-256 Σ1: rotr 6, 11, 25
pub const SHA256_BIG_SIGMA1: [u32; 3] = [6, 11, 25];

/// SHA-512 σ0: rotr 1, rotr 8, shr 7
pub const SHA512_SIGMA0: [u32; 3] = [1, 8, 7];

/// SHA-512 σ1: rotr 19, rotr 61, shr 6
pub const SHA512_SIGMA1: [u32; 3] = [19, 61, 6];

/// SHA-512 Σ0: rotr 28, 34, 39
pub const SHA512_BIG_SIGMA0: [u32; 3] = [28, 34, 39];

/// SHA-512 Σ1: rotr 14, 18, 41
pub const SHA512_BIG_SIGMA1: [u32; 3] = [14, 18, 41];

/// Byte appended directly after the message
pub const MESSAGE_TERMINATOR: u8 = 0x80;
