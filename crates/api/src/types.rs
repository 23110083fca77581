//! Runtime algorithm selection
//!
//! Front ends (the CLI, the self test) pick the algorithm at runtime; the
//! hashing engine itself is monomorphized per variant.

use core::fmt;
use core::str::FromStr;

use tsha_params::utils::hash;

use crate::{Error, Result};

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-256 (32-bit words, 64 rounds)
    Sha256,
    /// SHA-512/256 (64-bit words, 80 rounds, truncated to 256 bits)
    Sha512_256,
}

impl Algorithm {
    /// All supported algorithms, in display order
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Sha512_256];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512_256 => "SHA-512/256",
        }
    }

    /// Digest size in bytes
    pub fn output_size(&self) -> usize {
        match self {
            Algorithm::Sha256 => hash::SHA256_OUTPUT_SIZE,
            Algorithm::Sha512_256 => hash::SHA512_256_OUTPUT_SIZE,
        }
    }

    /// Message block size in bytes
    pub fn block_size(&self) -> usize {
        match self {
            Algorithm::Sha256 => hash::SHA256_BLOCK_SIZE,
            Algorithm::Sha512_256 => hash::SHA512_BLOCK_SIZE,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim();
        if normalized.eq_ignore_ascii_case("sha256") || normalized.eq_ignore_ascii_case("sha-256")
        {
            return Ok(Algorithm::Sha256);
        }
        for alias in ["sha512-256", "sha512/256", "sha-512/256", "sha512_256", "sha512t256"] {
            if normalized.eq_ignore_ascii_case(alias) {
                return Ok(Algorithm::Sha512_256);
            }
        }
        Err(Error::InvalidParameter {
            context: "Algorithm::from_str",
            #[cfg(feature = "std")]
            message: format!("unknown algorithm '{}'", s),
        })
    }
}
