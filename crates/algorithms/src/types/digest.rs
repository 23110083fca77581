//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, representing the output of a
//! cryptographic hash function with a compile-time capacity.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;
use core::fmt;
use core::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};

use tsha_common::security::SecureCompare;
use tsha_params::utils::hash::MAX_OUTPUT_SIZE;

use crate::error::{Error, Result};

/// A cryptographic digest with a fixed capacity
///
/// Equality is constant time over the valid bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Digest<const N: usize> {
    data: [u8; N],
    len: usize, // Number of valid bytes; truncated variants use fewer than N
}

/// Digest type produced by the SHA-2 engines
pub type Sha2Digest = Digest<MAX_OUTPUT_SIZE>;

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data, len: N }
    }

    /// Create a new digest with a specified logical length
    pub fn with_len(data: [u8; N], len: usize) -> Result<Self> {
        if len > N {
            return Err(Error::Length {
                context: "Digest::with_len",
                expected: N,
                actual: len,
            });
        }
        Ok(Self { data, len })
    }

    /// Create from a slice of at most `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        // Using custom check since we allow slices smaller than N
        if slice.len() > N {
            return Err(Error::Length {
                context: "Digest::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data[..slice.len()].copy_from_slice(slice);

        Ok(Self {
            data,
            len: slice.len(),
        })
    }

    /// Get the length of the digest
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the digest is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert to a lowercase hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data[..self.len])
    }

    /// Create from a hexadecimal string
    #[cfg(feature = "alloc")]
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;

        Self::from_slice(&bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data[..self.len]
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.data[..self.len].secure_eq(&other.data[..other.len])
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.data[..self.len] {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({:x}) [len={}]", N, self, self.len)
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
