//! Machine words the SHA-2 round functions operate on
//!
//! SHA-256 runs on 32-bit words and SHA-512/256 on 64-bit words; everything
//! else about the two algorithms is shared. `Word` captures exactly the
//! operations the message schedule and the compression rounds need.

use byteorder::{BigEndian, ByteOrder};
use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};
use zeroize::Zeroize;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A SHA-2 word (`u32` or `u64`)
///
/// Sealed: the round functions are only defined for these two widths.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + fmt::Debug
    + fmt::LowerHex
    + Zeroize
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const BYTES: usize;

    /// The all-zero word
    const ZERO: Self;

    /// Addition modulo 2^BITS
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Rotate right by `n` bits
    fn rotr(self, n: u32) -> Self;

    /// Widen a byte into the low bits of a word
    fn from_byte(byte: u8) -> Self;

    /// Serialize `words` big-endian into `out`, which must be exactly
    /// `words.len() * BYTES` long
    fn write_be(words: &[Self], out: &mut [u8]);

    /// Encode the message bit length for the trailing length field.
    ///
    /// `out` is the length field itself (two words wide). Lengths wrap
    /// modulo the field width.
    fn encode_bit_length(total_bytes: u64, out: &mut [u8]);
}

impl Word for u32 {
    const BITS: u32 = 32;
    const BYTES: usize = 4;
    const ZERO: Self = 0;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        u32::from(byte)
    }

    fn write_be(words: &[Self], out: &mut [u8]) {
        BigEndian::write_u32_into(words, out);
    }

    fn encode_bit_length(total_bytes: u64, out: &mut [u8]) {
        BigEndian::write_u64(out, total_bytes.wrapping_mul(8));
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;
    const ZERO: Self = 0;

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline(always)]
    fn rotr(self, n: u32) -> Self {
        self.rotate_right(n)
    }

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        u64::from(byte)
    }

    fn write_be(words: &[Self], out: &mut [u8]) {
        BigEndian::write_u64_into(words, out);
    }

    fn encode_bit_length(total_bytes: u64, out: &mut [u8]) {
        // A u64 byte count times 8 always fits the 128-bit field.
        BigEndian::write_u128(out, u128::from(total_bytes) * 8);
    }
}

/// Shift that places byte `index` of a word at its big-endian position
#[inline(always)]
pub(crate) fn byte_shift<W: Word>(index: usize) -> u32 {
    (8 * (W::BYTES - 1 - index % W::BYTES)) as u32
}
