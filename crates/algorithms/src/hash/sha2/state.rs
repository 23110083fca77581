//! Per-computation hash state
//!
//! A `DigestState` owns the running digest, the one-block message buffer,
//! the byte counters and the padding FSM state. The message buffer is kept
//! as sixteen big-endian words so every ingested byte lands directly at its
//! final position inside a schedule word; the block is never copied out
//! into a second byte array before compression.

use core::fmt;
use core::marker::PhantomData;

use tracing::trace;
use zeroize::Zeroize;

use tsha_common::security::{barrier, EphemeralSecret};
use tsha_params::utils::hash::{BLOCK_WORDS, DIGEST_WORDS, MAX_LENGTH_FIELD_SIZE};

use super::compress::compress_block;
use super::fsm::FsmState;
use super::variant::Variant;
use super::word::{byte_shift, Word};
use crate::error::{validate, Error, Result};
use crate::types::Sha2Digest;

/// Incremental state of one SHA-2 computation
///
/// Lifecycle: [`DigestState::new`] (or [`reset`](DigestState::reset)), any
/// number of [`ingest_byte`](DigestState::ingest_byte) /
/// [`advance`](DigestState::advance) calls, [`advance`](DigestState::advance)
/// with `finish = true` until [`FsmState::Complete`], then
/// [`extract_digest`](DigestState::extract_digest) and
/// [`close`](DigestState::close). Dropping the state also wipes it.
pub struct DigestState<V: Variant> {
    pub(crate) digest: [V::Word; DIGEST_WORDS],
    pub(crate) block: [V::Word; BLOCK_WORDS],
    pub(crate) filled: usize,
    pub(crate) total_len: u64,
    pub(crate) fsm: FsmState,
    pub(crate) blocks: u64,
    pub(crate) initialized: bool,
    _variant: PhantomData<V>,
}

impl<V: Variant> DigestState<V> {
    /// Create a state that has already been reset and accepts input
    pub fn new() -> Self {
        let mut state = Self::uninitialized();
        state.reset();
        state
    }

    /// Create a wiped state that rejects every operation until
    /// [`reset`](Self::reset) is called
    pub fn uninitialized() -> Self {
        Self {
            digest: [V::Word::ZERO; DIGEST_WORDS],
            block: [V::Word::ZERO; BLOCK_WORDS],
            filled: 0,
            total_len: 0,
            fsm: FsmState::Input,
            blocks: 0,
            initialized: false,
            _variant: PhantomData,
        }
    }

    /// Zero every field and load the variant's initial hash value
    pub fn reset(&mut self) {
        self.zeroize();
        self.digest = V::INITIAL_DIGEST;
        self.initialized = true;
        trace!(algorithm = V::ALGORITHM_ID, "hash state reset");
    }

    /// Overwrite the whole state with zeros
    ///
    /// Best effort: this wipes the memory this value owns, not copies the
    /// compiler may have spilled elsewhere. The state must be
    /// [`reset`](Self::reset) before it can be used again.
    pub fn close(&mut self) {
        barrier::with_barriers(|| self.zeroize());
        trace!(algorithm = V::ALGORITHM_ID, "hash state closed");
    }

    /// Current padding FSM state
    pub fn fsm_state(&self) -> FsmState {
        self.fsm
    }

    /// Number of valid bytes in the message buffer
    pub fn bytes_in_buffer(&self) -> usize {
        self.filled
    }

    /// Number of genuine message bytes ingested so far
    pub fn total_message_length(&self) -> u64 {
        self.total_len
    }

    /// Number of blocks folded into the digest so far
    pub fn blocks_processed(&self) -> u64 {
        self.blocks
    }

    /// Whether the state has been reset and not closed since
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Read-only view of the final digest words
    ///
    /// Fails with [`Error::InvalidState`] unless the FSM has reached
    /// [`FsmState::Complete`].
    pub fn extract_digest(&self) -> Result<&[V::Word; DIGEST_WORDS]> {
        validate::initialized(self.initialized, "extract_digest")?;
        if self.fsm != FsmState::Complete {
            return Err(Error::InvalidState {
                context: "extract_digest before completion",
            });
        }
        Ok(&self.digest)
    }

    /// Final digest serialized big-endian and truncated to the variant's
    /// output size
    pub fn digest_bytes(&self) -> Result<Sha2Digest> {
        let words = self.extract_digest()?;
        let mut scratch = EphemeralSecret::new([0u8; DIGEST_WORDS * 8]);
        let width = DIGEST_WORDS * V::Word::BYTES;
        V::Word::write_be(words, &mut scratch[..width]);
        Sha2Digest::from_slice(&scratch[..V::OUTPUT_SIZE])
    }

    pub(crate) fn ensure_initialized(&self, context: &'static str) -> Result<()> {
        validate::initialized(self.initialized, context)
    }

    /// Write `byte` at byte offset `index` of the block, MSB-first within
    /// its word
    fn place_byte(&mut self, index: usize, byte: u8) -> Result<()> {
        validate::max_length("message block write", index + 1, V::BLOCK_SIZE)?;
        let shift = byte_shift::<V::Word>(index);
        let word = &mut self.block[index / V::Word::BYTES];
        let mask = V::Word::from_byte(0xff) << shift;
        *word = (*word & !mask) | (V::Word::from_byte(byte) << shift);
        Ok(())
    }

    /// Append one byte at the fill position
    pub(crate) fn push_byte(&mut self, byte: u8) -> Result<()> {
        self.place_byte(self.filled, byte)?;
        self.filled += 1;
        Ok(())
    }

    /// Write the message bit length into the trailing length field
    pub(crate) fn write_length_field(&mut self) -> Result<()> {
        let offset = V::BLOCK_SIZE - V::LENGTH_FIELD_SIZE;
        let mut field = EphemeralSecret::new([0u8; MAX_LENGTH_FIELD_SIZE]);
        V::Word::encode_bit_length(self.total_len, &mut field[..V::LENGTH_FIELD_SIZE]);
        for (i, &byte) in field[..V::LENGTH_FIELD_SIZE].iter().enumerate() {
            self.place_byte(offset + i, byte)?;
        }
        Ok(())
    }

    /// Compress the buffered block into the digest and clear the buffer
    pub(crate) fn finalize_block(&mut self) -> Result<()> {
        compress_block::<V>(&mut self.digest, &self.block)?;
        self.block.zeroize();
        self.filled = 0;
        self.blocks += 1;
        tracing::debug!(
            algorithm = V::ALGORITHM_ID,
            block = self.blocks,
            "message block finalized"
        );
        Ok(())
    }
}

impl<V: Variant> Default for DigestState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Clone for DigestState<V> {
    fn clone(&self) -> Self {
        Self {
            digest: self.digest,
            block: self.block,
            filled: self.filled,
            total_len: self.total_len,
            fsm: self.fsm,
            blocks: self.blocks,
            initialized: self.initialized,
            _variant: PhantomData,
        }
    }
}

impl<V: Variant> Zeroize for DigestState<V> {
    fn zeroize(&mut self) {
        self.digest.zeroize();
        self.block.zeroize();
        self.filled.zeroize();
        self.total_len.zeroize();
        self.blocks.zeroize();
        self.fsm = FsmState::Input;
        self.initialized = false;
    }
}

impl<V: Variant> Drop for DigestState<V> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<V: Variant> fmt::Debug for DigestState<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestState")
            .field("algorithm", &V::ALGORITHM_ID)
            .field("fsm", &self.fsm)
            .field("bytes_in_buffer", &self.filled)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
