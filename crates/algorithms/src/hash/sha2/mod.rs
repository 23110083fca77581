//! SHA-2 hash functions driven by a byte-at-a-time state machine
//!
//! This module implements SHA-256 and SHA-512/256 as specified in
//! FIPS PUB 180-4. Unlike a conventional block-oriented implementation the
//! message never leaves a single one-block buffer: bytes are placed into the
//! schedule words as they arrive and the padding is produced by the
//! [`FsmState`] machine.
//!
//! [`DigestState`] exposes the raw engine. [`Sha256`] and [`Sha512_256`]
//! wrap it behind [`HashFunction`].

use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crate::types::Sha2Digest;

pub mod compress;
pub mod fsm;
mod ingest;
pub mod state;
pub mod variant;
pub mod word;

pub use compress::compress_block;
pub use fsm::{transition, Action, BlockGeometry, FsmState, Transition};
pub use state::DigestState;
pub use variant::{Sha256Algorithm, Sha512_256Algorithm, Variant};
pub use word::Word;

/// Upper bound on `advance(true)` calls needed to reach `Complete`
const MAX_FINALIZE_STEPS: usize = 8;

/// SHA-2 hasher over a [`Variant`]
///
/// Wraps a [`DigestState`] with the usual streaming interface. `finalize`
/// closes the state; call [`reset`](Sha2::reset) to hash another message.
pub struct Sha2<V: Variant> {
    state: DigestState<V>,
}

/// SHA-256 hash function
pub type Sha256 = Sha2<Sha256Algorithm>;

/// SHA-512/256 hash function
pub type Sha512_256 = Sha2<Sha512_256Algorithm>;

impl<V: Variant> Sha2<V> {
    /// Restart with a fresh state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Underlying engine state
    pub fn state(&self) -> &DigestState<V> {
        &self.state
    }

    fn absorb(&mut self, byte: u8) -> Result<()> {
        if self.state.ingest_byte(byte)? == 1 {
            return Ok(());
        }
        self.state.advance(false)?;
        if self.state.ingest_byte(byte)? == 1 {
            return Ok(());
        }
        Err(Error::Protocol {
            context: "update",
            state: self.state.fsm_state().name(),
        })
    }

    fn finish(&mut self) -> Result<Sha2Digest> {
        for _ in 0..MAX_FINALIZE_STEPS {
            if self.state.advance(true)? == FsmState::Complete {
                break;
            }
        }
        let digest = self.state.digest_bytes()?;
        self.state.close();
        Ok(digest)
    }
}

impl<V: Variant> Clone for Sha2<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<V: Variant> core::fmt::Debug for Sha2<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Sha2").field(&self.state).finish()
    }
}

impl<V: Variant> Zeroize for Sha2<V> {
    fn zeroize(&mut self) {
        self.state.zeroize();
    }
}

impl<V: Variant> HashFunction for Sha2<V> {
    type Algorithm = V;
    type Output = Sha2Digest;

    fn new() -> Self {
        Self {
            state: DigestState::new(),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        for &byte in data {
            self.absorb(byte)?;
        }
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        self.finish()
    }
}
