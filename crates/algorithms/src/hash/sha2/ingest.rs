//! Byte-at-a-time message input

use tracing::trace;

use super::fsm::FsmState;
use super::state::DigestState;
use super::variant::Variant;
use crate::error::{Error, Result};

impl<V: Variant> DigestState<V> {
    /// Offer one message byte to the buffer
    ///
    /// Returns `Ok(1)` when the byte was stored. Returns `Ok(0)` when the
    /// buffer is full: the state moves to [`FsmState::InputUpdate`] and the
    /// caller must [`advance`](Self::advance) (without `finish`) before
    /// offering the same byte again. Once padding has started, input is
    /// rejected with [`Error::InvalidState`].
    pub fn ingest_byte(&mut self, byte: u8) -> Result<usize> {
        self.ensure_initialized("ingest_byte")?;

        if self.fsm == FsmState::InputUpdate {
            return Ok(0);
        }
        if !self.fsm.accepts_input() {
            return Err(Error::InvalidState {
                context: "ingest_byte after finalization started",
            });
        }

        if self.filled < V::BLOCK_SIZE {
            self.push_byte(byte)?;
            self.total_len = self.total_len.wrapping_add(1);
            return Ok(1);
        }

        self.fsm = FsmState::InputUpdate;
        trace!(
            algorithm = V::ALGORITHM_ID,
            from = FsmState::Input.name(),
            to = FsmState::InputUpdate.name(),
            "message block full"
        );
        Ok(0)
    }
}
