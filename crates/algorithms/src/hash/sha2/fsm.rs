//! Padding finite state machine
//!
//! SHA-2 padding is expressed as seven states. The decision logic lives in
//! [`transition`], a pure function of the current state, the `finish` flag
//! and the buffer fill level; [`DigestState::advance`] applies the resulting
//! [`Action`] to the buffer and digest.
//!
//! ```text
//! INPUT ──finish──▶ INPUT_UPDATE ──finish──▶ APPEND_1BIT ──▶ APPEND_0_PADDING
//!   ▲                    │                                    │   ▲
//!   └──── compress ──────┘                         fits       │   │ no room:
//!                                                   ▼         └───┘ compress
//!                              COMPLETE ◀── APPEND_LENGTH
//! ```

use core::fmt;

use tracing::{trace, warn};

use tsha_params::utils::hash::MESSAGE_TERMINATOR;

use super::state::DigestState;
use super::variant::Variant;
use crate::error::{Error, Result};

/// State of the padding machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FsmState {
    /// Accepting message bytes
    Input,
    /// The buffer is full, or the caller has signalled end of message
    InputUpdate,
    /// The `0x80` terminator byte is next
    Append1Bit,
    /// Zero fill up to the length field
    Append0Padding,
    /// The bit-length field is next
    AppendLength,
    /// The digest holds the final value
    Complete,
    /// A buffer invariant was violated; terminal
    Error,
}

impl FsmState {
    /// Upper-case name used in logs and error messages
    pub const fn name(self) -> &'static str {
        match self {
            FsmState::Input => "INPUT",
            FsmState::InputUpdate => "INPUT_UPDATE",
            FsmState::Append1Bit => "APPEND_1BIT",
            FsmState::Append0Padding => "APPEND_0_PADDING",
            FsmState::AppendLength => "APPEND_LENGTH",
            FsmState::Complete => "COMPLETE",
            FsmState::Error => "ERROR",
        }
    }

    /// `Complete` and `Error` never transition again
    pub const fn is_terminal(self) -> bool {
        matches!(self, FsmState::Complete | FsmState::Error)
    }

    /// Whether message bytes may still be accepted in this state
    pub const fn accepts_input(self) -> bool {
        matches!(self, FsmState::Input)
    }
}

impl fmt::Display for FsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Buffer side effect of a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,
    /// Compress the full message block
    CompressBlock,
    /// Append `0x80`
    AppendTerminator,
    /// Compress the full block, then append `0x80` to the fresh one
    FlushThenAppendTerminator,
    /// Zero the tail of the block and compress it; the length field
    /// goes into the next block
    FlushPadding,
    /// Write the bit length into the trailing field and compress
    WriteLengthAndCompress,
}

/// Result of one step of the machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the step
    pub next: FsmState,
    /// Effect to apply to the buffer
    pub action: Action,
}

impl Transition {
    const fn to(next: FsmState, action: Action) -> Self {
        Self { next, action }
    }

    const fn stay(state: FsmState) -> Self {
        Self::to(state, Action::None)
    }
}

/// Block and length-field sizes, in bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockGeometry {
    /// Message block size
    pub block_size: usize,
    /// Trailing bit-length field size
    pub length_field_size: usize,
}

impl BlockGeometry {
    /// Create a geometry
    pub const fn new(block_size: usize, length_field_size: usize) -> Self {
        Self {
            block_size,
            length_field_size,
        }
    }

    /// Offset where the length field starts in the final block
    pub const fn length_field_offset(&self) -> usize {
        self.block_size - self.length_field_size
    }
}

/// Compute the next state and the action to apply
///
/// `filled` is the number of valid bytes currently in the block buffer.
/// Without `finish`, nothing happens until the buffer is full.
pub fn transition(
    state: FsmState,
    finish: bool,
    filled: usize,
    geometry: BlockGeometry,
) -> Transition {
    if state.is_terminal() {
        return Transition::stay(state);
    }
    if !finish && filled < geometry.block_size {
        return Transition::stay(state);
    }

    let room_for_length = filled <= geometry.length_field_offset();

    match state {
        FsmState::Input => {
            if finish {
                Transition::to(FsmState::InputUpdate, Action::None)
            } else {
                Transition::stay(state)
            }
        }
        FsmState::InputUpdate => {
            if finish {
                Transition::to(FsmState::Append1Bit, Action::None)
            } else {
                Transition::to(FsmState::Input, Action::CompressBlock)
            }
        }
        FsmState::Append1Bit => {
            if filled < geometry.block_size {
                Transition::to(FsmState::Append0Padding, Action::AppendTerminator)
            } else {
                Transition::to(FsmState::Append0Padding, Action::FlushThenAppendTerminator)
            }
        }
        FsmState::Append0Padding => {
            if room_for_length {
                Transition::to(FsmState::AppendLength, Action::None)
            } else {
                Transition::to(FsmState::Append0Padding, Action::FlushPadding)
            }
        }
        FsmState::AppendLength => {
            if room_for_length {
                Transition::to(FsmState::Complete, Action::WriteLengthAndCompress)
            } else {
                Transition::to(FsmState::Error, Action::None)
            }
        }
        FsmState::Complete | FsmState::Error => Transition::stay(state),
    }
}

impl<V: Variant> DigestState<V> {
    /// Drive the padding machine one step
    ///
    /// Without `finish` this only compresses a full buffer. With `finish`
    /// each call moves one step towards [`FsmState::Complete`]; a full
    /// finalization takes at most six calls from `Input`. Calling this in
    /// `Complete` is a no-op. Reaching, or being in, [`FsmState::Error`]
    /// yields [`Error::Protocol`].
    pub fn advance(&mut self, finish: bool) -> Result<FsmState> {
        self.ensure_initialized("advance")?;

        let current = self.fsm;
        if current == FsmState::Error {
            return Err(Error::Protocol {
                context: "advance",
                state: current.name(),
            });
        }

        let step = transition(current, finish, self.filled, V::geometry());
        match step.action {
            Action::None => {}
            Action::CompressBlock => self.finalize_block()?,
            Action::AppendTerminator => self.push_byte(MESSAGE_TERMINATOR)?,
            Action::FlushThenAppendTerminator => {
                self.finalize_block()?;
                self.push_byte(MESSAGE_TERMINATOR)?;
            }
            // Unused bytes are already zero: the block is wiped after every
            // compression and bytes are only ever written at `filled`.
            Action::FlushPadding => self.finalize_block()?,
            Action::WriteLengthAndCompress => {
                self.write_length_field()?;
                self.finalize_block()?;
            }
        }

        self.fsm = step.next;
        if step.next != current {
            trace!(
                algorithm = V::ALGORITHM_ID,
                from = current.name(),
                to = step.next.name(),
                action = ?step.action,
                filled = self.filled,
                "fsm transition"
            );
        }

        if step.next == FsmState::Error {
            warn!(
                algorithm = V::ALGORITHM_ID,
                from = current.name(),
                filled = self.filled,
                "padding state machine entered error state"
            );
            return Err(Error::Protocol {
                context: "advance",
                state: current.name(),
            });
        }

        Ok(step.next)
    }
}
