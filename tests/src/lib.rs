//! Shared helpers for the tsha integration tests

use tsha_algorithms::hash::sha2::{DigestState, FsmState, Variant};
use tsha_algorithms::{hash_with, Algorithm, Result};

/// `n` repetitions of `'a'`
pub fn repeat_a(n: usize) -> Vec<u8> {
    vec![b'a'; n]
}

/// Lowercase hex digest of `data`
pub fn hex_digest(algorithm: Algorithm, data: &[u8]) -> String {
    match hash_with(algorithm, data) {
        Ok(digest) => hex::encode(digest.as_ref()),
        Err(err) => panic!("{} failed on {} bytes: {}", algorithm, data.len(), err),
    }
}

/// Record of a raw engine run
#[derive(Debug)]
pub struct DriveLog {
    /// States returned by each `advance(true)` call
    pub finish_states: Vec<FsmState>,
    /// Number of times ingestion was refused because the buffer was full
    pub refusals: usize,
}

/// Feed `data` through the raw engine one byte at a time and finish it
///
/// Mirrors how the low-level contract is meant to be driven: on a refused
/// byte, advance without `finish` and offer the byte again.
pub fn drive<V: Variant>(state: &mut DigestState<V>, data: &[u8]) -> Result<DriveLog> {
    let mut refusals = 0;
    for &byte in data {
        if state.ingest_byte(byte)? == 0 {
            refusals += 1;
            state.advance(false)?;
            assert_eq!(state.ingest_byte(byte)?, 1, "byte refused twice");
        }
    }

    let mut finish_states = Vec::new();
    while state.fsm_state() != FsmState::Complete {
        finish_states.push(state.advance(true)?);
        assert!(finish_states.len() <= 8, "finalization did not converge");
    }

    Ok(DriveLog {
        finish_states,
        refusals,
    })
}
