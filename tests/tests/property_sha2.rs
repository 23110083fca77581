//! Property-based tests for the SHA-2 engines

use proptest::prelude::*;
use tsha_algorithms::hash::sha2::{DigestState, FsmState, Sha256Algorithm};
use tsha_algorithms::hash::{HashFunction, Sha256, Sha512_256};
use tsha_tests::drive;

/// Split points for feeding a message in arbitrary chunks
fn message_and_cuts() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::collection::vec(any::<u8>(), 0..=400).prop_flat_map(|data| {
        let len = data.len();
        (
            Just(data),
            prop::collection::vec(0..=len, 0..8).prop_map(|mut cuts| {
                cuts.sort_unstable();
                cuts
            }),
        )
    })
}

fn chunks<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    let mut start = 0;
    for &cut in cuts {
        out.push(&data[start..cut]);
        start = cut;
    }
    out.push(&data[start..]);
    out
}

proptest! {
    #[test]
    fn sha256_chunking_does_not_matter((data, cuts) in message_and_cuts()) {
        let one_shot = Sha256::digest(&data).unwrap();

        let mut hasher = Sha256::new();
        for chunk in chunks(&data, &cuts) {
            hasher.update(chunk).unwrap();
        }
        prop_assert_eq!(hasher.finalize().unwrap(), one_shot);
    }

    #[test]
    fn sha512_256_chunking_does_not_matter((data, cuts) in message_and_cuts()) {
        let one_shot = Sha512_256::digest(&data).unwrap();

        let mut hasher = Sha512_256::new();
        for chunk in chunks(&data, &cuts) {
            hasher.update(chunk).unwrap();
        }
        prop_assert_eq!(hasher.finalize().unwrap(), one_shot);
    }

    #[test]
    fn hashing_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(Sha256::digest(&data).unwrap(), Sha256::digest(&data).unwrap());
        prop_assert_eq!(
            Sha512_256::digest(&data).unwrap(),
            Sha512_256::digest(&data).unwrap()
        );
    }

    #[test]
    fn reset_forgets_previous_input(
        first in prop::collection::vec(any::<u8>(), 0..200),
        second in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut hasher = Sha256::new();
        hasher.update(&first).unwrap();
        hasher.reset();
        hasher.update(&second).unwrap();
        prop_assert_eq!(hasher.finalize().unwrap(), Sha256::digest(&second).unwrap());
    }

    #[test]
    fn repeated_reset_is_idempotent(
        first in prop::collection::vec(any::<u8>(), 0..200),
        second in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut hasher = Sha512_256::new();
        hasher.update(&first).unwrap();
        hasher.reset();
        hasher.reset();
        hasher.update(&second).unwrap();
        prop_assert_eq!(hasher.finalize().unwrap(), Sha512_256::digest(&second).unwrap());
    }

    #[test]
    fn engine_counters_track_input(data in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut state = DigestState::<Sha256Algorithm>::new();
        let log = drive(&mut state, &data).unwrap();

        prop_assert_eq!(state.fsm_state(), FsmState::Complete);
        prop_assert_eq!(state.total_message_length(), data.len() as u64);
        // One block per 64 bytes of message + terminator + length field
        let expected_blocks = (data.len() + 1 + 8 + 63) / 64;
        prop_assert_eq!(state.blocks_processed(), expected_blocks as u64);
        prop_assert!(log.finish_states.len() <= 6);
        prop_assert!(state.bytes_in_buffer() == 0);
    }
}
