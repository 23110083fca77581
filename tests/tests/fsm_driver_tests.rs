//! Drive the raw engine state machine and check its observable behaviour

use tsha_algorithms::hash::sha2::{
    transition, Action, BlockGeometry, DigestState, FsmState, Sha256Algorithm,
    Sha512_256Algorithm, Variant,
};
use tsha_algorithms::hash::{HashFunction, Sha256, Sha512_256};
use tsha_algorithms::{Error, Sha2Digest};
use tsha_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_LENGTH_FIELD_SIZE, SHA512_BLOCK_SIZE, SHA512_LENGTH_FIELD_SIZE,
};
use tsha_tests::{drive, repeat_a};

use FsmState::*;

#[test]
fn short_message_takes_five_finish_steps() {
    let mut state = DigestState::<Sha256Algorithm>::new();
    let log = drive(&mut state, b"abc").unwrap();
    assert_eq!(
        log.finish_states,
        vec![InputUpdate, Append1Bit, Append0Padding, AppendLength, Complete]
    );
    assert_eq!(log.refusals, 0);
    assert_eq!(state.blocks_processed(), 1);
    assert_eq!(state.total_message_length(), 3);
}

#[test]
fn length_field_spill_adds_padding_block() {
    // Filling up to the length field + terminator leaves no room for the length
    let spill = SHA256_BLOCK_SIZE - SHA256_LENGTH_FIELD_SIZE;
    let mut state = DigestState::<Sha256Algorithm>::new();
    let log = drive(&mut state, &repeat_a(spill)).unwrap();
    assert_eq!(
        log.finish_states,
        vec![
            InputUpdate,
            Append1Bit,
            Append0Padding,
            Append0Padding,
            AppendLength,
            Complete
        ]
    );
    assert_eq!(state.blocks_processed(), 2);
}

#[test]
fn full_block_terminator_spills_into_fresh_block() {
    let mut state = DigestState::<Sha256Algorithm>::new();
    let log = drive(&mut state, &repeat_a(SHA256_BLOCK_SIZE)).unwrap();
    assert_eq!(log.refusals, 0);
    assert_eq!(state.blocks_processed(), 2);

    let mut state = DigestState::<Sha512_256Algorithm>::new();
    drive(&mut state, &repeat_a(SHA512_BLOCK_SIZE)).unwrap();
    assert_eq!(state.blocks_processed(), 2);
}

#[test]
fn refusal_happens_once_per_full_block() {
    let mut state = DigestState::<Sha256Algorithm>::new();
    let log = drive(&mut state, &repeat_a(SHA256_BLOCK_SIZE * 3 + 1)).unwrap();
    assert_eq!(log.refusals, 3);
    assert_eq!(state.blocks_processed(), 4);

    let mut state = DigestState::<Sha512_256Algorithm>::new();
    let log = drive(&mut state, &repeat_a(SHA512_BLOCK_SIZE + 1)).unwrap();
    assert_eq!(log.refusals, 1);
}

#[test]
fn raw_engine_agrees_with_facade() {
    for len in [0usize, 1, 55, 56, 63, 64, 65, 200] {
        let data = repeat_a(len);

        let mut state = DigestState::<Sha256Algorithm>::new();
        drive(&mut state, &data).unwrap();
        assert_eq!(
            state.digest_bytes().unwrap(),
            Sha256::digest(&data).unwrap(),
            "length {}",
            len
        );

        let mut state = DigestState::<Sha512_256Algorithm>::new();
        drive(&mut state, &data).unwrap();
        assert_eq!(
            state.digest_bytes().unwrap(),
            Sha512_256::digest(&data).unwrap(),
            "length {}",
            len
        );
    }
}

#[test]
fn sha512_256_exposes_all_eight_words_but_outputs_four() {
    let mut state = DigestState::<Sha512_256Algorithm>::new();
    drive(&mut state, b"abc").unwrap();
    let words = state.extract_digest().unwrap();
    assert_eq!(words[0], 0x53048e2681941ef9);
    assert_eq!(words[3], 0xe0e2f13107e7af23);
    assert_eq!(state.digest_bytes().unwrap().len(), 32);
}

#[test]
fn advance_without_finish_is_idle_while_buffer_has_room() {
    let mut state = DigestState::<Sha256Algorithm>::new();
    state.ingest_byte(1).unwrap();
    for _ in 0..3 {
        assert_eq!(state.advance(false).unwrap(), Input);
    }
    assert_eq!(state.bytes_in_buffer(), 1);
    assert_eq!(state.blocks_processed(), 0);
}

#[test]
fn reset_restores_initial_state_from_anywhere() {
    let mut state = DigestState::<Sha256Algorithm>::new();
    drive(&mut state, &repeat_a(100)).unwrap();
    state.reset();
    assert!(state.is_initialized());
    assert_eq!(state.fsm_state(), Input);
    assert_eq!(state.bytes_in_buffer(), 0);
    assert_eq!(state.total_message_length(), 0);

    drive(&mut state, b"abc").unwrap();
    assert_eq!(
        state.digest_bytes().unwrap(),
        Sha256::digest(b"abc").unwrap()
    );
}

fn digest_after<V: Variant>(state: &mut DigestState<V>, data: &[u8]) -> Sha2Digest {
    drive(state, data).unwrap();
    state.digest_bytes().unwrap()
}

fn back_to_back_resets<V: Variant>() {
    let message = repeat_a(V::BLOCK_SIZE + 3);

    let mut twice = DigestState::<V>::new();
    drive(&mut twice, b"earlier input").unwrap();
    twice.reset();
    twice.reset();
    assert_eq!(twice.fsm_state(), Input);
    assert_eq!(twice.total_message_length(), 0);

    let mut once = DigestState::<V>::new();
    drive(&mut once, b"earlier input").unwrap();
    once.reset();

    let mut fresh = DigestState::<V>::new();

    let expected = digest_after(&mut fresh, &message);
    assert_eq!(digest_after(&mut twice, &message), expected);
    assert_eq!(digest_after(&mut once, &message), expected);
}

#[test]
fn double_reset_matches_single_reset_and_fresh_state() {
    back_to_back_resets::<Sha256Algorithm>();
    back_to_back_resets::<Sha512_256Algorithm>();
}

#[test]
fn closed_state_rejects_everything() {
    let mut state = DigestState::<Sha256Algorithm>::new();
    drive(&mut state, b"abc").unwrap();
    state.close();

    assert!(matches!(state.ingest_byte(0), Err(Error::InvalidState { .. })));
    assert!(matches!(state.advance(true), Err(Error::InvalidState { .. })));
    assert!(matches!(state.extract_digest(), Err(Error::InvalidState { .. })));
}

#[test]
fn uninitialized_state_rejects_everything() {
    let mut state = DigestState::<Sha512_256Algorithm>::uninitialized();
    assert!(!state.is_initialized());
    assert!(state.ingest_byte(0).is_err());
    assert!(state.advance(false).is_err());
}

#[test]
fn transition_table_is_pure() {
    let g = Sha256Algorithm::geometry();
    assert_eq!(
        g,
        BlockGeometry::new(SHA256_BLOCK_SIZE, SHA256_LENGTH_FIELD_SIZE)
    );
    assert_eq!(
        Sha512_256Algorithm::geometry(),
        BlockGeometry::new(SHA512_BLOCK_SIZE, SHA512_LENGTH_FIELD_SIZE)
    );

    let t = transition(Append1Bit, true, SHA256_BLOCK_SIZE, g);
    assert_eq!(t.action, Action::FlushThenAppendTerminator);
    // Same inputs, same answer
    assert_eq!(transition(Append1Bit, true, SHA256_BLOCK_SIZE, g), t);

    let past_length_field = SHA256_BLOCK_SIZE - SHA256_LENGTH_FIELD_SIZE + 1;
    assert_eq!(
        transition(AppendLength, true, past_length_field, g).next,
        FsmState::Error
    );
}
