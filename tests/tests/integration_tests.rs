//! Cross-crate behaviour: facade re-exports, error conversion, security
//! helpers

use tsha::prelude::*;
use tsha_api::{Error as ApiError, ResultExt};
use tsha_algorithms::{Sha256Algorithm, Sha512_256Algorithm};
use tsha_common::security::{EphemeralSecret, SecureCompare};

#[test]
fn facade_reexports_hashers() {
    let digest = Sha256::digest(b"abc").unwrap();
    assert_eq!(
        digest.to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(tsha::algorithms::hash_with(Algorithm::Sha256, b"abc").unwrap(), digest);
}

#[test]
fn algorithm_selector_round_trips_through_names() {
    for algorithm in Algorithm::ALL {
        let parsed: Algorithm = algorithm.name().parse().unwrap();
        assert_eq!(parsed, algorithm);
    }
    assert!("md5".parse::<Algorithm>().is_err());
}

fn selector_matches_variant<V: HashAlgorithm>() {
    let algorithm = V::ALGORITHM;
    assert_eq!(algorithm.output_size(), V::OUTPUT_SIZE);
    assert_eq!(algorithm.block_size(), V::BLOCK_SIZE);
    assert_eq!(algorithm.name(), V::ALGORITHM_ID);
}

#[test]
fn algorithm_selector_geometry_matches_engines() {
    selector_matches_variant::<Sha256Algorithm>();
    selector_matches_variant::<Sha512_256Algorithm>();
}

#[test]
fn engine_errors_convert_to_api_errors() {
    let mut hasher = Sha512_256::new();
    hasher.finalize().unwrap();

    let err: ApiError = hasher.update(b"late").map(|_| ()).unwrap_err().into();
    assert!(matches!(err, ApiError::InvalidState { .. }));

    let wrapped: tsha_api::Result<()> =
        Err::<(), ApiError>(err).with_context("hashing late input");
    assert!(wrapped.is_err());
}

#[test]
fn digest_comparison_is_by_content() {
    let a = Sha256::digest(b"left").unwrap();
    let b = Sha256::digest(b"right").unwrap();
    assert_ne!(a, b);
    assert!(a.as_ref().secure_eq(Sha256::digest(b"left").unwrap().as_ref()));
}

#[test]
fn ephemeral_secret_redacts_debug() {
    let secret = EphemeralSecret::new([0x41u8; 4]);
    assert_eq!(format!("{:?}", secret), "EphemeralSecret([REDACTED])");
}
