//! Known-answer vectors
//!
//! FIPS 180-4 example messages plus a two-block SHA-256 message. These are
//! what `tsha --self-test` runs.

use tsha_api::Algorithm;
use tsha_common::security::SecureCompare;
use tsha_params::utils::hash::MAX_OUTPUT_SIZE;

use crate::error::{Error, Result};
use crate::hash::hash_with;

/// A message and its expected digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    /// Algorithm the vector applies to
    pub algorithm: Algorithm,
    /// Short label for reports
    pub description: &'static str,
    /// Message bytes
    pub message: &'static [u8],
    /// Expected digest, lowercase hex
    pub expected_hex: &'static str,
}

/// All built-in vectors
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        algorithm: Algorithm::Sha256,
        description: "empty message",
        message: b"",
        expected_hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        algorithm: Algorithm::Sha256,
        description: "\"abc\"",
        message: b"abc",
        expected_hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        algorithm: Algorithm::Sha256,
        description: "56-byte message",
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        expected_hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        algorithm: Algorithm::Sha256,
        description: "128-byte message",
        message: b"abcdefghijabcdefghijabcdefghijababcdefghijabcdefghij\
abcdefghijababcdefghijabcdefghijabcdefghijababcdefgh\
ijabcdefghijabcdefghijab",
        expected_hex: "c1a8e9a9d09f4a72a2ee26938170d24150b2654b4e88c69adf86dfe7b1a71f40",
    },
    KnownAnswer {
        algorithm: Algorithm::Sha512_256,
        description: "empty message",
        message: b"",
        expected_hex: "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a",
    },
    KnownAnswer {
        algorithm: Algorithm::Sha512_256,
        description: "\"abc\"",
        message: b"abc",
        expected_hex: "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23",
    },
    KnownAnswer {
        algorithm: Algorithm::Sha512_256,
        description: "112-byte message",
        message: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        expected_hex: "3928e184fb8690f840da3988121d31be65cb9d3ef83ee6146feac861e19b563a",
    },
];

/// Vectors for one algorithm
pub fn known_answers(algorithm: Algorithm) -> impl Iterator<Item = &'static KnownAnswer> {
    KNOWN_ANSWERS
        .iter()
        .filter(move |v| v.algorithm == algorithm)
}

/// Hash the vector's message and compare against the expected digest
///
/// `Ok(false)` means the engine produced a different digest; `Err` means
/// the vector itself is malformed or hashing failed.
pub fn check(vector: &KnownAnswer) -> Result<bool> {
    let mut expected = [0u8; MAX_OUTPUT_SIZE];
    let width = vector.algorithm.output_size();
    if vector.expected_hex.len() != width * 2 {
        return Err(Error::Length {
            context: "known-answer digest",
            expected: width * 2,
            actual: vector.expected_hex.len(),
        });
    }
    hex::decode_to_slice(vector.expected_hex, &mut expected[..width])
        .map_err(|_| Error::param("expected_hex", "Invalid hexadecimal string"))?;

    let actual = hash_with(vector.algorithm, vector.message)?;
    Ok(actual.as_ref().secure_eq(&expected[..width]))
}
