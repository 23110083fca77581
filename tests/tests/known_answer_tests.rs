//! Known-answer tests for both variants, including padding boundaries

use tsha_algorithms::hash::{HashFunction, Sha256, Sha512_256};
use tsha_algorithms::vectors::{self, KNOWN_ANSWERS};
use tsha_algorithms::Algorithm;
use tsha_tests::{hex_digest, repeat_a};

#[test]
fn builtin_vectors_pass() {
    for vector in KNOWN_ANSWERS {
        assert!(
            vectors::check(vector).unwrap(),
            "{} {}",
            vector.algorithm,
            vector.description
        );
        assert_eq!(
            hex_digest(vector.algorithm, vector.message),
            vector.expected_hex
        );
    }
}

#[test]
fn sha256_length_boundaries() {
    let cases = [
        (0, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        (1, "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"),
        (55, "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"),
        (56, "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"),
        (63, "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34"),
        (64, "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"),
        (65, "635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0"),
        (119, "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb"),
        (120, "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c"),
        (128, "6836cf13bac400e9105071cd6af47084dfacad4e5e302c94bfed24e013afb73e"),
    ];
    for (len, expected) in cases {
        assert_eq!(
            hex_digest(Algorithm::Sha256, &repeat_a(len)),
            expected,
            "length {}",
            len
        );
    }
}

#[test]
fn sha512_256_length_boundaries() {
    let cases = [
        (1, "455e518824bc0601f9fb858ff5c37d417d67c2f8e0df2babe4808858aea830f8"),
        (111, "0239e429f98d0ed61ee8e2a7c30afe98c1c3a80ce5dff62a107e9c538f7632ce"),
        (112, "9216b5303edb66504570bee90e48ea5beaa5e9fe9f760bbd3e0460559fc005f6"),
        (127, "2fe3b2a6ee7e12f6fe4ba82166541ad9b4ed882c493581cbe300d68f3757b778"),
        (128, "b88f97e274f9c1d49f181c8cbd01a9c74930ad055a46ac4499a1d601f1c80bf2"),
        (129, "fb9035c9009ed4a60e37510339ebdb1c771339f30aa581d5dea3690a524c23f1"),
        (239, "78d0a1b37aaad84c89fff13cbe3cd3d1025bcdb648268f9102b7e7032bea7d2a"),
        (240, "d48a4d53397b38ab4e771d781c98ac6b86712dff2a664cfd1f27c7ca40f8ce37"),
    ];
    for (len, expected) in cases {
        assert_eq!(
            hex_digest(Algorithm::Sha512_256, &repeat_a(len)),
            expected,
            "length {}",
            len
        );
    }
}

#[test]
fn password_sized_input() {
    assert_eq!(
        hex_digest(Algorithm::Sha256, b"hunter2"),
        "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7"
    );
    assert_eq!(
        hex_digest(Algorithm::Sha512_256, b"hunter2"),
        "c61deb1aea5e9359595cacbef3a12b33913970fcdd84db119035ed8371c115e8"
    );
}

#[test]
fn one_million_a_sha256() {
    let chunk = [b'a'; 1000];
    let mut hasher = Sha256::new();
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    assert_eq!(
        hasher.finalize().unwrap().to_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn one_million_a_sha512_256() {
    let chunk = [b'a'; 1000];
    let mut hasher = Sha512_256::new();
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    assert_eq!(
        hasher.finalize().unwrap().to_hex(),
        "9a59a052930187a97038cae692f30708aa6491923ef5194394dc68d56c74fb21"
    );
}
