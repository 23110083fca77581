//! SHA-2 block compression
//!
//! One function serves both variants: the word width, rotation amounts,
//! round count and constants come from [`Variant`].

use tsha_common::security::{barrier, EphemeralSecret, ZeroizeGuard};
use tsha_params::utils::hash::{BLOCK_WORDS, DIGEST_WORDS, MAX_ROUNDS};

use super::variant::Variant;
use super::word::Word;
use crate::error::{validate, Result};

#[inline(always)]
fn small_sigma<W: Word>(x: W, amounts: [u32; 3]) -> W {
    x.rotr(amounts[0]) ^ x.rotr(amounts[1]) ^ (x >> amounts[2])
}

#[inline(always)]
fn big_sigma<W: Word>(x: W, amounts: [u32; 3]) -> W {
    x.rotr(amounts[0]) ^ x.rotr(amounts[1]) ^ x.rotr(amounts[2])
}

#[inline(always)]
fn ch<W: Word>(e: W, f: W, g: W) -> W {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj<W: Word>(a: W, b: W, c: W) -> W {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Fold one 16-word message block into `digest`
///
/// The message schedule and the working variables are wiped before
/// returning.
pub fn compress_block<V: Variant>(
    digest: &mut [V::Word; DIGEST_WORDS],
    block: &[V::Word; BLOCK_WORDS],
) -> Result<()> {
    let rounds = V::ROUNDS;
    validate::max_length("round count", rounds, MAX_ROUNDS)?;
    validate::length("round constant table", V::ROUND_CONSTANTS.len(), rounds)?;

    let mut w = EphemeralSecret::new([V::Word::ZERO; MAX_ROUNDS]);

    barrier::compiler_fence_seq_cst();

    w[..BLOCK_WORDS].copy_from_slice(block);
    for t in BLOCK_WORDS..rounds {
        w[t] = small_sigma(w[t - 2], V::SIGMA1)
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma(w[t - 15], V::SIGMA0))
            .wrapping_add(w[t - 16]);
    }

    let mut working_vars = *digest;
    let mut guard = ZeroizeGuard::new(&mut working_vars);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *guard;

    for (t, k) in V::ROUND_CONSTANTS.iter().enumerate() {
        let temp1 = h
            .wrapping_add(big_sigma(e, V::BIG_SIGMA1))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(w[t]);
        let temp2 = big_sigma(a, V::BIG_SIGMA0).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    *guard = [a, b, c, d, e, f, g, h];

    for (word, delta) in digest.iter_mut().zip(guard.iter()) {
        *word = word.wrapping_add(*delta);
    }

    barrier::compiler_fence_seq_cst();

    Ok(())
}
