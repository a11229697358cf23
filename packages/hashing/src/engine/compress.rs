//! The 64-step compression round and the raw block primitive
//!
//! [`compress`] and [`compress_at`] are the lowest-level entry points. They
//! suit callers that already manage the IV, padding and block iteration
//! themselves, such as a scripting layer that drives the engine block by
//! block over its own byte arrays.

use super::constants::{BLOCK_LEN, ROUND_CONSTANTS, STATE_WORDS};
use super::schedule::{rotr, MessageSchedule};
use crate::{HashError, Result};

#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[inline(always)]
fn big_sigma0(a: u32) -> u32 {
    rotr(a, 2) ^ rotr(a, 13) ^ rotr(a, 22)
}

#[inline(always)]
fn big_sigma1(e: u32) -> u32 {
    rotr(e, 6) ^ rotr(e, 11) ^ rotr(e, 25)
}

/// Run the 64 mixing steps over `schedule` and return the next state.
///
/// Pure: the input state is not touched.
#[must_use]
pub fn compression_round(
    state: &[u32; STATE_WORDS],
    schedule: &MessageSchedule,
) -> [u32; STATE_WORDS] {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&k, &w) in ROUND_CONSTANTS.iter().zip(schedule.words().iter()) {
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);
        let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    let mut next = *state;
    for (word, reg) in next.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(reg);
    }
    next
}

/// Compress one full block into a fixed-size state
#[inline]
pub(crate) fn compress_block(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_LEN]) {
    let schedule = MessageSchedule::expand(block);
    *state = compression_round(state, &schedule);
}

/// Compress one 64-byte `block` into `state` in place.
///
/// # Errors
///
/// Returns [`HashError::InvalidArgument`] if `state` does not hold exactly 8
/// words or `block` is not exactly 64 bytes. `state` is left untouched on
/// error.
pub fn compress(state: &mut [u32], block: &[u8]) -> Result<()> {
    let state_len = state.len();
    let words: &mut [u32; STATE_WORDS] = state.try_into().map_err(|_| {
        tracing::warn!(len = state_len, "compress rejected state array");
        HashError::invalid_argument(format!(
            "state must hold {STATE_WORDS} words, got {state_len}"
        ))
    })?;
    let block: &[u8; BLOCK_LEN] = block.try_into().map_err(|_| {
        tracing::warn!(len = block.len(), "compress rejected block");
        HashError::invalid_argument(format!(
            "block must be {BLOCK_LEN} bytes, got {}",
            block.len()
        ))
    })?;

    compress_block(words, block);
    Ok(())
}

/// Compress the 64 bytes of `data` starting at `offset` into `state`.
///
/// Lets a caller walk a large buffer block by block without slicing it first.
///
/// # Errors
///
/// Returns [`HashError::InvalidArgument`] if `state` does not hold exactly 8
/// words or if `offset..offset + 64` is not inside `data`. `state` is left
/// untouched on error.
pub fn compress_at(state: &mut [u32], data: &[u8], offset: usize) -> Result<()> {
    let block = offset
        .checked_add(BLOCK_LEN)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| {
            tracing::warn!(offset, len = data.len(), "compress_at rejected block range");
            HashError::invalid_argument(format!(
                "block at offset {offset} exceeds buffer of {} bytes",
                data.len()
            ))
        })?;

    compress(state, block)
}
