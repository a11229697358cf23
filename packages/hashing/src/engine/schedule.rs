//! Message schedule expansion
//!
//! Turns one 64-byte block into the 64 words consumed by the compression
//! round. The schedule lives on the stack of the caller and is dropped once
//! the block has been compressed.

use super::constants::BLOCK_LEN;

/// Rotate a 32-bit word right by `n` bits, `0 < n < 32`
#[inline(always)]
pub(crate) fn rotr(x: u32, n: u32) -> u32 {
    debug_assert!(n > 0 && n < 32, "rotation amount out of range: {n}");
    x.rotate_right(n)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

/// The 64 schedule words derived from a single block
#[derive(Clone, PartialEq, Eq)]
pub struct MessageSchedule {
    words: [u32; 64],
}

impl MessageSchedule {
    /// Expand `block` into its schedule
    #[must_use]
    pub fn expand(block: &[u8; BLOCK_LEN]) -> Self {
        let mut w = [0u32; 64];

        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        for i in 16..64 {
            w[i] = w[i - 16]
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma1(w[i - 2]));
        }

        Self { words: w }
    }

    /// All 64 words
    #[must_use]
    pub fn words(&self) -> &[u32; 64] {
        &self.words
    }
}

impl std::fmt::Debug for MessageSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageSchedule")
            .field("w0", &format_args!("{:#010x}", self.words[0]))
            .field("w63", &format_args!("{:#010x}", self.words[63]))
            .finish()
    }
}
