//! Running hash state

use zeroize::Zeroize;

use super::compress::compress_block;
use super::constants::{BLOCK_LEN, IV, STATE_WORDS};
use crate::Digest;

/// Holds the 8-word running state and folds compressed blocks into it
#[derive(Clone, PartialEq, Eq)]
pub struct StateAccumulator {
    words: [u32; STATE_WORDS],
}

impl Default for StateAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StateAccumulator {
    /// Start from the IV
    #[must_use]
    pub fn new() -> Self {
        Self { words: IV }
    }

    /// Start from an arbitrary intermediate state
    #[must_use]
    pub fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self { words }
    }

    /// Compress `block` and fold the result into the state
    pub fn absorb(&mut self, block: &[u8; BLOCK_LEN]) {
        compress_block(&mut self.words, block);
    }

    /// Current state words
    #[must_use]
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Serialize the state as a digest, most significant byte of each word first
    #[must_use]
    pub fn digest(&self) -> Digest {
        Digest::from_words(&self.words)
    }

    /// Back to the IV
    pub fn reset(&mut self) {
        self.words = IV;
    }
}

impl Zeroize for StateAccumulator {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

impl std::fmt::Debug for StateAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateAccumulator").finish_non_exhaustive()
    }
}
