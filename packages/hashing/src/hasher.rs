//! Incremental SHA-256 over arbitrary-length input
//!
//! [`StreamingHasher`] buffers partial blocks, compresses every complete
//! 64-byte block as soon as it is formed, and applies padding plus the
//! length suffix on [`StreamingHasher::finalize`].
//!
//! Lifecycle: `Ready --update--> Absorbing --finalize--> Finalized --reset--> Ready`.
//! A finalized hasher rejects `update` and `finalize` until it is reset.

use zeroize::Zeroize;

use crate::engine::{StateAccumulator, BLOCK_LEN};
use crate::{Digest, HashError, Result};

/// Offset of the 64-bit length suffix inside the final block
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Where a [`StreamingHasher`] is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Fresh or just reset, nothing absorbed yet
    Ready,
    /// At least one `update` call since creation or reset
    Absorbing,
    /// Digest produced; only `reset` is accepted
    Finalized,
}

/// Incremental SHA-256 context
///
/// Owned by a single caller. Hash independent inputs in parallel by giving
/// each its own hasher.
#[derive(Clone)]
pub struct StreamingHasher {
    state: StateAccumulator,
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    bit_len: u64,
    lifecycle: Lifecycle,
}

impl Default for StreamingHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHasher {
    /// Create a hasher in the `Ready` state
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: StateAccumulator::new(),
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            bit_len: 0,
            lifecycle: Lifecycle::Ready,
        }
    }

    /// Hash a complete message in one call
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.absorb(data);
        hasher.pad_and_finish()
    }

    /// Absorb more input
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if the hasher has been finalized
    /// and not reset since.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_not_finalized("update")?;
        self.lifecycle = Lifecycle::Absorbing;
        self.absorb(data);
        Ok(())
    }

    /// Pad the message, compress the final block(s) and return the digest
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidState`] if the hasher was already
    /// finalized and not reset since.
    pub fn finalize(&mut self) -> Result<Digest> {
        self.ensure_not_finalized("finalize")?;
        Ok(self.pad_and_finish())
    }

    /// Discard everything absorbed and return to `Ready`
    pub fn reset(&mut self) {
        self.state.reset();
        self.buffer.zeroize();
        self.buffered = 0;
        self.bit_len = 0;
        self.lifecycle = Lifecycle::Ready;
        tracing::debug!("sha256 hasher reset");
    }

    /// Current lifecycle state
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Number of message bits absorbed since creation or the last reset
    #[must_use]
    pub fn bits_absorbed(&self) -> u64 {
        self.bit_len
    }

    /// Bytes waiting in the partial-block buffer, always below 64
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buffered
    }

    fn ensure_not_finalized(&self, operation: &str) -> Result<()> {
        if self.lifecycle == Lifecycle::Finalized {
            tracing::warn!(operation, "sha256 hasher used after finalize");
            return Err(HashError::invalid_state(format!(
                "{operation} called on a finalized hasher; call reset first"
            )));
        }
        Ok(())
    }

    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        // Length is defined modulo 2^64 bits
        self.bit_len = self
            .bit_len
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            let (head, rest) = data.split_at(take);
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(head);
            self.buffered += take;
            data = rest;

            if self.buffered < BLOCK_LEN {
                return;
            }
            self.state.absorb(&self.buffer);
            self.buffered = 0;
        }

        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
            self.state.absorb(block);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffered = data.len();
    }

    pub(crate) fn pad_and_finish(&mut self) -> Digest {
        let bit_len = self.bit_len;
        let mut blocks = 1;

        self.buffer[self.buffered] = 0x80;
        self.buffer[self.buffered + 1..].fill(0);

        if self.buffered >= LENGTH_OFFSET {
            self.state.absorb(&self.buffer);
            self.buffer.fill(0);
            blocks += 1;
        }

        self.buffer[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        self.state.absorb(&self.buffer);

        let digest = self.state.digest();
        self.buffer.zeroize();
        self.state.zeroize();
        self.buffered = 0;
        self.lifecycle = Lifecycle::Finalized;

        tracing::debug!(bits = bit_len, final_blocks = blocks, "sha256 finalized");
        digest
    }
}

impl std::io::Write for StreamingHasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for StreamingHasher {
    fn drop(&mut self) {
        self.buffer.zeroize();
        self.state.zeroize();
    }
}

impl std::fmt::Debug for StreamingHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingHasher")
            .field("lifecycle", &self.lifecycle)
            .field("bits_absorbed", &self.bit_len)
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}

/// Hash `data` in one call
#[must_use]
pub fn sha256(data: &[u8]) -> Digest {
    StreamingHasher::digest(data)
}
