//! Chunked hashing run inside background tasks

use crate::{Digest, HashConfig, StreamingHasher};

/// Absorb `data` into `hasher` in `config`-sized steps, yielding between steps if asked to
pub(crate) async fn absorb_chunked(
    hasher: &mut StreamingHasher,
    data: &[u8],
    config: &HashConfig,
) {
    let chunk_size = config.effective_chunk_size();

    for chunk in data.chunks(chunk_size) {
        hasher.absorb(chunk);
        tracing::trace!(
            chunk_len = chunk.len(),
            bits = hasher.bits_absorbed(),
            "sha256 absorbed chunk"
        );
        if config.yield_between_chunks {
            tokio::task::yield_now().await;
        }
    }
}

/// Hash `data` in `config`-sized steps
pub(crate) async fn sha256_chunked(data: &[u8], config: &HashConfig) -> Digest {
    let mut hasher = StreamingHasher::new();
    absorb_chunked(&mut hasher, data, config).await;
    hasher.pad_and_finish()
}
