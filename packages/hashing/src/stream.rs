//! Hashing a `Stream` of byte chunks
//!
//! Each chunk is absorbed as soon as the input stream yields it. The adapter
//! reports progress per chunk and emits one final item carrying the digest.

use crate::{Digest, HashError, Result, StreamingHasher};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Stream adapter feeding every chunk of `input` into a SHA-256 hasher
    pub struct HashStream<S> {
        #[pin]
        input: S,
        hasher: StreamingHasher,
        finished: bool,
        total_bytes: u64,
    }
}

impl<S> HashStream<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Wrap `input`
    pub fn new(input: S) -> Self {
        Self {
            input,
            hasher: StreamingHasher::new(),
            finished: false,
            total_bytes: 0,
        }
    }

    /// Total number of bytes absorbed so far
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Progress item yielded by [`HashStream`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHashChunk {
    /// Bytes absorbed from this chunk
    pub bytes_processed: u64,
    /// Bytes absorbed so far
    pub total_bytes: u64,
    /// Whether this is the last item
    pub is_final: bool,
    /// Digest of the whole stream, only on the last item
    pub digest: Option<Digest>,
}

/// Outcome of [`collect_digest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHashResult {
    /// Digest of the whole stream
    pub digest: Digest,
    /// Total bytes absorbed
    pub total_bytes: u64,
}

impl<S> Stream for HashStream<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamHashChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        match this.input.poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                if let Err(e) = this.hasher.update(&chunk) {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e)));
                }
                let chunk_size = chunk.len() as u64;
                *this.total_bytes += chunk_size;
                tracing::trace!(chunk_size, total = *this.total_bytes, "absorbed stream chunk");

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    is_final: false,
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                *this.finished = true;
                let item = this.hasher.finalize().map(|digest| StreamHashChunk {
                    bytes_processed: 0,
                    total_bytes: *this.total_bytes,
                    is_final: true,
                    digest: Some(digest),
                });
                Poll::Ready(Some(item))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Hash every chunk of `input`
pub fn stream_sha256<S>(input: S) -> HashStream<S>
where
    S: Stream<Item = Vec<u8>>,
{
    HashStream::new(input)
}

/// Drive a [`HashStream`] to completion and return its digest
///
/// # Errors
///
/// Returns `HashError` if the hasher rejects a chunk or the stream ends
/// without a final item.
pub async fn collect_digest<S>(mut stream: HashStream<S>) -> Result<StreamHashResult>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    while let Some(item) = stream.next().await {
        let chunk = item?;
        if let (true, Some(digest)) = (chunk.is_final, chunk.digest) {
            return Ok(StreamHashResult {
                digest,
                total_bytes: chunk.total_bytes,
            });
        }
    }

    Err(HashError::internal(
        "Stream ended without producing a final digest",
    ))
}
