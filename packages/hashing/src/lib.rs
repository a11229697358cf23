//! SHA-256 computed from first principles
//!
//! Three layers, lowest first:
//! - [`compress`] / [`compress_at`]: one 64-byte block into a caller-owned
//!   8-word state, for callers that handle the IV and padding themselves
//! - [`StreamingHasher`]: arbitrary-length input with padding and the
//!   length suffix applied on `finalize`
//! - [`Hash::sha256`]: async builder that hashes on a tokio task
//!
//! ```
//! use cryypt_sha256::StreamingHasher;
//!
//! let mut hasher = StreamingHasher::new();
//! hasher.update(b"ab")?;
//! hasher.update(b"c")?;
//! let digest = hasher.finalize()?;
//! assert_eq!(&digest.as_bytes()[..4], &[0xba, 0x78, 0x16, 0xbf]);
//! # Ok::<(), cryypt_sha256::HashError>(())
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod config;
pub mod digest;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod stream;

pub use error::{ErrorKind, HashError, Result};

pub use api::{
    Hash, Sha256Builder, Sha256BuilderWithChunk, Sha256BuilderWithError, Sha256BuilderWithHandler,
};
pub use async_result::{AsyncHashResult, AsyncHashResultWithError, AsyncHashResultWithHandler};
pub use config::HashConfig;
pub use digest::Digest;
pub use engine::{
    compress, compress_at, MessageSchedule, StateAccumulator, BLOCK_LEN, DIGEST_LEN, IV,
    ROUND_CONSTANTS, STATE_WORDS,
};
pub use hasher::{sha256, Lifecycle, StreamingHasher};
pub use stream::{collect_digest, stream_sha256, HashStream, StreamHashChunk, StreamHashResult};
