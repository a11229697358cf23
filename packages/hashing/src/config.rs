//! Configuration for the async hashing facade

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::BLOCK_LEN;
use crate::{HashError, Result};

/// Tuning knobs for [`crate::Sha256Builder`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Bytes absorbed per step of the background task
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Yield to the runtime between steps
    #[serde(default = "default_yield_between_chunks")]
    pub yield_between_chunks: bool,
}

fn default_chunk_size() -> usize {
    8192 // 8KB
}

fn default_yield_between_chunks() -> bool {
    true
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            yield_between_chunks: default_yield_between_chunks(),
        }
    }
}

impl HashConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidArgument`] if `json` is not a valid
    /// configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| HashError::invalid_argument(format!("invalid hash config: {e}")))
    }

    /// Set the chunk size
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable or disable yielding between chunks
    #[must_use]
    pub fn with_yield_between_chunks(mut self, yield_between_chunks: bool) -> Self {
        self.yield_between_chunks = yield_between_chunks;
        self
    }

    /// Chunk size actually used, never smaller than one block
    #[must_use]
    pub fn effective_chunk_size(&self) -> usize {
        if self.chunk_size < BLOCK_LEN {
            warn!(
                chunk_size = self.chunk_size,
                "chunk size below one block, using {BLOCK_LEN}"
            );
            return BLOCK_LEN;
        }
        self.chunk_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = HashConfig::from_json(r#"{ "chunk_size": 1024 }"#).expect("valid json");
        assert_eq!(config.chunk_size, 1024);
        assert!(config.yield_between_chunks);

        let config = HashConfig::from_json("{}").expect("valid json");
        assert_eq!(config, HashConfig::default());
    }

    #[test]
    fn invalid_json_is_an_argument_error() {
        let err = HashConfig::from_json(r#"{ "chunk_size": "big" }"#).unwrap_err();
        assert!(matches!(err, HashError::InvalidArgument(_)));
    }

    #[test]
    fn tiny_chunks_are_clamped() {
        let config = HashConfig::default().with_chunk_size(3);
        assert_eq!(config.effective_chunk_size(), BLOCK_LEN);
        assert_eq!(
            HashConfig::default().effective_chunk_size(),
            default_chunk_size()
        );
    }
}
