//! SHA-256 builder
//!
//! Usage: `Hash::sha256().compute(data).await`

use super::hash_functions::{absorb_chunked, sha256_chunked};
use crate::{
    AsyncHashResult, AsyncHashResultWithError, Digest, HashConfig, HashError, Result,
    StreamingHasher,
};
use tokio::sync::oneshot;

/// SHA-256 hash builder
#[derive(Clone, Debug, Default)]
pub struct Sha256Builder {
    config: HashConfig,
}

/// SHA-256 hash builder with result handler
pub struct Sha256BuilderWithHandler<F, T> {
    config: HashConfig,
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

/// SHA-256 hash builder with error handler
pub struct Sha256BuilderWithError<E> {
    config: HashConfig,
    error_handler: E,
}

/// SHA-256 hash builder with chunk handler
pub struct Sha256BuilderWithChunk<C> {
    config: HashConfig,
    chunk_handler: C,
}

fn spawn_hash(data: Vec<u8>, config: HashConfig) -> oneshot::Receiver<Result<Digest>> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let digest = sha256_chunked(&data, &config).await;
        let _ = tx.send(Ok(digest));
    });

    rx
}

impl Sha256Builder {
    /// Create new SHA-256 builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(self, config: HashConfig) -> Self {
        Self { config }
    }

    /// Set the number of bytes absorbed per step
    #[must_use]
    pub fn with_chunk_size(self, chunk_size: usize) -> Self {
        Self {
            config: self.config.with_chunk_size(chunk_size),
        }
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Add `on_result` handler
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> Sha256BuilderWithHandler<F, T>
    where
        F: FnOnce(Result<Digest>) -> T + Send + 'static,
        T: Send + 'static,
    {
        Sha256BuilderWithHandler {
            config: self.config,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Add `on_error` handler - transforms errors but passes through success
    #[must_use]
    pub fn on_error<E>(self, handler: E) -> Sha256BuilderWithError<E>
    where
        E: Fn(HashError) -> HashError + Send + Sync + 'static,
    {
        Sha256BuilderWithError {
            config: self.config,
            error_handler: handler,
        }
    }

    /// Add `on_chunk` handler for streaming; the configuration carries over
    #[must_use]
    pub fn on_chunk<C>(self, handler: C) -> Sha256BuilderWithChunk<C>
    where
        C: Fn(Vec<u8>) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        Sha256BuilderWithChunk {
            config: self.config,
            chunk_handler: handler,
        }
    }

    /// Hash `data` on a background task
    #[must_use]
    pub fn compute<T: Into<Vec<u8>>>(self, data: T) -> AsyncHashResult {
        AsyncHashResult::new(spawn_hash(data.into(), self.config))
    }

    /// Hash every chunk of `stream` in order
    ///
    /// # Errors
    ///
    /// Infallible today; the `Result` matches the other compute paths.
    pub async fn compute_stream<S>(self, stream: S) -> Result<Digest>
    where
        S: tokio_stream::Stream<Item = Vec<u8>> + Send + 'static,
    {
        Sha256BuilderWithChunk {
            config: self.config,
            chunk_handler: Some::<Vec<u8>>,
        }
        .compute_stream(stream)
        .await
    }
}

impl<F, T> Sha256BuilderWithHandler<F, T>
where
    F: FnOnce(Result<Digest>) -> T + Send + 'static,
    T: Send + 'static,
{
    /// Hash `data` and pass the outcome through the handler
    pub async fn compute<D: Into<Vec<u8>>>(self, data: D) -> T {
        let data = data.into();
        let digest = sha256_chunked(&data, &self.config).await;
        (self.result_handler)(Ok(digest))
    }
}

impl<E> Sha256BuilderWithError<E>
where
    E: Fn(HashError) -> HashError + Send + Sync + Unpin + 'static,
{
    /// Add `on_result` handler after error handler
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> Sha256BuilderWithHandler<F, T>
    where
        F: FnOnce(Result<Digest>) -> T + Send + 'static,
        T: Send + 'static,
    {
        Sha256BuilderWithHandler {
            config: self.config,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Hash `data` on a background task, mapping any error through the handler
    #[must_use]
    pub fn compute<T: Into<Vec<u8>>>(self, data: T) -> AsyncHashResultWithError<E> {
        AsyncHashResultWithError::new(spawn_hash(data.into(), self.config), self.error_handler)
    }
}

impl<C> Sha256BuilderWithChunk<C>
where
    C: Fn(Vec<u8>) -> Option<Vec<u8>> + Send + Sync + 'static,
{
    /// Configuration applied to each chunk the handler lets through
    #[must_use]
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Hash a stream; the handler may rewrite each chunk or return `None` to stop early
    ///
    /// Each accepted chunk is absorbed in `chunk_size` steps, yielding between
    /// steps when `yield_between_chunks` is set.
    ///
    /// # Errors
    ///
    /// Infallible today; the `Result` matches the other compute paths.
    pub async fn compute_stream<S>(self, stream: S) -> Result<Digest>
    where
        S: tokio_stream::Stream<Item = Vec<u8>> + Send + 'static,
    {
        use tokio_stream::StreamExt;

        let chunk_handler = self.chunk_handler;
        let mut hasher = StreamingHasher::new();
        let mut stream = Box::pin(stream);

        while let Some(chunk) = stream.next().await {
            let Some(data) = (chunk_handler)(chunk) else {
                tracing::debug!("chunk handler stopped the stream early");
                break;
            };
            absorb_chunked(&mut hasher, &data, &self.config).await;
        }

        hasher.finalize()
    }
}
