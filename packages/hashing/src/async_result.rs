//! Futures returned by the async hashing facade

use crate::{Digest, HashError, Result};
use futures::future::FusedFuture;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

const TASK_DROPPED: &str = "Hash task dropped before completing";

/// Digest computed on a background task
pub struct AsyncHashResult {
    receiver: oneshot::Receiver<Result<Digest>>,
}

/// Digest future whose outcome is passed through a user handler
pub struct AsyncHashResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<Digest>>,
    handler: Option<F>,
}

/// Digest future whose errors are mapped by a user handler
pub struct AsyncHashResultWithError<E> {
    receiver: oneshot::Receiver<Result<Digest>>,
    error_handler: E,
}

impl AsyncHashResult {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<Digest>>) -> Self {
        Self { receiver }
    }

    /// An already resolved result
    #[must_use]
    pub fn ready(result: Result<Digest>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// A result that resolves to `error`
    #[must_use]
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }

    /// Hand the outcome to `handler` and resolve to whatever it returns
    pub fn on_result<F, T>(self, handler: F) -> AsyncHashResultWithHandler<F>
    where
        F: FnOnce(Result<Digest>) -> T,
    {
        AsyncHashResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
        }
    }
}

impl Future for AsyncHashResult {
    type Output = Result<Digest>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(HashError::internal(TASK_DROPPED))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for AsyncHashResultWithHandler<F>
where
    F: FnOnce(Result<Digest>) -> T + Unpin,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // The receiver must not be polled again once the handler has run
        if this.handler.is_none() {
            tracing::warn!("AsyncHashResultWithHandler polled after completion");
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(HashError::internal(TASK_DROPPED)),
            Poll::Pending => return Poll::Pending,
        };

        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}

impl<F, T> FusedFuture for AsyncHashResultWithHandler<F>
where
    F: FnOnce(Result<Digest>) -> T + Unpin,
{
    fn is_terminated(&self) -> bool {
        self.handler.is_none()
    }
}

impl<E> AsyncHashResultWithError<E>
where
    E: Fn(HashError) -> HashError + Unpin,
{
    pub(crate) fn new(receiver: oneshot::Receiver<Result<Digest>>, error_handler: E) -> Self {
        Self {
            receiver,
            error_handler,
        }
    }
}

impl<E> Future for AsyncHashResultWithError<E>
where
    E: Fn(HashError) -> HashError + Unpin,
{
    type Output = Result<Digest>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(e))) => Poll::Ready(Err((this.error_handler)(e))),
            Poll::Ready(Err(_)) => Poll::Ready(Err((this.error_handler)(HashError::internal(
                TASK_DROPPED,
            )))),
            Poll::Pending => Poll::Pending,
        }
    }
}
