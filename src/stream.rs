//! The one-shot stream produced by call operations.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

type CallFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<Option<T>, E>> + Send + 'a>>;

/// A lazy, one-shot push stream over the outcome of a single call.
///
/// The stream performs no I/O until it is first polled; polling drives the
/// underlying call future, which issues exactly one transport operation. Per
/// stream there is exactly one terminal outcome:
///
/// - one `Ok` value, then end of stream,
/// - one `Err`, then end of stream, or
/// - immediate end of stream with no value, for decoding modes where an
///   absent body completes directly.
///
/// A value and an error are never both emitted. Dropping the stream before
/// its terminal outcome drops the in-flight future, which cancels the
/// underlying transport operation; nothing is emitted after that. Each call
/// operation returns a fresh `CallStream`, so consuming the same endpoint
/// twice means two independent network operations.
pub struct CallStream<'a, T, E> {
    state: State<'a, T, E>,
}

enum State<'a, T, E> {
    Pending(CallFuture<'a, T, E>),
    Done,
}

impl<'a, T, E> CallStream<'a, T, E> {
    pub(crate) fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<Option<T>, E>> + Send + 'a,
    {
        Self {
            state: State::Pending(Box::pin(future)),
        }
    }
}

impl<T, E> Stream for CallStream<'_, T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match &mut this.state {
            State::Pending(future) => match future.as_mut().poll(cx) {
                Poll::Pending => Poll::Pending,
                Poll::Ready(outcome) => {
                    this.state = State::Done;
                    match outcome {
                        Ok(Some(value)) => Poll::Ready(Some(Ok(value))),
                        Ok(None) => Poll::Ready(None),
                        Err(error) => Poll::Ready(Some(Err(error))),
                    }
                }
            },
            State::Done => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Pending(_) => (0, Some(1)),
            State::Done => (0, Some(0)),
        }
    }
}

impl<T, E> fmt::Debug for CallStream<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Pending(_) => "Pending",
            State::Done => "Done",
        };
        f.debug_struct("CallStream").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt as _;

    use super::*;

    #[tokio::test]
    async fn yields_one_value_then_ends() {
        let mut stream = CallStream::<u32, ()>::new(async { Ok(Some(7)) });
        assert_eq!(stream.size_hint(), (0, Some(1)));
        assert_eq!(stream.next().await, Some(Ok(7)));
        assert_eq!(stream.next().await, None);
        assert_eq!(stream.size_hint(), (0, Some(0)));
    }

    #[tokio::test]
    async fn empty_outcome_ends_without_a_value() {
        let mut stream = CallStream::<u32, ()>::new(async { Ok(None) });
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn error_is_terminal() {
        let mut stream = CallStream::<u32, &str>::new(async { Err("boom") });
        assert_eq!(stream.next().await, Some(Err("boom")));
        assert_eq!(stream.next().await, None);
    }
}
