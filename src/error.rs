//! Error types and the [`Error`] trait.
//!
//! All errors in this crate implement the [`Error`] trait, which extends
//! [`std::error::Error`] with retry semantics. [`CallError`] is the tagged
//! union produced by every call operation, so callers branch on the failure
//! category instead of parsing message text. [`BoxedError`] provides
//! type-erased error handling while preserving retryability.

use std::convert::Infallible;

use http::StatusCode;
use snafu::{AsErrorSource, Snafu};

/// Errors that may occur in the crate.
pub trait Error: std::error::Error + AsErrorSource + Send + Sync + 'static {
    /// If true, this indicates that a failed request may succeed if retried.
    fn is_retryable(&self) -> bool;
}

impl Error for Infallible {
    fn is_retryable(&self) -> bool {
        false
    }
}

/// A boxed error that can be used without type parameters.
#[derive(Debug, Snafu)]
#[snafu(transparent)]
pub struct BoxedError {
    source: Box<dyn Error>,
}

impl BoxedError {
    /// Create a new boxed error from a generic `Error`.
    pub fn from_err<E: Error + 'static>(err: E) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}

impl Error for BoxedError {
    fn is_retryable(&self) -> bool {
        self.source.is_retryable()
    }
}

/// The single terminal failure of a call stream.
///
/// `ReqErr` and `RespErr` are the transport's request-phase and body-phase
/// error types. Exactly one `CallError` is ever produced per stream, and a
/// stream that errored has emitted no value.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CallError<ReqErr: Error + 'static, RespErr: Error + 'static> {
    /// The transport failed before a response was produced.
    #[snafu(display("transport failed before a response was produced"))]
    Transport {
        /// The underlying transport error.
        source: ReqErr,
    },
    /// The transport produced a response but reading its body failed.
    #[snafu(display("failed to read the response body"))]
    BodyRead {
        /// The underlying body-read error.
        source: RespErr,
    },
    /// The exchange completed with a failure status code.
    #[snafu(display("response has status {status}"))]
    Status {
        /// The status code of the response.
        status: StatusCode,
    },
    /// The response body could not be decoded into the requested shape.
    #[snafu(display("failed to decode the response body"))]
    Decode {
        /// The underlying decode error.
        source: serde_json::Error,
    },
    /// The decoding mode requires a body but the response carried none.
    #[snafu(display("response carried no body"))]
    MissingBody,
}

/// A [`CallError`] with its transport error types erased.
pub type BoxedCallError = CallError<BoxedError, BoxedError>;

impl<ReqErr: Error + 'static, RespErr: Error + 'static> CallError<ReqErr, RespErr> {
    /// Erases the transport error types, keeping the failure category.
    #[must_use]
    pub fn into_boxed(self) -> BoxedCallError {
        match self {
            Self::Transport { source } => CallError::Transport {
                source: BoxedError::from_err(source),
            },
            Self::BodyRead { source } => CallError::BodyRead {
                source: BoxedError::from_err(source),
            },
            Self::Status { status } => CallError::Status { status },
            Self::Decode { source } => CallError::Decode { source },
            Self::MissingBody => CallError::MissingBody,
        }
    }
}

impl<ReqErr: Error + 'static, RespErr: Error + 'static> Error for CallError<ReqErr, RespErr> {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source } => source.is_retryable(),
            Self::BodyRead { source } => source.is_retryable(),
            Self::Status { status } => status.is_server_error(),
            Self::Decode { .. } | Self::MissingBody => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Snafu)]
    #[snafu(display("socket closed"))]
    struct SocketClosed;

    impl Error for SocketClosed {
        fn is_retryable(&self) -> bool {
            true
        }
    }

    type TestError = CallError<SocketClosed, Infallible>;

    #[test]
    fn status_display_embeds_the_code() {
        let error = TestError::Status {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(error.to_string(), "response has status 404 Not Found");
    }

    #[test]
    fn transport_retryability_is_delegated() {
        let error = TestError::Transport {
            source: SocketClosed,
        };
        assert!(error.is_retryable());
    }

    #[test]
    fn server_error_statuses_are_retryable_and_client_errors_are_not() {
        let server = TestError::Status {
            status: StatusCode::BAD_GATEWAY,
        };
        let client = TestError::Status {
            status: StatusCode::UNAUTHORIZED,
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
    }

    #[test]
    fn boxing_preserves_the_category() {
        let error = TestError::Transport {
            source: SocketClosed,
        }
        .into_boxed();
        assert!(matches!(error, BoxedCallError::Transport { .. }));
        assert!(error.is_retryable());
    }

    #[test]
    fn missing_body_is_not_retryable() {
        assert!(!TestError::MissingBody.is_retryable());
    }
}
