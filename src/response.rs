//! The response data model and status classification.

use bytes::Bytes;
use http::{HeaderMap, StatusCode, Uri};

use crate::http::TransportResponse;

/// A generic JSON payload: a key-ordered mapping of string keys to arbitrary
/// JSON values. A top-level array or scalar does not qualify.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Metadata of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// The response status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The final URL of the exchange, if the transport tracks redirects.
    pub url: Option<Uri>,
}

impl ResponseHead {
    pub(crate) fn of<R: TransportResponse>(response: &R) -> Self {
        Self {
            status: response.status(),
            headers: response.headers(),
            url: response.url(),
        }
    }

    /// Whether the status classifies the exchange as successful.
    ///
    /// Informational, success, and redirection codes count as success;
    /// 400 and above is a failure.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_u16() < 400
    }
}

/// A response with its raw body.
///
/// The body is `None` when the wire body was empty or absent, which on a
/// successful status is not a failure (a `HEAD` response, for instance).
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The response metadata.
    pub head: ResponseHead,
    /// The raw body, if one was present.
    pub body: Option<Bytes>,
}

/// A response with its body decoded into `T`.
#[derive(Debug, Clone)]
pub struct TypedResponse<T> {
    /// The response metadata.
    pub head: ResponseHead,
    /// The decoded value; `None` when the response carried no body.
    pub value: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head(status: StatusCode) -> ResponseHead {
        ResponseHead {
            status,
            headers: HeaderMap::new(),
            url: None,
        }
    }

    #[test]
    fn statuses_below_400_are_success() {
        assert!(head(StatusCode::CONTINUE).is_success());
        assert!(head(StatusCode::OK).is_success());
        assert!(head(StatusCode::PERMANENT_REDIRECT).is_success());
    }

    #[test]
    fn statuses_from_400_are_failure() {
        assert!(!head(StatusCode::BAD_REQUEST).is_success());
        assert!(!head(StatusCode::NOT_FOUND).is_success());
        assert!(!head(StatusCode::INTERNAL_SERVER_ERROR).is_success());
    }
}
