//! The transport seam: one-shot HTTP execution behind a trait.
//!
//! [`HttpTransport`] decouples the caller from any specific HTTP
//! implementation. A transport executes exactly one request per invocation
//! and resolves exactly once, with either a response or an error, never both
//! and never neither. A `reqwest`-backed implementation ships behind the
//! `transport-reqwest-0_13` feature; anything else (another client crate, a
//! canned-response test double) plugs in by implementing the two traits.

#[cfg(all(not(target_arch = "wasm32"), feature = "transport-reqwest-0_13"))]
mod reqwest_0_13;

use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode, Uri};

/// Defines the common interface for executing HTTP requests.
pub trait HttpTransport: Send + Sync {
    /// The error type returned by the transport for a failed request.
    type Error: crate::Error;

    /// The associated response type produced by this transport.
    type Response: TransportResponse;

    /// Executes an HTTP request and returns an owned response.
    ///
    /// The future resolves exactly once. Dropping it before completion is
    /// the cancellation path: the transport must abandon the in-flight
    /// request and emit nothing further.
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}

/// Defines the common interface for HTTP responses.
pub trait TransportResponse: Send + Sync {
    /// The error type when reading the response body.
    type Error: crate::Error;

    /// Returns the HTTP status code of the response.
    fn status(&self) -> StatusCode;

    /// Returns the response's HTTP headers.
    fn headers(&self) -> HeaderMap;

    /// Returns the final URL of the exchange, after any redirects, if the
    /// transport tracks it.
    fn url(&self) -> Option<Uri>;

    /// Consumes the response and asynchronously returns its full body.
    ///
    /// An absent body is reported as empty [`Bytes`], not as an error.
    fn body(self) -> impl Future<Output = Result<Bytes, Self::Error>> + Send;
}
