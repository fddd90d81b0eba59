//! Single-shot HTTP calls exposed as one-shot push streams.
//!
//! [`RestCaller`] wraps an injected [`HttpTransport`] and turns each request
//! into a [`CallStream`]: a lazy, one-shot [`Stream`] that issues the
//! request on first poll, emits at most one value, and terminates. Failure
//! statuses, transport failures, and undecodable bodies all surface as the
//! stream's single error.
//!
//! [`HttpTransport`]: crate::http::HttpTransport
//! [`Stream`]: futures_core::Stream

#![forbid(unsafe_code)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod caller;
mod error;
pub mod http;
pub mod prelude;
mod request;
mod request_url;
mod response;
mod stream;

pub use caller::{RestCaller, TransportCallError};
pub use error::{BoxedCallError, BoxedError, CallError, Error};
pub use request::CallRequest;
pub use request_url::{IntoRequestUrl, RequestUrl};
pub use response::{JsonObject, RawResponse, ResponseHead, TypedResponse};
pub use stream::CallStream;

/// Documentation
pub mod _documentation {
    #[doc = include_str!("../README.md")]
    mod readme {}
    #[doc = include_str!("../CHANGELOG.md")]
    pub mod changelog {}
}

pub use bytes::Bytes;
