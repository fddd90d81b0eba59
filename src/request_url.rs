//! A validated request URL.
//!
//! [`RequestUrl`] is a newtype over [`Uri`] that guarantees the URL has been
//! parsed successfully before a request is built from it. It can be
//! constructed from common string and URL types via [`IntoRequestUrl`], so a
//! bad URL is a `Result` at the call site rather than a failure inside the
//! stream.

use std::convert::Infallible;

use http::{Uri, uri::InvalidUri};
use url::Url;

/// A validated request URL.
///
/// This is a newtype over [`Uri`] which can be constructed from common
/// string and URL types via [`IntoRequestUrl`]. Once constructed, it can be
/// freely cloned and turned into requests without re-validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(Uri);

impl RequestUrl {
    /// Returns the inner [`Uri`].
    #[must_use]
    pub fn as_uri(&self) -> &Uri {
        &self.0
    }

    /// Consumes the [`RequestUrl`] and returns the inner [`Uri`].
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.0
    }
}

/// Conversion trait for types that can be turned into a [`RequestUrl`].
pub trait IntoRequestUrl {
    /// The error type returned if the conversion fails.
    type Error;

    /// Attempts to convert this value into a [`RequestUrl`].
    fn into_request_url(self) -> Result<RequestUrl, Self::Error>;
}

impl IntoRequestUrl for RequestUrl {
    type Error = Infallible;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        Ok(self)
    }
}

impl IntoRequestUrl for Uri {
    type Error = Infallible;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        Ok(RequestUrl(self))
    }
}

impl IntoRequestUrl for Url {
    type Error = InvalidUri;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        self.as_str().parse::<Uri>().map(RequestUrl)
    }
}

impl IntoRequestUrl for &str {
    type Error = InvalidUri;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        self.parse::<Uri>().map(RequestUrl)
    }
}

impl IntoRequestUrl for String {
    type Error = InvalidUri;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        self.parse::<Uri>().map(RequestUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_conversion_validates() {
        let url = "https://example.com/items?page=2".into_request_url().unwrap();
        assert_eq!(url.as_uri().host(), Some("example.com"));
        assert_eq!(url.as_uri().query(), Some("page=2"));
    }

    #[test]
    fn invalid_str_is_rejected() {
        assert!("http://exa mple.com".into_request_url().is_err());
    }

    #[test]
    fn url_crate_conversion_round_trips() {
        let parsed = Url::parse("https://example.com/a/b").unwrap();
        let url = parsed.into_request_url().unwrap();
        assert_eq!(url.into_uri().path(), "/a/b");
    }
}
