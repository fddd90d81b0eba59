//! Convenience construction of request descriptors.
//!
//! Call operations take a plain [`http::Request<Bytes>`]. [`CallRequest`] is
//! the ergonomic way to build one: the URL is required and validated, the
//! method defaults to `GET`, headers and body are optional.

use bon::Builder;
use bytes::Bytes;
use http::{HeaderMap, Method, Request};

use crate::request_url::{IntoRequestUrl, RequestUrl};

/// A request descriptor builder.
///
/// Produces an immutable [`http::Request<Bytes>`] via [`CallRequest::into_http`].
///
/// ```
/// use reststream::CallRequest;
///
/// let request = CallRequest::builder()
///     .url("https://example.com/items")?
///     .build()
///     .into_http();
/// assert_eq!(request.method(), http::Method::GET);
/// # Ok::<(), http::uri::InvalidUri>(())
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(state_mod(name = "builder"))]
pub struct CallRequest {
    /// The target URL.
    #[builder(setters(name = "request_url"))]
    url: RequestUrl,

    /// The HTTP method. Defaults to `GET`.
    #[builder(default = Method::GET)]
    method: Method,

    /// Request headers. Defaults to none.
    #[builder(default)]
    headers: HeaderMap,

    /// The request body, if any.
    #[builder(into)]
    body: Option<Bytes>,
}

impl<S: builder::State> CallRequestBuilder<S> {
    /// Sets the target URL.
    ///
    /// Accepts any type that implements [`IntoRequestUrl`], including
    /// `&str`, [`String`], [`Url`](url::Url), [`Uri`](http::Uri), and
    /// [`RequestUrl`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed as a valid URI.
    pub fn url<U: IntoRequestUrl>(
        self,
        url: U,
    ) -> Result<CallRequestBuilder<builder::SetUrl<S>>, U::Error>
    where
        S::Url: builder::IsUnset,
    {
        Ok(self.request_url(url.into_request_url()?))
    }
}

impl CallRequest {
    /// Consumes the descriptor and produces the [`http::Request`] to execute.
    #[must_use]
    pub fn into_http(self) -> Request<Bytes> {
        let (mut parts, ()) = Request::new(()).into_parts();
        parts.method = self.method;
        parts.uri = self.url.into_uri();
        parts.headers = self.headers;
        Request::from_parts(parts, self.body.unwrap_or_default())
    }
}

impl From<CallRequest> for Request<Bytes> {
    fn from(request: CallRequest) -> Self {
        request.into_http()
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn method_defaults_to_get() {
        let request = CallRequest::builder()
            .url("https://example.com/feed")
            .unwrap()
            .build()
            .into_http();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.uri().path(), "/feed");
        assert!(request.body().is_empty());
    }

    #[test]
    fn explicit_method_headers_and_body_are_kept() {
        let mut headers = HeaderMap::new();
        headers.insert("x-trace", HeaderValue::from_static("abc"));

        let request = CallRequest::builder()
            .url("https://example.com/items")
            .unwrap()
            .method(Method::POST)
            .headers(headers)
            .body("{\"name\":\"demo\"}")
            .build()
            .into_http();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.headers().get("x-trace"),
            Some(&HeaderValue::from_static("abc"))
        );
        assert_eq!(request.body().as_ref(), b"{\"name\":\"demo\"}");
    }

    #[test]
    fn bad_url_fails_before_a_request_exists() {
        assert!(CallRequest::builder().url("http://exa mple.com").is_err());
    }
}
