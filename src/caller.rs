//! The caller: one request in, one one-shot stream out.

use bytes::Bytes;
use http::Request;
use serde::de::DeserializeOwned;
use snafu::prelude::*;

use crate::{
    CallRequest,
    error::{BodyReadSnafu, CallError, DecodeSnafu, MissingBodySnafu, StatusSnafu, TransportSnafu},
    http::{HttpTransport, TransportResponse},
    request_url::IntoRequestUrl,
    response::{JsonObject, RawResponse, ResponseHead, TypedResponse},
    stream::CallStream,
};

/// The error type of calls issued through a transport `C`.
pub type TransportCallError<C> = CallError<
    <C as HttpTransport>::Error,
    <<C as HttpTransport>::Response as TransportResponse>::Error,
>;

/// Issues single-shot HTTP requests and exposes each outcome as a
/// [`CallStream`].
///
/// The caller owns one transport instance, injected at construction and
/// shared read-only across concurrent calls. It keeps no state between
/// calls: every operation returns a fresh stream whose request is issued on
/// first poll, and no result is cached or replayed across streams.
#[derive(Debug, Clone)]
pub struct RestCaller<C> {
    transport: C,
}

impl<C> RestCaller<C> {
    /// Creates a caller around an injected transport.
    pub fn new(transport: C) -> Self {
        Self { transport }
    }

    /// Returns the injected transport.
    pub fn transport(&self) -> &C {
        &self.transport
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "transport-reqwest-0_13"))]
impl RestCaller<reqwest::Client> {
    /// Creates a caller around a default-configured [`reqwest::Client`].
    ///
    /// The client is reused across all calls made through this caller. Any
    /// timeout or redirect policy must come from the client configuration;
    /// build one yourself and use [`RestCaller::new`] to deviate from the
    /// defaults.
    #[must_use]
    pub fn with_default_transport() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl<C: HttpTransport> RestCaller<C> {
    /// Fetches `url` with `GET` and decodes the body as a JSON object.
    ///
    /// Convenience over [`RestCaller::call_json`] for the common case.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed as a valid URI. Failures
    /// of the call itself surface through the stream.
    pub fn get<U: IntoRequestUrl>(
        &self,
        url: U,
    ) -> Result<CallStream<'_, JsonObject, TransportCallError<C>>, U::Error> {
        let request = CallRequest::builder().url(url)?.build().into_http();
        Ok(self.call_json(request))
    }

    /// Calls `request` and emits the response with its raw body.
    ///
    /// On a success status the stream emits exactly one [`RawResponse`] and
    /// ends; its body is `None` when the wire body was empty or absent.
    pub fn call(&self, request: Request<Bytes>) -> CallStream<'_, RawResponse, TransportCallError<C>> {
        CallStream::new(async move {
            let (head, body) = self.fetch(request).await?;
            Ok(Some(RawResponse { head, body }))
        })
    }

    /// Calls `request` and decodes the body as a generic JSON object.
    ///
    /// The body must be a JSON document with an object at top level; an
    /// array or scalar is a decode failure, and an absent body is a
    /// [`CallError::MissingBody`].
    pub fn call_json(
        &self,
        request: Request<Bytes>,
    ) -> CallStream<'_, JsonObject, TransportCallError<C>> {
        CallStream::new(async move {
            let (_, body) = self.fetch(request).await?;
            let body = body.context(MissingBodySnafu)?;
            let object = serde_json::from_slice(&body).context(DecodeSnafu)?;
            Ok(Some(object))
        })
    }

    /// Calls `request` and decodes the body into `T`, keeping the response
    /// metadata alongside the value.
    ///
    /// An absent body on a success status emits `value: None` rather than an
    /// error. A body that does not decode into `T` is a decode failure;
    /// declare tolerated-absent fields as `Option` on `T`.
    pub fn call_typed<T: DeserializeOwned>(
        &self,
        request: Request<Bytes>,
    ) -> CallStream<'_, TypedResponse<T>, TransportCallError<C>> {
        CallStream::new(async move {
            let (head, body) = self.fetch(request).await?;
            let value = match body {
                Some(body) => Some(serde_json::from_slice(&body).context(DecodeSnafu)?),
                None => None,
            };
            Ok(Some(TypedResponse { head, value }))
        })
    }

    /// Calls `request` and decodes the body into a bare `T`.
    ///
    /// Like [`RestCaller::call_typed`] without the metadata wrapper; since
    /// there is no wrapper to carry an absent value, a missing body is a
    /// [`CallError::MissingBody`].
    pub fn call_for<T: DeserializeOwned>(
        &self,
        request: Request<Bytes>,
    ) -> CallStream<'_, T, TransportCallError<C>> {
        CallStream::new(async move {
            let (_, body) = self.fetch(request).await?;
            let body = body.context(MissingBodySnafu)?;
            Ok(Some(serde_json::from_slice(&body).context(DecodeSnafu)?))
        })
    }

    /// Calls `request` and emits the raw body bytes.
    ///
    /// An empty or absent body on a success status is not a failure: the
    /// stream ends without emitting a value.
    pub fn call_for_data(
        &self,
        request: Request<Bytes>,
    ) -> CallStream<'_, Bytes, TransportCallError<C>> {
        CallStream::new(async move {
            let (_, body) = self.fetch(request).await?;
            Ok(body)
        })
    }

    /// Executes the request once: transport, status classification, body.
    ///
    /// The status gate runs before the body is read, so a failure status
    /// never pays for the body transfer.
    async fn fetch(
        &self,
        request: Request<Bytes>,
    ) -> Result<(ResponseHead, Option<Bytes>), TransportCallError<C>> {
        let response = self
            .transport
            .execute(request)
            .await
            .context(TransportSnafu)?;
        let head = ResponseHead::of(&response);
        ensure!(
            head.is_success(),
            StatusSnafu {
                status: head.status
            }
        );

        let body = response.body().await.context(BodyReadSnafu)?;
        let body = if body.is_empty() { None } else { Some(body) };
        Ok((head, body))
    }
}
