use super::{HttpTransport, TransportResponse};

use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode, Uri};

impl HttpTransport for reqwest::Client {
    type Response = reqwest::Response;
    type Error = reqwest::Error;

    /// Executes an `http::Request<Bytes>` by converting it into a
    /// `reqwest::Request` and sending it through this client.
    async fn execute(&self, request: Request<Bytes>) -> Result<Self::Response, Self::Error> {
        let (parts, body) = request.into_parts();
        let reqwest_request = self
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .build()?;

        reqwest::Client::execute(self, reqwest_request).await
    }
}

impl TransportResponse for reqwest::Response {
    type Error = reqwest::Error;

    fn status(&self) -> StatusCode {
        self.status()
    }

    fn headers(&self) -> HeaderMap {
        self.headers().clone()
    }

    fn url(&self) -> Option<Uri> {
        Uri::try_from(self.url().as_str()).ok()
    }

    /// Reads the full body via `reqwest::Response::bytes()`.
    async fn body(self) -> Result<Bytes, Self::Error> {
        self.bytes().await
    }
}

impl crate::Error for reqwest::Error {
    fn is_retryable(&self) -> bool {
        self.is_connect() || self.is_timeout()
    }
}
