//! Internal client implementation.

use std::time::Duration;

#[cfg(feature = "rest")]
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
#[cfg(feature = "rest")]
use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
#[cfg(feature = "rest")]
use zeroize::Zeroizing;

use crate::Error;
use crate::auth::Session;

/// Header carrying the per-request correlation id.
#[cfg(feature = "rest")]
const REQUEST_ID_HEADER: &str = "x-request-id";

pub(crate) struct ClientInner {
    /// API base URL, always ending in `/`.
    pub base_url: url::Url,

    /// Session whose access token is attached to every request.
    pub session: Session,

    /// Per-request timeout.
    pub timeout: Duration,

    /// HTTP client.
    #[cfg(feature = "rest")]
    pub http_client: reqwest::Client,
}

#[cfg(feature = "rest")]
impl ClientInner {
    /// Resolves an API path against the base URL.
    fn build_url(&self, path: &str) -> Result<url::Url, Error> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::configuration(format!("invalid URL path '{}': {}", path, e)))
    }

    fn build_headers(&self, request_id: &str) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(crate::user_agent::user_agent())
                .map_err(|_| Error::configuration("invalid User-Agent"))?,
        );
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(request_id)
                .map_err(|_| Error::configuration("invalid request id"))?,
        );

        if let Some(token) = self.session.access_token() {
            let bearer = Zeroizing::new(format!("Bearer {}", token.as_str()));
            let mut value = HeaderValue::from_str(&bearer)
                .map_err(|_| Error::unauthorized("invalid access token format"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    fn request(&self, method: Method, path: &str) -> Result<(RequestBuilder, String), Error> {
        let url = self.build_url(path)?;
        let request_id = uuid::Uuid::new_v4().to_string();
        let headers = self.build_headers(&request_id)?;

        tracing::debug!(%method, %url, %request_id, "sending request");

        let builder = self
            .http_client
            .request(method, url)
            .headers(headers)
            .timeout(self.timeout);
        Ok((builder, request_id))
    }

    /// Makes a GET request.
    pub(crate) async fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let (request, request_id) = self.request(Method::GET, path)?;
        self.send(request, request_id).await
    }

    /// Makes a POST request with a JSON body.
    pub(crate) async fn post<T, R>(&self, path: &str, body: &T) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let (request, request_id) = self.request(Method::POST, path)?;
        self.send(request.json(body), request_id).await
    }

    /// Makes a PUT request with a JSON body.
    pub(crate) async fn put<T, R>(&self, path: &str, body: &T) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let (request, request_id) = self.request(Method::PUT, path)?;
        self.send(request.json(body), request_id).await
    }

    /// Makes a DELETE request. The API echoes the deleted record.
    pub(crate) async fn delete<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let (request, request_id) = self.request(Method::DELETE, path)?;
        self.send(request, request_id).await
    }

    async fn send<R>(&self, request: RequestBuilder, request_id: String) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| Error::from(e).with_request_id(request_id.clone()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| Error::from(e).with_request_id(request_id))
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %request_id, "request failed");
            Err(Error::from_response(status.as_u16(), &body).with_request_id(request_id))
        }
    }
}

#[cfg(not(feature = "rest"))]
impl ClientInner {
    fn unavailable() -> Error {
        Error::configuration("HTTP requests require the 'rest' feature")
    }

    pub(crate) async fn get<R>(&self, _path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        Err(Self::unavailable())
    }

    pub(crate) async fn post<T, R>(&self, _path: &str, _body: &T) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        Err(Self::unavailable())
    }

    pub(crate) async fn put<T, R>(&self, _path: &str, _body: &T) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        Err(Self::unavailable())
    }

    pub(crate) async fn delete<R>(&self, _path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        Err(Self::unavailable())
    }
}
