//! Internal client implementation.

use std::time::Duration;

#[cfg(feature = "rest")]
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
#[cfg(feature = "rest")]
use tracing::debug;

use crate::auth::TokenCredentials;
#[cfg(feature = "rest")]
use crate::auth::{AUTH_TOKEN_HEADER, PROJECT_ID_HEADER};
use crate::config::PaginationConfig;
use crate::error::Error;
#[cfg(feature = "rest")]
use crate::error::ErrorKind;

/// Request and response header carrying the OpenStack request ID.
#[cfg(feature = "rest")]
const REQUEST_ID_HEADER: &str = "x-openstack-request-id";

/// Generates a request ID in the `req-<uuid>` form OpenStack services use.
#[cfg(feature = "rest")]
fn new_request_id() -> String {
    format!("req-{}", uuid::Uuid::new_v4())
}

pub(crate) struct ClientInner {
    /// The resolved Smaug endpoint.
    pub url: String,

    /// Identity service URL, if configured.
    pub auth_url: Option<String>,

    /// Token credentials of the console user.
    pub credentials: TokenCredentials,

    /// Page-size defaults for paged list requests.
    pub pagination_config: PaginationConfig,

    /// Request timeout.
    pub timeout: Duration,

    /// HTTP client for API calls.
    #[cfg(feature = "rest")]
    pub http_client: Option<reqwest::Client>,
}

/// Extracts the value wrapped under `key` in a response body.
pub(crate) fn unwrap_key<R>(mut body: serde_json::Value, key: &str) -> Result<R, Error>
where
    R: DeserializeOwned,
{
    let value = body
        .get_mut(key)
        .map(serde_json::Value::take)
        .ok_or_else(|| Error::invalid_response(format!("response is missing '{}'", key)))?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(feature = "rest")]
impl ClientInner {
    /// Builds the URL for an API path relative to the endpoint.
    fn build_url(&self, path: &str) -> Result<url::Url, Error> {
        let joined = format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url::Url::parse(&joined)
            .map_err(|e| Error::configuration(format!("Invalid URL path: {}", e)))
    }

    /// Builds headers for API requests.
    fn build_headers(&self, request_id: &str) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(request_id)
                .map_err(|_| Error::internal("Invalid request ID format"))?,
        );

        headers.insert(
            AUTH_TOKEN_HEADER,
            HeaderValue::from_str(self.credentials.token())
                .map_err(|_| Error::unauthorized("Invalid auth token format"))?,
        );
        if let Some(project_id) = self.credentials.project_id() {
            headers.insert(
                PROJECT_ID_HEADER,
                HeaderValue::from_str(project_id)
                    .map_err(|_| Error::configuration("Invalid project ID format"))?,
            );
        }

        Ok(headers)
    }

    /// Returns the HTTP client, or an error if not available.
    fn http_client(&self) -> Result<&reqwest::Client, Error> {
        self.http_client
            .as_ref()
            .ok_or_else(|| Error::configuration("HTTP client not available"))
    }

    /// Makes a GET request and returns the JSON body.
    pub(crate) async fn get(&self, path: &str) -> Result<serde_json::Value, Error> {
        let url = self.build_url(path)?;
        let request_id = new_request_id();
        debug!(method = "GET", %url, request_id = %request_id, "smaug request");

        let response = self
            .http_client()?
            .get(url)
            .headers(self.build_headers(&request_id)?)
            .timeout(self.timeout)
            .send()
            .await?;

        self.handle_response(response, request_id).await
    }

    /// Makes a POST request with a JSON body.
    pub(crate) async fn post<T>(&self, path: &str, body: &T) -> Result<serde_json::Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let url = self.build_url(path)?;
        let request_id = new_request_id();
        debug!(method = "POST", %url, request_id = %request_id, "smaug request");

        let response = self
            .http_client()?
            .post(url)
            .headers(self.build_headers(&request_id)?)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await?;

        self.handle_response(response, request_id).await
    }

    /// Makes a PUT request with a JSON body.
    pub(crate) async fn put<T>(&self, path: &str, body: &T) -> Result<serde_json::Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let url = self.build_url(path)?;
        let request_id = new_request_id();
        debug!(method = "PUT", %url, request_id = %request_id, "smaug request");

        let response = self
            .http_client()?
            .put(url)
            .headers(self.build_headers(&request_id)?)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await?;

        self.handle_response(response, request_id).await
    }

    /// Makes a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.build_url(path)?;
        let request_id = new_request_id();
        debug!(method = "DELETE", %url, request_id = %request_id, "smaug request");

        let response = self
            .http_client()?
            .delete(url)
            .headers(self.build_headers(&request_id)?)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.status_error(response, request_id).await)
        }
    }

    /// Handles an HTTP response.
    async fn handle_response(
        &self,
        response: reqwest::Response,
        request_id: String,
    ) -> Result<serde_json::Value, Error> {
        let status = response.status();
        if !status.is_success() {
            return Err(self.status_error(response, request_id).await);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::invalid_response(format!("Failed to parse response: {}", e)).with_source(e)
        })
    }

    /// Maps a non-success response to an error.
    ///
    /// The service's request ID wins over the one the client sent.
    async fn status_error(&self, response: reqwest::Response, sent_request_id: String) -> Error {
        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or(sent_request_id);
        let body = response.text().await.unwrap_or_default();

        let kind = ErrorKind::from_http_status(status.as_u16());
        let message = match kind {
            ErrorKind::Unauthorized => "Authentication required".to_string(),
            ErrorKind::Forbidden => "Permission denied".to_string(),
            ErrorKind::RateLimited => "Rate limit exceeded".to_string(),
            _ => format!("HTTP {}: {}", status, body),
        };

        debug!(status = status.as_u16(), request_id = %request_id, "smaug request failed");
        Error::new(kind, message).with_request_id(request_id)
    }
}

#[cfg(not(feature = "rest"))]
impl ClientInner {
    pub(crate) async fn get(&self, _path: &str) -> Result<serde_json::Value, Error> {
        Err(Error::configuration("REST feature is required for the Smaug API"))
    }

    pub(crate) async fn post<T>(&self, _path: &str, _body: &T) -> Result<serde_json::Value, Error>
    where
        T: Serialize + ?Sized,
    {
        Err(Error::configuration("REST feature is required for the Smaug API"))
    }

    pub(crate) async fn put<T>(&self, _path: &str, _body: &T) -> Result<serde_json::Value, Error>
    where
        T: Serialize + ?Sized,
    {
        Err(Error::configuration("REST feature is required for the Smaug API"))
    }

    pub(crate) async fn delete(&self, _path: &str) -> Result<(), Error> {
        Err(Error::configuration("REST feature is required for the Smaug API"))
    }
}

impl ClientInner {
    /// GETs `path` and unwraps the value under `key`.
    pub(crate) async fn get_wrapped<R>(&self, path: &str, key: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        unwrap_key(self.get(path).await?, key)
    }

    /// POSTs `body` to `path` and unwraps the value under `key`.
    pub(crate) async fn post_wrapped<T, R>(&self, path: &str, body: &T, key: &str) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        unwrap_key(self.post(path, body).await?, key)
    }

    /// PUTs `body` to `path` and unwraps the value under `key`.
    pub(crate) async fn put_wrapped<T, R>(&self, path: &str, body: &T, key: &str) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        unwrap_key(self.put(path, body).await?, key)
    }
}
