//! REST gateway for the storefront API.
//!
//! Every operation is a single request/response round trip: no retries, no
//! client-side timeout, no circuit breaking. When a bearer token is supplied
//! it is attached as an `Authorization: Bearer <token>` header. Error bodies
//! follow the API's `{ "message": ... }` convention; when that field is
//! missing or unparsable a generic status-code fallback is used instead.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

use crate::config::ClientConfig;

/// Fallback shown for failures the server gave no message for.
pub(crate) const GENERIC_FAILURE: &str = "Something went wrong, please try again";

/// Errors that can occur when calling the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or a status-code fallback.
        message: String,
    },

    /// Response body failed to decode.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Collapse the error to the string a domain slice stores.
    ///
    /// Server-reported messages are surfaced verbatim; transport and decode
    /// failures fall back to a generic string.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(_) | Self::Parse(_) => GENERIC_FAILURE.to_owned(),
        }
    }
}

/// Conventional message envelope used by error responses and delete
/// acknowledgements.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// Human-readable message.
    pub message: String,
}

/// Client for the storefront REST API.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    root: String,
}

impl ApiClient {
    /// Create a new API client for the configured API root.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                root: config.api_root(),
            }),
        }
    }

    /// Issue a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, token, None::<&()>).await
    }

    /// Issue a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that does not decode into `T`.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, token, Some(body)).await
    }

    /// Issue a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that does not decode into `T`.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, token, Some(body)).await
    }

    /// Issue a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body
    /// that does not decode into `T`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, token, None::<&()>).await
    }

    async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.root);

        let mut request = self.inner.http.request(method, &url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let text = response.text().await?;

        if !status.is_success() {
            debug!(
                status = %status,
                body = %text.chars().take(200).collect::<String>(),
                "API returned non-success status"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_message(status, &text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Pull the server's `message` field out of an error body, falling back to
/// a status-code description when the body has no usable message.
fn extract_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body).map_or_else(
        |_| format!("Request failed with status {status}"),
        |envelope| envelope.message,
    )
}
