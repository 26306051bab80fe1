//! REST adapter for the catalog backend, using [`reqwest`].
//!
//! The adapter reports every completed HTTP exchange as an
//! [`ApiResponse`], including 4xx/5xx answers -- application-level
//! failure is the caller's judgement, made by inspecting `status`. Only
//! transport-level problems (connect, DNS, TLS, broken body reads)
//! surface as [`ApiError`].

use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;

/// HTTP client for the catalog REST API.
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
}

/// A completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code, whatever it was.
    pub status: u16,
    /// Decoded JSON body; `Null` when the body is empty or not JSON
    /// (DELETE responses carry no body).
    pub data: Value,
}

/// Errors from the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl CatalogApi {
    /// Create a new adapter for the given base URL, e.g.
    /// `http://localhost:5000/api`.
    ///
    /// No request timeout is configured: a request that hangs leaves the
    /// calling operation pending until the connection dies on its own.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an adapter reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across stores in tests).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create an adapter from loaded client configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// `GET {base_url}{path}`. The path may carry a query string.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        let response = Self::into_api_response(response).await?;
        tracing::debug!(path, status = response.status, "GET");
        Ok(response)
    }

    /// `POST {base_url}{path}` with a JSON body.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        let response = Self::into_api_response(response).await?;
        tracing::debug!(path, status = response.status, "POST");
        Ok(response)
    }

    /// `PUT {base_url}{path}` with a JSON body.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        let response = Self::into_api_response(response).await?;
        tracing::debug!(path, status = response.status, "PUT");
        Ok(response)
    }

    /// `DELETE {base_url}{path}`.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .delete(format!("{}{path}", self.base_url))
            .send()
            .await?;
        let response = Self::into_api_response(response).await?;
        tracing::debug!(path, status = response.status, "DELETE");
        Ok(response)
    }

    /// Read status and body out of a transport-level success. Bodies
    /// that are empty or fail to parse become `Value::Null` rather than
    /// an error; the status code alone drives the caller's decision.
    async fn into_api_response(response: reqwest::Response) -> Result<ApiResponse, ApiError> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let data = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };
        Ok(ApiResponse { status, data })
    }
}
