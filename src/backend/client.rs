use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{config, error::ApiError};

/// HTTP client for the TuneScope backend service.
///
/// Owns a reused `reqwest::Client` and the base URL, which is fixed at
/// configuration time. Authorized reads pass the raw token value in the
/// `Authorization` header without a scheme prefix; the backend expects this
/// exact framing.
#[derive(Debug, Clone)]
pub struct BackendClient {
    pub(super) http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::backend_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One-shot liveness probe. Failure is informational; callers surface a
    /// warning and carry on, and the probe is never retried automatically.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.url("/ping"))
            .send()
            .await
            .map_err(|e| ApiError::BackendUnreachable(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::BackendUnreachable(e.to_string()))?;
        Ok(())
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// GET with the backend's raw-token authorization framing, decoding a
    /// JSON body. 401 maps to `Unauthorized`; every other failure maps to
    /// `FetchFailed` with the backend-provided message when there is one.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::FetchFailed(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status if !status.is_success() => {
                Err(ApiError::FetchFailed(error_message(response, status).await))
            }
            _ => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::FetchFailed(e.to_string())),
        }
    }
}

/// Pulls the `{"error": message}` body the backend attaches to failures,
/// falling back to the status line.
pub(super) async fn error_message(response: Response, status: StatusCode) -> String {
    if let Ok(body) = response.json::<Value>().await {
        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    status.to_string()
}
