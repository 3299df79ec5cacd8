use crate::{
    backend::client::{BackendClient, error_message},
    error::ApiError,
    types::{ExchangeResponse, LoginResponse, Token},
};

impl BackendClient {
    /// Requests the provider authorize URL that starts a login.
    ///
    /// On failure the backend-provided error message becomes the reason the
    /// session manager records in its `Failed` state.
    pub async fn login_url(&self) -> Result<String, ApiError> {
        let response = self
            .http
            .get(self.url("/login"))
            .send()
            .await
            .map_err(|e| ApiError::LoginInitiationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::LoginInitiationFailed(
                error_message(response, status).await,
            ));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::LoginInitiationFailed(e.to_string()))?;
        Ok(body.auth_url)
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// The code is single-use; the caller guards against re-entry. The
    /// response may carry `expires_in`, which is ignored: a token is assumed
    /// valid until a call using it is rejected.
    pub async fn exchange_code(&self, code: &str) -> Result<Token, ApiError> {
        let response = self
            .http
            .get(self.url("/callback"))
            .query(&[("code", code)])
            .send()
            .await
            .map_err(|e| ApiError::CodeExchangeFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::CodeExchangeFailed(
                error_message(response, status).await,
            ));
        }

        let body: ExchangeResponse = response
            .json()
            .await
            .map_err(|e| ApiError::CodeExchangeFailed(e.to_string()))?;

        if body.access_token.is_empty() {
            return Err(ApiError::CodeExchangeFailed(
                "backend returned an empty access token".to_string(),
            ));
        }

        Ok(Token {
            access_token: body.access_token,
            refresh_token: body.refresh_token.filter(|t| !t.is_empty()),
        })
    }
}
