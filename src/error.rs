//! Error kinds surfaced by the session and data-synchronization core.
//!
//! Authentication-affecting kinds (`CodeExchangeFailed`, `Unauthorized`)
//! always resolve through `SessionManager::logout`, so session invalidation
//! has exactly one canonical place. The other kinds are informational and
//! leave session state untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend did not answer the liveness probe. Informational only.
    #[error("backend unreachable: {0}")]
    BackendUnreachable(String),

    /// The authorize URL could not be obtained from the backend.
    #[error("login failed: {0}")]
    LoginInitiationFailed(String),

    /// The authorization code was rejected, or the exchange call failed.
    #[error("authentication error: {0}")]
    CodeExchangeFailed(String),

    /// An authorized call was rejected; the stored token is no longer valid.
    #[error("session expired")]
    Unauthorized,

    /// A data read failed for a non-authentication reason.
    #[error("failed to load data: {0}")]
    FetchFailed(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
