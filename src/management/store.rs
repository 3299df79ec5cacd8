use std::path::PathBuf;

use thiserror::Error;

use crate::types::Token;

/// Well-known key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Well-known key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

const SESSION_KEYS: [&str; 2] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable key/value store for the persisted session.
///
/// Exactly two string keys belong to this core: [`ACCESS_TOKEN_KEY`] and
/// [`REFRESH_TOKEN_KEY`]. Values are written to individual files under the
/// platform local data directory so a session survives process restarts.
/// Writers are the session manager and the code exchanger only; every other
/// component reads the in-memory token exposed by the session manager.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new() -> Self {
        let mut root = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("tunescope/session");
        Self { root }
    }

    /// Store rooted at an explicit directory. Used by tests.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        async_fs::read_to_string(self.root.join(key)).await.ok()
    }

    pub async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        async_fs::create_dir_all(&self.root).await?;
        async_fs::write(self.root.join(key), value).await?;
        Ok(())
    }

    /// Removes a key. Missing keys are not an error, so clearing a session
    /// that was never persisted stays idempotent.
    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match async_fs::remove_file(self.root.join(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes every key belonging to the persisted session.
    pub async fn clear(&self) -> Result<(), StoreError> {
        for key in SESSION_KEYS {
            self.remove(key).await?;
        }
        Ok(())
    }

    /// Reads the persisted session back as a token, if one is stored.
    pub async fn load_token(&self) -> Option<Token> {
        let access_token = self.get(ACCESS_TOKEN_KEY).await?;
        if access_token.is_empty() {
            return None;
        }
        let refresh_token = self.get(REFRESH_TOKEN_KEY).await;
        Some(Token {
            access_token,
            refresh_token,
        })
    }

    /// Persists both session keys. Written on successful login or code
    /// exchange; cleared on logout or any unauthorized response.
    pub async fn save_token(&self, token: &Token) -> Result<(), StoreError> {
        self.put(ACCESS_TOKEN_KEY, &token.access_token).await?;
        match &token.refresh_token {
            Some(refresh) => self.put(REFRESH_TOKEN_KEY, refresh).await?,
            None => self.remove(REFRESH_TOKEN_KEY).await?,
        }
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
