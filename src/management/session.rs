use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    backend::BackendClient,
    error::ApiError,
    management::store::{SessionStore, StoreError},
    types::{Token, UserSnapshot},
};

/// Authentication state. Exactly one value at any time, owned exclusively by
/// [`SessionManager`] and mutated only through its operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated(Token),
    Failed(String),
}

struct SessionInner {
    state: SessionState,
    snapshot: Option<UserSnapshot>,
    error: Option<String>,
}

/// Single source of truth for "is the user authenticated".
///
/// A cheap cloneable handle: the aggregator and the timeline fetcher receive
/// it and use its public operations, never the persisted store directly. The
/// in-memory token and the persisted session are kept in step by routing all
/// writes through here.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Mutex<SessionInner>>,
    store: SessionStore,
}

impl SessionManager {
    pub fn new(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                state: SessionState::Anonymous,
                snapshot: None,
                error: None,
            })),
            store,
        }
    }

    /// Builds a manager seeded from the persisted session.
    ///
    /// A stored access token yields `Authenticated` immediately, optimistic:
    /// the token is not revalidated until a call using it is rejected.
    pub async fn restore(store: SessionStore) -> Self {
        let manager = Self::new(store);
        if let Some(token) = manager.store.load_token().await {
            manager.inner.lock().await.state = SessionState::Authenticated(token);
        }
        manager
    }

    /// Starts a login and returns the authorize URL to navigate to.
    ///
    /// Requires `Anonymous` or `Failed`. Clears the persisted session and
    /// transitions to `Authenticating`; the caller performs the navigation.
    /// Failure to obtain the URL transitions to `Failed` with the
    /// backend-provided reason.
    pub async fn login(&self, client: &BackendClient) -> Result<String, ApiError> {
        {
            let mut inner = self.inner.lock().await;
            match inner.state {
                SessionState::Anonymous | SessionState::Failed(_) => {}
                _ => {
                    return Err(ApiError::LoginInitiationFailed(
                        "a session is already active, sign out first".to_string(),
                    ));
                }
            }
            inner.state = SessionState::Authenticating;
            inner.error = None;
        }

        if let Err(e) = self.store.clear().await {
            let reason = format!("cannot clear persisted session: {e}");
            self.set_failed(&reason).await;
            return Err(ApiError::LoginInitiationFailed(reason));
        }

        match client.login_url().await {
            Ok(url) => Ok(url),
            Err(e) => {
                self.set_failed(&e.to_string()).await;
                Err(e)
            }
        }
    }

    /// Unconditionally resets to `Anonymous`: persisted session cleared, user
    /// snapshot dropped. Idempotent and callable from any state; this is the
    /// one canonical place where a session is invalidated.
    pub async fn logout(&self) {
        let _ = self.store.clear().await;
        let mut inner = self.inner.lock().await;
        inner.state = SessionState::Anonymous;
        inner.snapshot = None;
    }

    pub async fn begin_authenticating(&self) {
        self.inner.lock().await.state = SessionState::Authenticating;
    }

    /// Persists the token and transitions to `Authenticated`.
    pub async fn set_authenticated(&self, token: Token) -> Result<(), StoreError> {
        self.store.save_token(&token).await?;
        self.inner.lock().await.state = SessionState::Authenticated(token);
        Ok(())
    }

    pub async fn set_failed(&self, reason: &str) {
        let mut inner = self.inner.lock().await;
        inner.state = SessionState::Failed(reason.to_string());
        inner.error = Some(reason.to_string());
    }

    /// Current access token, if authenticated. Read-only view for the data
    /// aggregator and the timeline fetcher.
    pub async fn token(&self) -> Option<String> {
        match &self.inner.lock().await.state {
            SessionState::Authenticated(token) => Some(token.access_token.clone()),
            _ => None,
        }
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// Atomically replaces the user snapshot and clears the current error.
    pub async fn replace_snapshot(&self, snapshot: UserSnapshot) {
        let mut inner = self.inner.lock().await;
        inner.snapshot = Some(snapshot);
        inner.error = None;
    }

    pub async fn snapshot(&self) -> Option<UserSnapshot> {
        self.inner.lock().await.snapshot.clone()
    }

    /// Sets the single current-error value; new errors replace old ones.
    pub async fn set_error(&self, message: &str) {
        self.inner.lock().await.error = Some(message.to_string());
    }

    pub async fn last_error(&self) -> Option<String> {
        self.inner.lock().await.error.clone()
    }
}
