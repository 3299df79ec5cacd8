use std::collections::HashSet;

use tokio::sync::Mutex;

use crate::{
    backend::BackendClient,
    error::ApiError,
    management::{session::SessionManager, sync},
};

const AUTH_ERROR: &str = "authentication error";

/// Result of a completed exchange attempt, polled by the waiting CLI.
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeOutcome {
    /// Token stored and initial data sync committed.
    Completed,
    /// Token stored, but the initial data sync failed for a non-auth reason.
    SyncFailed(String),
    /// The exchange itself failed, or the fresh token was rejected; the
    /// session has been invalidated.
    Failed(String),
}

/// Exchanges an authorization code for an access token exactly once.
///
/// An authorization code is single-use from the backend's perspective, so
/// every code value is recorded in a seen-set before any network call;
/// re-entry with the same code (browser refresh of the callback URL,
/// duplicate delivery) is a no-op instead of a confusing failure. The
/// sequence on first delivery is strictly sequential: exchange, persist,
/// full data sync, record the outcome. The sync must finish before the
/// exchange counts as done.
pub struct CodeExchanger {
    client: BackendClient,
    session: SessionManager,
    seen: Mutex<HashSet<String>>,
    outcome: Mutex<Option<ExchangeOutcome>>,
}

impl CodeExchanger {
    pub fn new(client: BackendClient, session: SessionManager) -> Self {
        Self {
            client,
            session,
            seen: Mutex::new(HashSet::new()),
            outcome: Mutex::new(None),
        }
    }

    pub async fn exchange(&self, code: &str) -> Result<(), ApiError> {
        {
            // Claim the code before any suspension point so a concurrent
            // duplicate delivery collapses to a single exchange.
            let mut seen = self.seen.lock().await;
            if !seen.insert(code.to_string()) {
                return Ok(());
            }
        }

        self.session.begin_authenticating().await;

        let token = match self.client.exchange_code(code).await {
            Ok(token) => token,
            Err(e) => {
                self.session.set_failed(AUTH_ERROR).await;
                self.session.logout().await;
                self.record(ExchangeOutcome::Failed(e.to_string())).await;
                return Err(e);
            }
        };

        if let Err(e) = self.session.set_authenticated(token).await {
            let reason = format!("cannot persist session: {e}");
            self.session.set_failed(AUTH_ERROR).await;
            self.session.logout().await;
            self.record(ExchangeOutcome::Failed(reason.clone())).await;
            return Err(ApiError::CodeExchangeFailed(reason));
        }

        // The initial sync is part of the exchange; its failures follow the
        // aggregator rules (unauthorized has already invalidated the session
        // by the time it propagates here).
        match sync::sync_user_data(&self.client, &self.session).await {
            Ok(_) => {
                self.record(ExchangeOutcome::Completed).await;
                Ok(())
            }
            Err(e @ ApiError::Unauthorized) => {
                self.record(ExchangeOutcome::Failed(e.to_string())).await;
                Err(e)
            }
            Err(e) => {
                self.record(ExchangeOutcome::SyncFailed(e.to_string())).await;
                Err(e)
            }
        }
    }

    pub async fn outcome(&self) -> Option<ExchangeOutcome> {
        self.outcome.lock().await.clone()
    }

    async fn record(&self, outcome: ExchangeOutcome) {
        *self.outcome.lock().await = Some(outcome);
    }
}
