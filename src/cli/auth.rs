use std::{sync::Arc, time::Duration};

use crate::{
    backend::BackendClient,
    error,
    management::{CodeExchanger, ExchangeOutcome, SessionManager, SessionStore},
    server::start_api_server,
    success, warning,
};

/// Runs the account-linking flow.
///
/// Obtains the authorize URL through the session manager, starts the local
/// callback server, opens the system browser, and waits for the exchanger to
/// finish. The exchange includes the initial data sync, so by the time the
/// wait resolves the session is either fully usable or cleanly invalidated.
pub async fn auth() {
    let client = BackendClient::from_env();
    if let Err(e) = client.ping().await {
        warning!(
            "{}. Check that the backend is running at {}.",
            e,
            client.base_url()
        );
    }

    let session = SessionManager::restore(SessionStore::new()).await;
    let auth_url = match session.login(&client).await {
        Ok(url) => url,
        Err(e) => error!("{}", e),
    };

    let exchanger = Arc::new(CodeExchanger::new(client, session.clone()));
    let server_exchanger = Arc::clone(&exchanger);
    tokio::spawn(async move {
        start_api_server(server_exchanger).await;
    });

    // Full-page navigation hands control to the provider; the callback
    // server picks the flow back up when the browser returns with a code.
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        );
    }

    match wait_for_exchange(&exchanger).await {
        Some(ExchangeOutcome::Completed) => {
            let name = session
                .snapshot()
                .await
                .and_then(|snapshot| snapshot.profile.display_name);
            match name {
                Some(name) => success!("Authentication successful! Signed in as {}.", name),
                None => success!("Authentication successful!"),
            }
        }
        Some(ExchangeOutcome::SyncFailed(e)) => {
            warning!("Signed in, but the initial data sync failed: {}", e);
        }
        Some(ExchangeOutcome::Failed(e)) => error!("Authentication failed: {}", e),
        None => error!("Authentication failed or timed out."),
    }
}

/// Polls the exchanger for a recorded outcome with a bounded wait. Runs
/// concurrently with the callback handler that performs the exchange.
async fn wait_for_exchange(exchanger: &CodeExchanger) -> Option<ExchangeOutcome> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(120);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if let Some(outcome) = exchanger.outcome().await {
            return Some(outcome);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Clears the persisted session and the in-memory state. Callable from any
/// state; signing out twice is fine.
pub async fn logout() {
    let session = SessionManager::restore(SessionStore::new()).await;
    session.logout().await;
    success!("Signed out. Local session cleared.");
}
