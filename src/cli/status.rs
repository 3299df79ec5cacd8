use crate::{
    backend::BackendClient,
    info,
    management::{SessionManager, SessionState, SessionStore},
    success, warning,
};

/// Shows backend reachability and the current session state. Read-only.
pub async fn status() {
    let client = BackendClient::from_env();
    match client.ping().await {
        Ok(()) => success!("Backend reachable at {}", client.base_url()),
        Err(e) => warning!("{}", e),
    }

    let session = SessionManager::restore(SessionStore::new()).await;
    match session.state().await {
        SessionState::Authenticated(_) => success!("Session: authenticated"),
        SessionState::Anonymous => {
            info!("Session: not authenticated. Run tunescope auth to link your account.")
        }
        SessionState::Authenticating => info!("Session: authentication in progress"),
        SessionState::Failed(reason) => warning!("Session: failed ({})", reason),
    }
}
