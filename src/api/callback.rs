use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::{management::CodeExchanger, warning};

/// Receives the provider redirect carrying the authorization code and hands
/// it to the exchanger. The exchange, the token persist and the initial data
/// sync all complete before this handler answers, so the page the user sees
/// reflects the final outcome. Refreshing the callback URL re-delivers the
/// same code, which the exchanger treats as already handled.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(exchanger): Extension<Arc<CodeExchanger>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    match exchanger.exchange(code).await {
        Ok(()) => Html("<h2>Account linked.</h2><p>You can close this browser window.</p>"),
        Err(e) => {
            warning!("Code exchange failed: {}", e);
            Html("<h4>Login failed. Check the terminal for details.</h4>")
        }
    }
}
