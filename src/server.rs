use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, management::CodeExchanger};

/// Runs the local HTTP server that receives the provider redirect during a
/// login. The exchanger is shared into the callback route so re-entry with an
/// already-handled code stays a no-op.
pub async fn start_api_server(exchanger: Arc<CodeExchanger>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(exchanger)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
