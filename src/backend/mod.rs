//! # Backend Integration Module
//!
//! HTTP client for the TuneScope backend service, which fronts the upstream
//! music provider: it performs the provider-side OAuth dance, exchanges
//! authorization codes for access tokens, and serves pre-aggregated listening
//! data. This module owns all HTTP communication with it.
//!
//! ## Endpoints covered
//!
//! - `GET /ping` - liveness probe ([`BackendClient::ping`])
//! - `GET /login` - authorize URL for starting a login
//! - `GET /callback?code=...` - authorization-code exchange
//! - `GET /api/user/profile`, `/api/user/top-tracks`, `/api/user/top-artists`,
//!   `/api/user/playlists` - the four user-data reads
//! - `GET /api/music-timeline` - per-period listening statistics
//!
//! ## Authorization framing
//!
//! Authorized reads send the raw token value in the `Authorization` header
//! without a scheme prefix. This is the framing the backend validates; a
//! standard `Bearer` prefix would be rejected.
//!
//! ## Error mapping
//!
//! A 401 on any authorized read maps to `ApiError::Unauthorized` so the
//! session layer can force a re-login. Other failures surface the backend's
//! `{"error": message}` body when present. There are no automatic retries;
//! every retry is a fresh user-initiated action.

mod auth;
mod client;
mod timeline;
mod user;

pub use client::BackendClient;
