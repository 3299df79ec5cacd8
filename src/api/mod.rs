//! # API Module
//!
//! HTTP endpoints for the short-lived local server that is up while a login
//! is in flight:
//!
//! - [`callback`] - receives the provider redirect with the authorization
//!   code and drives the one-shot exchange
//! - [`health`] - local liveness JSON, handy for checking that the redirect
//!   target is actually listening
//!
//! Built on [Axum](https://docs.rs/axum); the code exchanger is injected via
//! an `Extension` layer in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
