//! # CLI Module
//!
//! User-facing commands on top of the session and data-sync core. Each
//! command is a thin view: it restores the session, delegates to the
//! management layer, and renders the result with tables and status lines.
//!
//! - [`auth`] - link the music account (authorize URL, browser, callback,
//!   one-shot code exchange with initial sync)
//! - [`logout`] - clear the persisted session; idempotent
//! - [`overview`] - full data sync and profile/tracks/artists/playlists view
//! - [`timeline`] - per-period listening statistics view
//! - [`status`] - backend reachability and session state, read-only
//!
//! Presentation conventions: spinners around network work, tables for lists,
//! and the crate's colored status macros for messages. The `error!` macro
//! terminates the process and is only used here, never in the library
//! layers, which return typed errors instead.

mod auth;
mod overview;
mod status;
mod timeline;

pub use auth::auth;
pub use auth::logout;
pub use overview::overview;
pub use status::status;
pub use timeline::timeline;
