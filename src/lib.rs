//! TuneScope CLI Library
//!
//! This library implements the session and data-synchronization layer for a
//! linked music-service account: token lifecycle, backend reachability
//! probing, one-shot authorization-code exchange, persisted session state,
//! parallel data fetches merged into atomic snapshots, and forced re-login on
//! authorization expiry. The CLI commands on top of it are thin views.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `backend` - HTTP client for the TuneScope backend service
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds surfaced by the core
//! - `management` - Session state machine, token store, data aggregation
//! - `server` - Local HTTP server for OAuth callbacks
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tunescope::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> tunescope::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for CLI-level plumbing using a
/// boxed dynamic error trait object, maintaining Send + Sync bounds for async
/// contexts. Library modules return the typed errors from [`error`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro terminates the process with exit code 1 after printing. It is
/// reserved for the CLI layer; library code propagates errors instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice, such as an unreachable backend that does not block the session.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
