//! Configuration management for the TuneScope CLI.
//!
//! Configuration is read from environment variables, optionally seeded from a
//! `.env` file in the platform local data directory. The backend base URL is
//! fixed at configuration time; everything in the core that talks to the
//! backend goes through it.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if needed and loads `tunescope/.env` when
/// present. A missing file is not an error; the defaults below apply.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/tunescope/.env`
/// - macOS: `~/Library/Application Support/tunescope/.env`
/// - Windows: `%LOCALAPPDATA%/tunescope/.env`
pub async fn load_env() -> crate::Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunescope/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("Failed to load .env file: {e}"))?;
    }
    Ok(())
}

/// Returns the base URL of the TuneScope backend service.
///
/// Read from `TUNESCOPE_BACKEND_URL`; defaults to the local development
/// backend when unset.
pub fn backend_url() -> String {
    env::var("TUNESCOPE_BACKEND_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
}

/// Returns the bind address for the local OAuth callback server.
///
/// Read from `SERVER_ADDRESS`; must match the redirect URI registered with
/// the backend. Defaults to `127.0.0.1:8888`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8888".to_string())
}
