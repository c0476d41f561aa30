//! Configuration management for cots.
//!
//! Values are read from environment variables, optionally seeded from a
//! `.env` file in the local data directory. Every value has a default so the
//! tool works without any configuration:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

use crate::cue::DEFAULT_OFFSET_PER_TRACK_MS;

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_PLAY_URL: &str = "https://play.spotify.com";

/// Returns the local data directory of the application.
///
/// - Linux: `~/.local/share/cots`
/// - macOS: `~/Library/Application Support/cots`
/// - Windows: `%LOCALAPPDATA%/cots`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cots");
    path
}

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the data directory when it does not exist yet. A missing `.env`
/// file is not an error, the defaults apply in that case.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file exists but cannot be parsed.
///
/// # Example
///
/// ```
/// use cots::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
///
/// Trailing slashes are removed so paths can be appended directly.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the Spotify web player base URL (`SPOTIFY_PLAY_URL`).
pub fn spotify_playurl() -> String {
    env::var("SPOTIFY_PLAY_URL")
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_PLAY_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the url shown in the `REM CREATOR` line (`COTS_APP_URL`).
///
/// Empty unless configured.
pub fn app_url() -> String {
    env::var("COTS_APP_URL").unwrap_or_default()
}

/// Returns the offset added after every track of a CUE sheet (`COTS_OFFSET_PER_TRACK_MS`).
///
/// Unparsable values fall back to the default.
pub fn offset_per_track_ms() -> u64 {
    env::var("COTS_OFFSET_PER_TRACK_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_OFFSET_PER_TRACK_MS)
}

/// Returns the directory exported files are written to (`COTS_DOWNLOAD_DIR`).
pub fn download_dir() -> PathBuf {
    env::var("COTS_DOWNLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
