//! Configuration management for the Spotify Web API client.
//!
//! Credentials and endpoint URLs are read from environment variables, which may
//! be provided through `.env` files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`spotify-webapi/.env`)
//! 4. Built-in defaults for the endpoint URLs

use std::{env, fmt, path::PathBuf};

use crate::{Res, error::SpotifyError};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_CLIENT";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_SECRET";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";

pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from the `.env` files this client knows about.
///
/// The working directory file is tried first, then the one under the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/spotify-webapi/.env`
/// - macOS: `~/Library/Application Support/spotify-webapi/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-webapi/.env`
///
/// Variables already present in the process environment are never overwritten.
/// Missing files are skipped.
///
/// # Returns
///
/// The paths of the files that were actually loaded.
///
/// # Errors
///
/// Returns [`SpotifyError::Env`] if an existing `.env` file cannot be read or
/// parsed.
///
/// # Example
///
/// ```
/// use spotify_webapi::config;
///
/// if let Err(e) = config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Res<Vec<PathBuf>> {
    let mut loaded = Vec::new();
    for path in env_file_candidates() {
        if path.is_file() {
            dotenv::from_path(&path)?;
            log::debug!("loaded environment from {}", path.display());
            loaded.push(path);
        }
    }
    Ok(loaded)
}

fn env_file_candidates() -> Vec<PathBuf> {
    let mut data_env = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_env.push("spotify-webapi/.env");
    vec![PathBuf::from(".env"), data_env]
}

/// Client identifier and secret of a registered Spotify application.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_API_CLIENT` and `SPOTIFY_API_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::MissingConfig`] naming the first key that is
    /// unset or blank.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Credentials::from_env`] but over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            client_id: required(&lookup, CLIENT_ID_VAR)?,
            client_secret: required(&lookup, CLIENT_SECRET_VAR)?,
        })
    }
}

// The secret must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Everything the client needs: credentials plus the two endpoint roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
}

impl Config {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_url: SPOTIFY_API_URL.to_string(),
            token_url: SPOTIFY_API_TOKEN_URL.to_string(),
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// `SPOTIFY_API_URL` and `SPOTIFY_API_TOKEN_URL` are optional and fall back
    /// to the public Spotify endpoints. Call [`load_env`] first if `.env` files
    /// should be taken into account.
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::MissingConfig`] if a credential is missing.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup)?;
        let api_url = optional(&lookup, API_URL_VAR).unwrap_or_else(|| SPOTIFY_API_URL.to_string());
        let token_url =
            optional(&lookup, TOKEN_URL_VAR).unwrap_or_else(|| SPOTIFY_API_TOKEN_URL.to_string());

        Ok(Self {
            credentials,
            api_url,
            token_url,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Res<String>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or(SpotifyError::MissingConfig(key))
}
