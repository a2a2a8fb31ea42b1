//! Error type shared by every operation of the crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between loading credentials and decoding a
/// Spotify response.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// A required configuration key is unset or empty.
    #[error("missing configuration value `{0}`")]
    MissingConfig(&'static str),

    /// An identifier or query was empty and the request was not sent.
    #[error("`{0}` must not be empty")]
    EmptyInput(&'static str),

    /// A configured base URL cannot carry path segments.
    #[error("invalid base url `{0}`")]
    InvalidUrl(String),

    /// The token endpoint rejected the client credentials.
    #[error("authentication failed ({status}): {message}")]
    Auth { status: StatusCode, message: String },

    /// The token endpoint answered 2xx but without a usable access token.
    #[error("token response did not contain an access token")]
    MissingAccessToken,

    /// HTTP 429; surfaced to the caller, never retried.
    #[error("rate limited by Spotify (retry after {retry_after:?} seconds)")]
    RateLimited { retry_after: Option<u64> },

    /// Any other non-2xx answer from the Web API.
    #[error("Spotify API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("cannot load environment: {0}")]
    Env(#[from] dotenv::Error),
}

impl SpotifyError {
    /// HTTP status attached to the error, if the remote side produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SpotifyError::Auth { status, .. } | SpotifyError::Api { status, .. } => Some(*status),
            SpotifyError::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            SpotifyError::Http(e) => e.status(),
            _ => None,
        }
    }
}
