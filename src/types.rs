use std::fmt;

use serde::{Deserialize, Serialize};

/// Seconds before the nominal expiry at which a token is treated as stale.
pub const TOKEN_EXPIRY_MARGIN_SECS: u64 = 240;

/// Lifetime assumed when the token endpoint omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn expires_at(&self) -> u64 {
        self.obtained_at.saturating_add(self.expires_in)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        now.saturating_add(TOKEN_EXPIRY_MARGIN_SECS) >= self.expires_at()
    }
}

/// Body of a successful `POST /api/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// Error body of the accounts service, e.g. `{"error": "invalid_client"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthErrorResponse {
    pub error: String,
    pub error_description: Option<String>,
}

/// Error body of the Web API: `{"error": {"status": 404, "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub status: Option<u16>,
    pub message: Option<String>,
}

/// Item type passed as `type` to `GET /search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Artist,
    Playlist,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Artist => "artist",
            SearchKind::Playlist => "playlist",
        }
    }

    /// Top-level key Spotify wraps the results of this kind in.
    pub fn result_key(&self) -> &'static str {
        match self {
            SearchKind::Artist => "artists",
            SearchKind::Playlist => "playlists",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
