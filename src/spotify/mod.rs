//! # Spotify Integration Module
//!
//! Request wrappers for the Spotify Web API and the client-credentials token
//! exchange. Every wrapper performs exactly one blocking HTTP request and hands
//! back the decoded JSON body untouched.
//!
//! ## Architecture
//!
//! ```text
//! SpotifyClient (token cache, input checks)
//!          ↓
//! Request wrappers
//!     ├── Authentication (client credentials)
//!     ├── Search (artists, playlists)
//!     ├── Artists (albums, top tracks, related artists)
//!     ├── Playlists (tracks)
//!     └── Current user (saved tracks, followed artists)
//!          ↓
//! HTTP Layer (reqwest::blocking, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /search` - Artist and playlist search
//! - `GET /artists/{id}/albums` - Artist's albums
//! - `GET /artists/{id}/top-tracks` - Artist's top tracks per market
//! - `GET /artists/{id}/related-artists` - Similar artists
//! - `GET /playlists/{id}/tracks` - Playlist items
//! - `GET /me/tracks/contains` - Saved-track check (user token)
//! - `GET /me/following` - Followed artists (user token)
//!
//! ## Pagination and Rate Limits
//!
//! Only the first page of paginated endpoints is returned. HTTP 429 is reported
//! as [`SpotifyError::RateLimited`] and never retried.
//!
//! ## Usage
//!
//! ```rust
//! use spotify_webapi::spotify::{self, Api};
//!
//! let api = Api::new(reqwest::blocking::Client::new(), spotify_webapi::config::SPOTIFY_API_URL);
//! let token = "BQC..."; // obtained via spotify::auth::request_token
//! let artists = spotify::search::search_artist(&api, token, "Soda Stereo")?;
//! println!("{}", artists["artists"]["items"][0]["name"]);
//! ```

pub mod artists;
pub mod auth;
pub mod me;
pub mod playlists;
pub mod search;

use reqwest::{
    StatusCode, Url,
    blocking::{Client, Response},
    header::RETRY_AFTER,
};
use serde_json::Value;

use crate::{
    Res,
    error::SpotifyError,
    types::{ApiErrorResponse, AuthErrorResponse},
};

/// HTTP client bound to a Web API base URL.
#[derive(Debug, Clone)]
pub struct Api {
    http: Client,
    base_url: String,
}

impl Api {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Res<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| SpotifyError::InvalidUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|()| SpotifyError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues one authenticated `GET` and decodes the JSON body.
    pub(crate) fn get_json(
        &self,
        token: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Res<Value> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()?;

        read_json(response)
    }
}

/// Turns a Web API response into its JSON body or a typed error.
pub(crate) fn read_json(response: Response) -> Res<Value> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<Value>()?);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        log::warn!("rate limited, retry after {retry_after:?}");
        return Err(SpotifyError::RateLimited { retry_after });
    }

    let body = response.text().unwrap_or_default();
    Err(SpotifyError::Api {
        status,
        message: error_message(status, &body),
    })
}

/// Extracts a human readable message from either error body shape Spotify
/// uses, falling back to the status reason phrase.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(api) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = api.error.message.filter(|m| !m.is_empty()) {
            return message;
        }
    }

    if let Ok(auth) = serde_json::from_str::<AuthErrorResponse>(body) {
        return auth.error_description.filter(|d| !d.is_empty()).unwrap_or(auth.error);
    }

    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
