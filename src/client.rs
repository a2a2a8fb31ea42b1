//! High-level client combining the request wrappers with a token cache.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::{
    Res,
    config::Config,
    management::TokenManager,
    spotify::{self, Api},
    types::{SearchKind, Token},
    utils,
};

/// Spotify Web API client authenticated through the client-credentials flow.
///
/// The access token is fetched lazily on the first request and reused until it
/// is about to expire. Inputs are validated before any network traffic, so an
/// empty identifier never costs a token request.
///
/// # Example
///
/// ```
/// use spotify_webapi::{SpotifyClient, config};
///
/// config::load_env()?;
/// let mut client = SpotifyClient::from_env()?;
/// let artists = client.search_artist("Charly Garcia")?;
/// let id = artists["artists"]["items"][0]["id"].as_str().unwrap_or_default();
/// let top = client.get_artist_top_tracks(id)?;
/// ```
pub struct SpotifyClient {
    api: Api,
    tokens: TokenManager,
}

impl SpotifyClient {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built (e.g. TLS backend unavailable).
    pub fn new(config: Config) -> Res<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api: Api::new(http.clone(), config.api_url),
            tokens: TokenManager::new(http, config.token_url, config.credentials),
        })
    }

    /// Builds a client from `SPOTIFY_API_CLIENT` / `SPOTIFY_API_SECRET` and the
    /// optional URL overrides.
    ///
    /// # Errors
    ///
    /// [`crate::error::SpotifyError::MissingConfig`] if a credential is unset.
    pub fn from_env() -> Res<Self> {
        Self::new(Config::from_env()?)
    }

    /// Web API handle for calling wrappers with a token of your own, such as a
    /// user token for the `/me` endpoints.
    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn access_token(&mut self) -> Res<String> {
        self.tokens.get_valid_token()
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.current_token()
    }

    /// Drops the cached token; the next request authenticates again.
    pub fn invalidate_token(&mut self) {
        self.tokens.invalidate();
    }

    pub fn search(&mut self, query: &str, kind: SearchKind) -> Res<Value> {
        utils::require_non_empty("query", query)?;
        let token = self.access_token()?;
        spotify::search::search(&self.api, &token, query, kind)
    }

    pub fn search_artist(&mut self, artist_name: &str) -> Res<Value> {
        self.search(artist_name, SearchKind::Artist)
    }

    pub fn search_playlist(&mut self, playlist_name: &str) -> Res<Value> {
        self.search(playlist_name, SearchKind::Playlist)
    }

    pub fn get_artist_albums(&mut self, artist_id: &str) -> Res<Value> {
        utils::require_non_empty("artist_id", artist_id)?;
        let token = self.access_token()?;
        spotify::artists::get_artist_albums(&self.api, &token, artist_id)
    }

    pub fn get_artist_top_tracks(&mut self, artist_id: &str) -> Res<Value> {
        self.get_artist_top_tracks_in_market(artist_id, spotify::artists::DEFAULT_MARKET)
    }

    pub fn get_artist_top_tracks_in_market(&mut self, artist_id: &str, market: &str) -> Res<Value> {
        utils::require_non_empty("artist_id", artist_id)?;
        utils::require_non_empty("market", market)?;
        let token = self.access_token()?;
        spotify::artists::get_artist_top_tracks_in_market(&self.api, &token, artist_id, market)
    }

    pub fn get_artist_related_artists(&mut self, artist_id: &str) -> Res<Value> {
        utils::require_non_empty("artist_id", artist_id)?;
        let token = self.access_token()?;
        spotify::artists::get_artist_related_artists(&self.api, &token, artist_id)
    }

    pub fn get_playlist_tracks(&mut self, playlist_id: &str) -> Res<Value> {
        utils::require_non_empty("playlist_id", playlist_id)?;
        let token = self.access_token()?;
        spotify::playlists::get_playlist_tracks(&self.api, &token, playlist_id)
    }

    /// Saved-track check with the client's own token. Spotify only accepts
    /// user tokens here; see [`SpotifyClient::api`].
    pub fn check_saved_tracks<S: AsRef<str>>(&mut self, track_ids: &[S]) -> Res<Value> {
        utils::join_ids("track_ids", track_ids)?;
        let token = self.access_token()?;
        spotify::me::check_saved_tracks(&self.api, &token, track_ids)
    }

    pub fn get_user_followed_artists(&mut self) -> Res<Value> {
        let token = self.access_token()?;
        spotify::me::get_user_followed_artists(&self.api, &token)
    }
}
