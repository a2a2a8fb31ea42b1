use serde_json::Value;

use crate::{Res, spotify::Api, types::SearchKind, utils};

/// Searches the Spotify catalog for items of one kind.
///
/// # Arguments
///
/// * `api` - Web API handle
/// * `token` - Valid access token
/// * `query` - Free-text search query, passed as `q`
/// * `kind` - Item type, passed as `type`
///
/// # Returns
///
/// The raw search response. Results are wrapped in a top-level key matching
/// the kind (`artists` or `playlists`); only the first page is returned.
///
/// # Errors
///
/// [`crate::error::SpotifyError::EmptyInput`] for a blank query, otherwise
/// any HTTP or API error.
pub fn search(api: &Api, token: &str, query: &str, kind: SearchKind) -> Res<Value> {
    let query = utils::require_non_empty("query", query)?;
    api.get_json(token, &["search"], &[("q", query), ("type", kind.as_str())])
}

/// Searches for artists by name.
///
/// # Example
///
/// ```
/// let res = search_artist(&api, token, "Gustavo Cerati")?;
/// let first = &res["artists"]["items"][0];
/// println!("{} ({})", first["name"], first["id"]);
/// ```
pub fn search_artist(api: &Api, token: &str, artist_name: &str) -> Res<Value> {
    search(api, token, artist_name, SearchKind::Artist)
}

/// Searches for playlists by name. Results are under `playlists`.
pub fn search_playlist(api: &Api, token: &str, playlist_name: &str) -> Res<Value> {
    search(api, token, playlist_name, SearchKind::Playlist)
}
