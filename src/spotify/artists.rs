use serde_json::Value;

use crate::{Res, spotify::Api, utils};

/// Market used for top tracks when none is given.
pub const DEFAULT_MARKET: &str = "AR";

/// Retrieves the albums of an artist.
///
/// Uses `GET /artists/{id}/albums` without filters, so every album group the
/// API returns by default is included. Only the first page (20 items) comes
/// back; follow `next` in the response for more.
///
/// # Arguments
///
/// * `api` - Web API handle
/// * `token` - Valid access token
/// * `artist_id` - Spotify ID of the artist
///
/// # Returns
///
/// The paging object with the albums under `items`.
///
/// # Errors
///
/// [`crate::error::SpotifyError::EmptyInput`] for a blank id; unknown ids come
/// back from Spotify as [`crate::error::SpotifyError::Api`].
///
/// # Example
///
/// ```
/// let albums = get_artist_albums(&api, token, "1QOmebWGB6FdFtW7Bo3F0W")?;
/// println!("{} albums", albums["total"]);
/// ```
pub fn get_artist_albums(api: &Api, token: &str, artist_id: &str) -> Res<Value> {
    let artist_id = utils::require_non_empty("artist_id", artist_id)?;
    api.get_json(token, &["artists", artist_id, "albums"], &[])
}

/// Retrieves an artist's top tracks in [`DEFAULT_MARKET`].
///
/// # Returns
///
/// An object with the tracks under `tracks`.
pub fn get_artist_top_tracks(api: &Api, token: &str, artist_id: &str) -> Res<Value> {
    get_artist_top_tracks_in_market(api, token, artist_id, DEFAULT_MARKET)
}

/// Retrieves an artist's top tracks for an ISO 3166-1 alpha-2 market.
pub fn get_artist_top_tracks_in_market(
    api: &Api,
    token: &str,
    artist_id: &str,
    market: &str,
) -> Res<Value> {
    let artist_id = utils::require_non_empty("artist_id", artist_id)?;
    let market = utils::require_non_empty("market", market)?;
    api.get_json(
        token,
        &["artists", artist_id, "top-tracks"],
        &[("country", market)],
    )
}

pub fn get_artist_related_artists(api: &Api, token: &str, artist_id: &str) -> Res<Value> {
    let artist_id = utils::require_non_empty("artist_id", artist_id)?;
    api.get_json(token, &["artists", artist_id, "related-artists"], &[])
}
