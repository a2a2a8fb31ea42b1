use serde_json::Value;

use crate::{Res, spotify::Api, utils};

/// Retrieves the items of a playlist.
///
/// Returns the first page of `GET /playlists/{id}/tracks` (up to 100 items).
/// Each entry under `items` wraps the actual track in a `track` field.
///
/// # Errors
///
/// [`crate::error::SpotifyError::EmptyInput`] for a blank id, otherwise any
/// HTTP or API error.
pub fn get_playlist_tracks(api: &Api, token: &str, playlist_id: &str) -> Res<Value> {
    let playlist_id = utils::require_non_empty("playlist_id", playlist_id)?;
    api.get_json(token, &["playlists", playlist_id, "tracks"], &[])
}
