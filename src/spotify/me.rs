//! Endpoints scoped to the current user.
//!
//! Both calls need a user access token (`user-library-read` and
//! `user-follow-read` scopes). An application token from the client-credentials
//! flow is rejected by Spotify and surfaces as an API error.

use serde_json::Value;

use crate::{Res, spotify::Api, utils};

/// Checks whether tracks are saved in the user's library.
///
/// # Arguments
///
/// * `api` - Web API handle
/// * `token` - User access token with `user-library-read`
/// * `track_ids` - Spotify track IDs, sent comma separated as `ids`
///
/// # Returns
///
/// A JSON array of booleans in the same order as `track_ids`.
///
/// # Errors
///
/// [`crate::error::SpotifyError::EmptyInput`] if the list or any id in it is
/// empty.
///
/// # Example
///
/// ```
/// let saved = check_saved_tracks(&api, user_token, &["7ouMYWpwJ422jRcDASZB7P"])?;
/// assert!(saved[0].is_boolean());
/// ```
pub fn check_saved_tracks<S: AsRef<str>>(api: &Api, token: &str, track_ids: &[S]) -> Res<Value> {
    let ids = utils::join_ids("track_ids", track_ids)?;
    api.get_json(token, &["me", "tracks", "contains"], &[("ids", ids.as_str())])
}

/// Retrieves the first page of artists the user follows, under `artists`.
pub fn get_user_followed_artists(api: &Api, token: &str) -> Res<Value> {
    api.get_json(token, &["me", "following"], &[("type", "artist")])
}
