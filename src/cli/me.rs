use crate::{spotify, warning};

// The /me endpoints reject application tokens, so a user token is preferred.
fn warn_without_user_token(user_token: Option<&str>) {
    if user_token.is_none() {
        warning!("No --token given, using an application token. Spotify will likely reject it.");
    }
}

pub fn saved_tracks(track_ids: &[String], user_token: Option<&str>) {
    warn_without_user_token(user_token);
    let mut client = super::connect();
    super::fetch("Checking saved tracks...", || match user_token {
        Some(token) => spotify::me::check_saved_tracks(client.api(), token, track_ids),
        None => client.check_saved_tracks(track_ids),
    });
}

pub fn followed_artists(user_token: Option<&str>) {
    warn_without_user_token(user_token);
    let mut client = super::connect();
    super::fetch("Fetching followed artists...", || match user_token {
        Some(token) => spotify::me::get_user_followed_artists(client.api(), token),
        None => client.get_user_followed_artists(),
    });
}
