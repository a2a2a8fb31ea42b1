//! # CLI Module
//!
//! Command implementations behind the `spotify-webapi` binary. Each command
//! builds a [`SpotifyClient`] from the environment, performs a single request
//! while a spinner runs on stderr, and prints the JSON response to stdout.
//!
//! ## Commands
//!
//! - [`token`] - Requests an application token and prints it
//! - [`search`] - Searches artists or playlists
//! - [`artist_albums`], [`artist_top_tracks`], [`artist_related`] - Artist lookups
//! - [`playlist_tracks`] - First page of a playlist's items
//! - [`saved_tracks`], [`followed_artists`] - Current-user endpoints
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotify-webapi search artist "Los Fabulosos Cadillacs"
//! spotify-webapi artist top-tracks 2x0F3QDoGBGCTX6Sbvbsf1 --market ES
//! spotify-webapi playlist tracks 37i9dQZF1DXcBWIGoYBM5M | jq '.items[].track.name'
//! spotify-webapi me following --token "$USER_TOKEN"
//! ```
//!
//! Errors are printed with the red `error!` marker and end the process with
//! exit code 1.

mod artists;
mod auth;
mod me;
mod playlist;
mod search;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::{Res, SpotifyClient, error, error::SpotifyError, warning};

pub use artists::{artist_albums, artist_related, artist_top_tracks};
pub use auth::token;
pub use me::{followed_artists, saved_tracks};
pub use playlist::playlist_tracks;
pub use search::search;

fn connect() -> SpotifyClient {
    match SpotifyClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Runs one request behind a spinner and prints its JSON result.
fn fetch<F>(message: &str, request: F)
where
    F: FnOnce() -> Res<Value>,
{
    let pb = spinner(message);
    let result = request();
    pb.finish_and_clear();

    match result {
        Ok(value) => print_json(&value),
        Err(SpotifyError::RateLimited { retry_after }) => {
            warning!("Spotify is rate limiting this client.");
            match retry_after {
                Some(secs) => error!("Try again in {} seconds.", secs),
                None => error!("Try again later."),
            }
        }
        Err(e) => error!("Request failed. Err: {}", e),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot render response. Err: {}", e),
    }
}
