use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;

use crate::{Res, error::SpotifyError};

/// `base64(client_id:client_secret)`, the value that follows `Basic ` in the
/// token request. Encoded exactly once.
pub fn encode_client_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{client_id}:{client_secret}"))
}

pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!("Basic {}", encode_client_credentials(client_id, client_secret))
}

pub fn require_non_empty<'a>(field: &'static str, value: &'a str) -> Res<&'a str> {
    if value.trim().is_empty() {
        return Err(SpotifyError::EmptyInput(field));
    }
    Ok(value)
}

/// Joins ids into the comma separated form Spotify expects, rejecting an empty
/// list as well as empty entries.
pub fn join_ids<S: AsRef<str>>(field: &'static str, ids: &[S]) -> Res<String> {
    if ids.is_empty() {
        return Err(SpotifyError::EmptyInput(field));
    }

    let mut parts = Vec::with_capacity(ids.len());
    for id in ids {
        parts.push(require_non_empty(field, id.as_ref())?.trim());
    }
    Ok(parts.join(","))
}

pub fn now_timestamp() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}
