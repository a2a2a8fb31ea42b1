use chrono::{DateTime, Utc};

use crate::{error, info, success};

pub fn token() {
    let mut client = super::connect();
    let pb = super::spinner("Requesting access token...");
    let result = client.access_token();
    pb.finish_and_clear();

    let access_token = match result {
        Ok(t) => t,
        Err(e) => error!("Authentication failed. Err: {}", e),
    };

    if let Some(token) = client.current_token() {
        info!("Token type: {}", token.token_type);
        let expires = i64::try_from(token.expires_at())
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
        match expires {
            Some(at) => success!("Token valid until {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
            None => success!("Token valid for {} seconds", token.expires_in),
        }
    }

    println!("{}", access_token);
}
