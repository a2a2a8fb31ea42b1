use reqwest::blocking::Client;

use crate::{Res, config::Credentials, spotify, types::Token, utils};

pub struct TokenManager {
    http: Client,
    token_url: String,
    credentials: Credentials,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(http: Client, token_url: impl Into<String>, credentials: Credentials) -> Self {
        TokenManager {
            http,
            token_url: token_url.into(),
            credentials,
            token: None,
        }
    }

    /// Returns the cached access token, requesting a new one only when none is
    /// cached or the cached one is about to expire.
    pub fn get_valid_token(&mut self) -> Res<String> {
        let now = utils::now_timestamp();
        if let Some(token) = self.token.as_ref().filter(|t| !t.is_expired_at(now)) {
            return Ok(token.access_token.clone());
        }

        log::debug!("access token missing or expired, requesting a new one");
        let token = spotify::auth::request_token(&self.http, &self.token_url, &self.credentials)?;
        let access_token = token.access_token.clone();
        self.token = Some(token);
        Ok(access_token)
    }

    pub fn invalidate(&mut self) {
        self.token = None;
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
