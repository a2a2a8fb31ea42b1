use reqwest::{blocking::Client, header::AUTHORIZATION};

use crate::{
    Res,
    config::Credentials,
    error::SpotifyError,
    spotify::error_message,
    types::{DEFAULT_EXPIRES_IN_SECS, Token, TokenResponse},
    utils,
};

/// Exchanges client credentials for an application access token.
///
/// Implements the OAuth 2.0 client-credentials grant: the client id and secret
/// are joined as `id:secret`, base64-encoded once and sent as a Basic
/// `Authorization` header together with the form body
/// `grant_type=client_credentials`.
///
/// # Arguments
///
/// * `http` - Blocking HTTP client used for the request
/// * `token_url` - Token endpoint, normally `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id and secret of the registered application
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with its lifetime and the time it was obtained
/// - `Err(SpotifyError)` - See below
///
/// # Errors
///
/// - [`SpotifyError::Auth`] if the endpoint answers with a non-2xx status,
///   typically `400 invalid_client` for wrong credentials
/// - [`SpotifyError::MissingAccessToken`] if a 2xx body has no access token
/// - [`SpotifyError::Http`] for network or decoding failures
///
/// # Token Contents
///
/// Client-credentials tokens carry no refresh token and no user scope. When
/// `expires_in` is absent a lifetime of one hour is assumed.
///
/// # Example
///
/// ```
/// let credentials = Credentials::new("client-id", "client-secret");
/// let token = request_token(&Client::new(), SPOTIFY_API_TOKEN_URL, &credentials)?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub fn request_token(http: &Client, token_url: &str, credentials: &Credentials) -> Res<Token> {
    log::debug!("requesting client-credentials token from {token_url}");

    let res = http
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().unwrap_or_default();
        return Err(SpotifyError::Auth {
            status,
            message: error_message(status, &body),
        });
    }

    let json: TokenResponse = res.json()?;
    let access_token = json
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(SpotifyError::MissingAccessToken)?;

    Ok(Token {
        access_token,
        token_type: json.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: json.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS),
        obtained_at: utils::now_timestamp(),
    })
}

/// Fetches a fresh bearer token string. One network call per invocation; use
/// [`crate::management::TokenManager`] to reuse tokens across calls.
///
/// # Errors
///
/// Same as [`request_token`].
pub fn get_token(http: &Client, token_url: &str, credentials: &Credentials) -> Res<String> {
    request_token(http, token_url, credentials).map(|t| t.access_token)
}
