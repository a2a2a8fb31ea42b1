//! Spotify Web API Client Library
//!
//! A thin, blocking client for the Spotify Web API. It authenticates with the
//! OAuth 2.0 client-credentials flow, caches the resulting access token until
//! shortly before it expires, and exposes one wrapper per endpoint that returns
//! the raw JSON body.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `client` - [`SpotifyClient`], the wrappers bundled with a token cache
//! - `config` - Credentials, endpoint URLs and `.env` loading
//! - `error` - The [`SpotifyError`] type
//! - `management` - Token caching
//! - `spotify` - Spotify Web API request wrappers
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotify_webapi::{SpotifyClient, config};
//!
//! fn main() -> spotify_webapi::Res<()> {
//!     config::load_env()?;
//!     let mut client = SpotifyClient::from_env()?;
//!     let playlists = client.search_playlist("rock nacional")?;
//!     println!("{}", playlists["playlists"]["total"]);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use client::SpotifyClient;
pub use error::SpotifyError;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation of the library reports a [`SpotifyError`], so
/// callers can match on the failure instead of inspecting strings.
///
/// # Example
///
/// ```
/// use spotify_webapi::Res;
///
/// fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, SpotifyError>;

/// Prints an informational message with a blue bullet point to stderr.
///
/// Status output goes to stderr so that JSON written to stdout stays
/// machine-readable.
///
/// # Example
///
/// ```
/// info!("Searching for {}...", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark to stderr.
///
/// # Example
///
/// ```
/// success!("Token valid for {} seconds", token.expires_in);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Reserved for
/// the binary; library code returns [`SpotifyError`] instead.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// # Example
///
/// ```
/// warning!("Rate limited, retry after {} seconds", secs);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
