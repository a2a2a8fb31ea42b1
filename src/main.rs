use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotify_webapi::{cli, config, error, spotify::artists::DEFAULT_MARKET, types::SearchKind};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Request an application access token
    Token,

    /// Search the Spotify catalog
    Search(SearchOptions),

    /// Look up an artist
    #[command(subcommand)]
    Artist(ArtistCommand),

    /// Look up a playlist
    #[command(subcommand)]
    Playlist(PlaylistCommand),

    /// Endpoints of the current user (need a user token)
    #[command(subcommand)]
    Me(MeCommand),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SearchType {
    Artist,
    Playlist,
}

impl From<SearchType> for SearchKind {
    fn from(t: SearchType) -> Self {
        match t {
            SearchType::Artist => SearchKind::Artist,
            SearchType::Playlist => SearchKind::Playlist,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// What to search for
    #[clap(value_enum)]
    pub kind: SearchType,

    /// Search query
    pub query: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArtistCommand {
    /// Albums of the artist
    Albums { id: String },

    /// Top tracks of the artist
    TopTracks {
        id: String,

        /// Market (ISO 3166-1 alpha-2 country code)
        #[clap(long, default_value = DEFAULT_MARKET)]
        market: String,
    },

    /// Artists related to the artist
    Related { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistCommand {
    /// First page of the playlist's tracks
    Tracks { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum MeCommand {
    /// Check whether tracks are saved in the user's library
    SavedTracks {
        #[clap(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// User access token
        #[clap(long, env = "SPOTIFY_USER_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Artists the user follows
    Following {
        /// User access token
        #[clap(long, env = "SPOTIFY_USER_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    env_logger::init();

    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Token => cli::token(),
        Command::Search(opt) => cli::search(opt.kind.into(), &opt.query),
        Command::Artist(cmd) => match cmd {
            ArtistCommand::Albums { id } => cli::artist_albums(&id),
            ArtistCommand::TopTracks { id, market } => cli::artist_top_tracks(&id, &market),
            ArtistCommand::Related { id } => cli::artist_related(&id),
        },
        Command::Playlist(PlaylistCommand::Tracks { id }) => cli::playlist_tracks(&id),
        Command::Me(cmd) => match cmd {
            MeCommand::SavedTracks { ids, token } => cli::saved_tracks(&ids, token.as_deref()),
            MeCommand::Following { token } => cli::followed_artists(token.as_deref()),
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
