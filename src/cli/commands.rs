//! CLI command definitions and dispatch.
//!
//! Each subcommand is handled by a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`.

use clap::{Parser, Subcommand};

use crate::aggregator::MusicAggregator;
use crate::history::HistoryStore;
use crate::model::SearchKind;

mod browse;
mod detail;
mod history;
mod render;
mod search;

/// Multi-source music search, browse, and history
#[derive(Parser)]
#[command(name = "fonos", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search tracks, artists, albums, and playlists
    Search {
        query: String,
        /// Which categories to search
        #[arg(long, value_enum, default_value = "all")]
        kind: SearchKind,
        /// Maximum results (split across categories for `all`)
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Print raw JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Exact artist/title lookup
    Find {
        artist: String,
        title: String,
        #[arg(long)]
        json: bool,
    },
    /// Composed home feed
    Home {
        #[arg(long)]
        json: bool,
    },
    /// Current chart tracks
    Charts {
        #[arg(long, default_value_t = 20)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// New album releases
    Releases {
        #[arg(long, default_value_t = 12)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// List browsable genres
    Genres,
    /// Playlists for a genre
    Genre {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Search radio stations
    Stations {
        query: String,
        #[arg(long, default_value_t = 20)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Track detail
    Track {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Artist detail with top tracks and albums
    Artist {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Album detail with track listing
    Album {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Playlist detail with track listing (use `liked-songs` for your library)
    Playlist {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Lyrics for a track
    Lyrics { id: String },
    /// Record a play in the listening history
    Play { id: String },
    /// Save a track to your library
    Save { id: String },
    /// Remove a track from your library
    Unsave { id: String },
    /// List saved tracks
    Saved {
        #[arg(long)]
        json: bool,
    },
    /// Listening history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Show recent plays, newest first
    List {
        #[arg(long, default_value_t = 50)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Wipe the listening history
    Clear,
}

/// Run the parsed subcommand.
pub async fn run_command(
    command: Commands,
    aggregator: &MusicAggregator,
    store: &HistoryStore,
) -> anyhow::Result<()> {
    match command {
        Commands::Search {
            query,
            kind,
            limit,
            json,
        } => search::cmd_search(aggregator, &query, kind, limit, json).await,
        Commands::Find {
            artist,
            title,
            json,
        } => search::cmd_find(aggregator, &artist, &title, json).await,
        Commands::Home { json } => browse::cmd_home(aggregator, json).await,
        Commands::Charts { limit, json } => browse::cmd_charts(aggregator, limit, json).await,
        Commands::Releases { limit, json } => browse::cmd_releases(aggregator, limit, json).await,
        Commands::Genres => browse::cmd_genres(),
        Commands::Genre { id, json } => browse::cmd_genre(aggregator, &id, json).await,
        Commands::Stations { query, limit, json } => {
            browse::cmd_stations(aggregator, &query, limit, json).await
        }
        Commands::Track { id, json } => detail::cmd_track(aggregator, &id, json).await,
        Commands::Artist { id, json } => detail::cmd_artist(aggregator, &id, json).await,
        Commands::Album { id, json } => detail::cmd_album(aggregator, &id, json).await,
        Commands::Playlist { id, json } => detail::cmd_playlist(aggregator, &id, json).await,
        Commands::Lyrics { id } => detail::cmd_lyrics(aggregator, &id).await,
        Commands::Play { id } => history::cmd_play(aggregator, store, &id).await,
        Commands::Save { id } => history::cmd_save(aggregator, store, &id).await,
        Commands::Unsave { id } => history::cmd_unsave(store, &id),
        Commands::Saved { json } => history::cmd_saved(store, json),
        Commands::History { action } => match action {
            HistoryAction::List { limit, json } => history::cmd_history_list(store, limit, json),
            HistoryAction::Clear => history::cmd_history_clear(store),
        },
    }
}
