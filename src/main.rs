//! Fonos - multi-source music search, browse, and listening history.
//!
//! Aggregates several free music APIs behind one canonical data model:
//! search, home/charts feeds, detail lookups, radio stations, and a local
//! play history, all from the command line. Broken or unconfigured
//! sources degrade to fallback data instead of failing the command.

pub mod aggregator;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod sources;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use aggregator::MusicAggregator;
use history::HistoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("fonos=info".parse().unwrap()))
        .init();

    let config = config::load();
    let store = HistoryStore::new().context("could not determine a data directory")?;
    let aggregator = MusicAggregator::new(&config, store.clone());

    cli::run_command(args.command, &aggregator, &store).await
}
