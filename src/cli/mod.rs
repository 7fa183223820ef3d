//! Command-line interface for fonos.
//!
//! Thin presentation layer over the aggregator and the local store:
//! subcommands parse arguments, call one aggregator operation, and render
//! the outcome as text or JSON.

mod commands;

pub use commands::{Cli, Commands, run_command};
