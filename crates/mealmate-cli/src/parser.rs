//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface for the dish catalog.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "mealmate")]
#[command(about = "Keep track of restaurant dishes to try and the ones you've tried")]
#[command(version)]
pub struct Cli {
    /// Use this database file instead of the one under the data directory
    #[arg(long = "database", global = true, env = "MEALMATE_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Don't insert the sample menu into an empty catalog
    #[arg(long = "no-seed", global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
