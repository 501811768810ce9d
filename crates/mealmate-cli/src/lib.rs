//! The `mealmate` command-line adapter.
//!
//! Wires the `SQLite` store into a catalog engine (see [`bootstrap`]) and
//! maps subcommands onto engine operations.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod emitter;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use emitter::LogEmitter;
pub use error::CliError;
pub use parser::Cli;
