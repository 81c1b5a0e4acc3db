//! CLI module for the trivia service
//!
//! Provides command-line interface for:
//! - init: Create the database tables
//! - seed: Load categories and questions
//! - start: Serve the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, seed, start};
pub use errors::{CliError, CliErrorCode, CliResult};
