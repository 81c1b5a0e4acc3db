//! CLI argument definitions using clap
//!
//! Commands:
//! - trivia init --config <path>
//! - trivia seed --config <path> [--file <seed.json>]
//! - trivia start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trivia - question, category and quiz API
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database tables
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./trivia.json")]
        config: PathBuf,
    },

    /// Load categories and questions into the database
    Seed {
        /// Path to configuration file
        #[arg(long, default_value = "./trivia.json")]
        config: PathBuf,

        /// Seed document; the bundled data set is used when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Start the HTTP API
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./trivia.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_with_file() {
        let cli = Cli::try_parse_from(["trivia", "seed", "--file", "data/seed.json"]).unwrap();
        match cli.command {
            Command::Seed { config, file } => {
                assert_eq!(config, PathBuf::from("./trivia.json"));
                assert_eq!(file, Some(PathBuf::from("data/seed.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_start_with_config() {
        let cli = Cli::try_parse_from(["trivia", "start", "--config", "/etc/trivia.json"]).unwrap();
        assert!(matches!(cli.command, Command::Start { .. }));
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["trivia"]).is_err());
    }
}
