//! Command-line interface for timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "Tic-tac-toe with a branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the session config (optional; defaults apply when missing)
    #[arg(short, long, default_value = "timeline.toml")]
    pub config: PathBuf,

    /// Start with the move list newest-first
    #[arg(long)]
    pub descending: bool,

    /// Log filter when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Subcommand to run (defaults to an interactive game)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Play a fixed sequence of cells and print the result
    Replay {
        /// Cell indices (0-8) in play order
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Jump to this ply after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the session as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_interactive() {
        let cli = Cli::parse_from(["timeline"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("timeline.toml"));
        assert!(!cli.descending);
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from([
            "timeline",
            "--descending",
            "replay",
            "4",
            "0",
            "--jump",
            "1",
            "--json",
        ]);
        assert!(cli.descending);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![4, 0],
                jump: Some(1),
                json: true
            })
        );
    }

    #[test]
    fn test_replay_needs_moves() {
        assert!(Cli::try_parse_from(["timeline", "replay"]).is_err());
    }
}
