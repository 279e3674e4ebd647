//! Timeline - tic-tac-toe with time travel in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use timeline::{render, Cli, Command, Repl, SessionConfig, SessionView};
use timeline_tictactoe::{GameHistory, SortOrder};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = SessionConfig::load_or_default(&cli.config)?;
    if cli.descending {
        config = config.with_sort_order(SortOrder::Descending);
    }
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level.clone());
    }

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    info!(config = %cli.config.display(), "Starting timeline");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive(&config),
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_interactive(config: &SessionConfig) -> Result<()> {
    let mut repl = Repl::new(config);
    repl.run(io::stdin().lock(), io::stdout().lock())
}

/// Replay a fixed move sequence and print the final state
#[instrument(skip(config))]
fn run_replay(
    config: &SessionConfig,
    moves: &[usize],
    jump: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut game = GameHistory::with_sort_order(*config.sort_order());
    for (n, index) in moves.iter().enumerate() {
        game.play_move(*index)
            .with_context(|| format!("move {} (cell {}) rejected", n + 1, index))?;
    }
    if let Some(ply) = jump {
        game.jump_to(ply).context("jump rejected")?;
    }

    if json {
        let view = SessionView::capture(&game)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render::board(&game));
        println!("{}", render::status(&game));
        println!("{}", render::moves(&game)?);
    }
    Ok(())
}
