//! Tic-tac-toe - terminal front-end
//!
//! Menu-driven play against a second human or the minimax engine.

#![warn(missing_docs)]

use std::io;

use anyhow::Result;
use clap::Parser;
use minimax_tictactoe::{Game, GameMode, ScoreLedger};
use tictactoe_cli::{Cli, CliConfig, Command, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::resolve(cli.config.as_deref())?.with_ledger_override(cli.ledger);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(ledger = %config.ledger_path().display(), "Starting tic-tac-toe");

    let ledger = ScoreLedger::open(config.ledger_path());
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let mut game = Game::new(GameMode::default(), ledger);
            terminal.run_menu(&mut game)
        }
        Command::Play { mode } => {
            let mut game = Game::new(mode.into(), ledger);
            terminal.run_game(&mut game).map(|_| ())
        }
        Command::Scores => {
            println!("{}", ledger.display());
            Ok(())
        }
    }
}
