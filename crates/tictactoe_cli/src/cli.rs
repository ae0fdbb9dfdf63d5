//! Command-line interface for the tic-tac-toe front-end.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use minimax_tictactoe::GameMode;

/// Tic-tac-toe against an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Score file location, overriding the config file
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the main menu
    Menu,

    /// Play a single game and exit
    Play {
        /// Who plays the O side
        #[arg(short, long, value_enum, default_value_t = ModeArg::Hvc)]
        mode: ModeArg,
    },

    /// Print the high-score table and exit
    Scores,
}

/// Game mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Human vs human
    Hvh,
    /// Human vs computer
    Hvc,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Hvh => GameMode::HumanVsHuman,
            ModeArg::Hvc => GameMode::HumanVsComputer,
        }
    }
}
