//! Terminal front-end for minimax tic-tac-toe.
//!
//! Parses player input, renders the board as text and drives
//! [`minimax_tictactoe::Game`] from a menu.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

pub use cli::{Cli, Command, ModeArg};
pub use config::{CliConfig, ConfigError};
pub use terminal::Terminal;
