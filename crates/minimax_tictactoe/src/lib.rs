//! Minimax tic-tac-toe engine.
//!
//! The crate is the game core only: it never reads from a terminal and never
//! decides how a board is drawn. Callers feed human moves in as integer
//! positions `1..=9` and read the board back for rendering.
//!
//! # Architecture
//!
//! - **Board**: nine cells, move legality, win/draw detection
//! - **Search**: exhaustive minimax producing the computer's best move
//! - **Game**: turn sequencing for human-vs-human and human-vs-computer play
//! - **Ledger**: persisted win/loss/draw tally
//!
//! # Example
//!
//! ```no_run
//! use minimax_tictactoe::{Game, GameMode, GameState, ScoreLedger};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = ScoreLedger::open("high_scores.json");
//! let mut game = Game::new(GameMode::HumanVsComputer, ledger);
//!
//! game.play(5)?;
//! let reply = game.play_computer()?;
//! println!("computer answered {}", reply.number());
//!
//! if let GameState::Finished(outcome) = game.state() {
//!     println!("{outcome}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod invariants;
mod ledger;
mod position;
mod rules;
mod search;
mod types;

pub use board::{Board, Probe};
pub use error::{GameError, LedgerError, MoveError};
pub use game::{Game, GameMode, GameState, MoveSource, Outcome};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, SingleWinnerInvariant,
    TicTacToeInvariants,
};
pub use ledger::{LedgerEntry, ScoreLedger, Tally};
pub use position::Position;
pub use rules::{LINES, check_winner, is_full, winning_line};
pub use search::{best_move, evaluate, search};
pub use types::{Player, Square};
