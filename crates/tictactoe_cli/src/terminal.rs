//! Text menu and prompt loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use derive_new::new;
use minimax_tictactoe::{Game, GameError, GameMode, GameState, Outcome, Player};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Line-oriented front-end over any reader and writer.
///
/// Input ending (EOF) is treated as the player leaving: the current game or
/// menu returns without error.
#[derive(Debug, new)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Consumes the terminal, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the player exits.
    #[instrument(skip_all)]
    pub fn run_menu(&mut self, game: &mut Game) -> Result<()> {
        let modes: Vec<GameMode> = GameMode::iter().collect();
        let scores_choice = modes.len() + 1;
        let exit_choice = modes.len() + 2;

        loop {
            self.show_menu(&modes)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };

            match line.parse::<usize>() {
                Ok(n) if (1..=modes.len()).contains(&n) => {
                    game.start(modes[n - 1]);
                    self.run_game(game)?;
                }
                Ok(n) if n == scores_choice => {
                    writeln!(self.output, "\n{}\n", game.ledger().display())?;
                }
                Ok(n) if n == exit_choice => {
                    writeln!(self.output, "Thanks for playing! Goodbye.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    /// Plays the current game to the end.
    ///
    /// Returns the outcome, or `None` if input ran out first.
    #[instrument(skip_all, fields(mode = %game.mode()))]
    pub fn run_game(&mut self, game: &mut Game) -> Result<Option<Outcome>> {
        info!(mode = %game.mode(), "Game started");
        writeln!(self.output, "\n{}\n", game.board())?;

        loop {
            let player = match game.state() {
                GameState::Finished(outcome) => {
                    self.announce(outcome)?;
                    return Ok(Some(outcome));
                }
                GameState::AwaitingMove(player) => player,
            };

            let computer_turn = game.is_computer_turn();
            let result = if computer_turn {
                game.play_computer().map(|pos| {
                    debug!(position = pos.number(), "Computer moved");
                })
            } else {
                let Some(number) = self.read_move(player)? else {
                    return Ok(None);
                };
                game.play(number).map(|_| ())
            };

            let saved = match result {
                Ok(()) => true,
                Err(GameError::InvalidMove(e)) => {
                    writeln!(self.output, "Invalid move! {}.", e)?;
                    continue;
                }
                Err(GameError::Ledger(e)) => {
                    warn!(error = %e, "Score not saved");
                    false
                }
                Err(e) => return Err(e.into()),
            };

            // A ledger failure still leaves the move on the board.
            if computer_turn && let Some(pos) = game.last_move() {
                writeln!(self.output, "Computer plays position {}.", pos.number())?;
            }
            if !saved {
                writeln!(self.output, "Warning: the score could not be saved.")?;
            }

            writeln!(self.output, "\n{}\n", game.board())?;
        }
    }

    /// Prompts until a line parses as a number, or input ends.
    fn read_move(&mut self, player: Player) -> Result<Option<usize>> {
        loop {
            let prompt = format!("Player {}, enter position (1-9): ", player);
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => writeln!(self.output, "Invalid input! Enter a number 1-9.")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show_menu(&mut self, modes: &[GameMode]) -> Result<()> {
        let rule = "=".repeat(40);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{:^40}", "TIC-TAC-TOE")?;
        writeln!(self.output, "{rule}")?;
        for (i, mode) in modes.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, mode)?;
        }
        writeln!(self.output, "  [{}] View High Scores", modes.len() + 1)?;
        writeln!(self.output, "  [{}] Exit", modes.len() + 2)?;
        writeln!(self.output, "{rule}\n")?;
        Ok(())
    }

    fn announce(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Winner(player) => writeln!(self.output, "Player {} wins!", player)?,
            Outcome::Draw => writeln!(self.output, "It's a draw!")?,
        }
        Ok(())
    }
}
