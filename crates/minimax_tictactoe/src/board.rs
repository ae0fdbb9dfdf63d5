//! The 3x3 board and its move primitives.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{MoveError, Player, Position, Square, rules};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (index 0-8, position 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Returns all squares as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| s.player() == Some(player))
            .count()
    }

    /// True iff `number` is in `1..=9` and that cell is empty.
    pub fn is_legal(&self, number: usize) -> bool {
        Position::from_number(number).is_some_and(|pos| self.get(pos).is_empty())
    }

    /// Places `player`'s mark at the position numbered `number` (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::Occupied`] and leaves
    /// the board unchanged when the move is not legal.
    #[instrument(skip(self), level = "debug")]
    pub fn place(&mut self, number: usize, player: Player) -> Result<Position, MoveError> {
        let pos = Position::from_number(number).ok_or(MoveError::OutOfRange(number))?;
        if !self.get(pos).is_empty() {
            return Err(MoveError::Occupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(pos)
    }

    /// Clears a previously placed mark.
    ///
    /// Search-only primitive: no legality check is performed.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already empty.
    pub fn retract(&mut self, pos: Position) {
        assert!(
            !self.get(pos).is_empty(),
            "retract on empty cell {}",
            pos.number()
        );
        self.set(pos, Square::Empty);
    }

    /// Places a mark for the lifetime of the returned guard.
    ///
    /// The mark is retracted when the guard is dropped, whichever way the
    /// enclosing scope is left.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied.
    pub fn probe(&mut self, pos: Position, player: Player) -> Probe<'_> {
        assert!(
            self.get(pos).is_empty(),
            "probe on occupied cell {}",
            pos.number()
        );
        self.set(pos, Square::Occupied(player));
        Probe { board: self, pos }
    }

    /// Empty positions in ascending order, recomputed on every call.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_empty())
            .collect()
    }

    /// Returns the player owning a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True iff the game on this board is over (win or draw).
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Sets a square unconditionally.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with position numbers in empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in Position::ALL.chunks(3).enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .map(|&pos| match self.get(pos) {
                    Square::Empty => pos.number().to_string(),
                    Square::Occupied(player) => player.to_string(),
                })
                .collect();
            write!(f, " {} ", symbols.join(" | "))?;
            if row < 2 {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

/// A mark placed by [`Board::probe`], retracted on drop.
///
/// The guard gives read access to the board and can place further nested
/// marks with [`Probe::probe`]. It does not hand out `&mut Board`, so the
/// probed mark cannot be cleared while the guard is alive:
///
/// ```compile_fail
/// use minimax_tictactoe::{Board, Player, Position};
///
/// let mut board = Board::new();
/// let mut probe = board.probe(Position::Center, Player::O);
/// probe.retract(Position::Center);
/// ```
#[derive(Debug)]
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Probe<'_> {
    /// The probed position.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Places a nested mark, retracted before this one.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied.
    pub fn probe(&mut self, pos: Position, player: Player) -> Probe<'_> {
        self.board.probe(pos, player)
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.retract(self.pos);
    }
}
