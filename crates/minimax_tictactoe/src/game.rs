//! Turn sequencing and outcome resolution.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    Board, GameError, InvariantSet, LedgerEntry, Player, Position, ScoreLedger,
    TicTacToeInvariants, best_move,
};

/// Who plays the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[strum(to_string = "Human vs Human")]
    HumanVsHuman,
    /// A human plays X against the search engine.
    #[default]
    #[strum(to_string = "Human vs Computer")]
    HumanVsComputer,
}

impl GameMode {
    /// Where moves for `player` come from in this mode.
    pub fn source(self, player: Player) -> MoveSource {
        match (self, player) {
            (GameMode::HumanVsComputer, Player::O) => MoveSource::Search,
            _ => MoveSource::External,
        }
    }
}

/// Origin of a side's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSource {
    /// Supplied by the caller (a human).
    External,
    /// Computed by [`best_move`].
    Search,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for `Player` to move.
    AwaitingMove(Player),
    /// No further moves are accepted until reset.
    Finished(Outcome),
}

/// Tic-tac-toe game controller.
///
/// Owns the board for the current game and the score ledger for the process.
/// X always moves first. Each finished game is recorded in the ledger once.
#[derive(Debug)]
pub struct Game {
    board: Board,
    mode: GameMode,
    state: GameState,
    history: Vec<Position>,
    ledger: ScoreLedger,
}

impl Game {
    /// Starts a game in `mode`.
    #[instrument(skip(ledger))]
    pub fn new(mode: GameMode, ledger: ScoreLedger) -> Self {
        debug!(%mode, "Game created");
        Self {
            board: Board::new(),
            mode,
            state: GameState::AwaitingMove(Player::X),
            history: Vec::new(),
            ledger,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the controller state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Player to move, or `None` once finished.
    pub fn to_move(&self) -> Option<Player> {
        match self.state {
            GameState::AwaitingMove(player) => Some(player),
            GameState::Finished(_) => None,
        }
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Most recent move.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Returns the score ledger.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// True if the next move must come from [`Game::play_computer`].
    pub fn is_computer_turn(&self) -> bool {
        self.to_move()
            .is_some_and(|player| self.mode.source(player) == MoveSource::Search)
    }

    /// Applies an externally supplied move at position `number` (1-9).
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] after the game finished
    /// - [`GameError::NotExternalTurn`] when the engine owns the side to move
    /// - [`GameError::InvalidMove`] for an out-of-range or occupied position;
    ///   nothing changes and the caller may re-prompt
    /// - [`GameError::Ledger`] when the move ended the game but the tally could
    ///   not be saved; the game is finished regardless
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, number: usize) -> Result<GameState, GameError> {
        let player = self.awaiting()?;
        if self.mode.source(player) != MoveSource::External {
            return Err(GameError::NotExternalTurn);
        }

        let pos = self.board.place(number, player)?;
        self.after_move(player, pos)
    }

    /// Lets the search engine move for the side to move.
    ///
    /// Returns the chosen position. The resulting state is available from
    /// [`Game::state`].
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] after the game finished
    /// - [`GameError::NotComputerTurn`] when a human owns the side to move
    /// - [`GameError::Ledger`] as for [`Game::play`]
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play_computer(&mut self) -> Result<Position, GameError> {
        let player = self.awaiting()?;
        if self.mode.source(player) != MoveSource::Search {
            return Err(GameError::NotComputerTurn);
        }

        let pos = best_move(&self.board);
        self.board.place(pos.number(), player)?;
        self.after_move(player, pos)?;
        Ok(pos)
    }

    /// Starts a fresh game in the current mode.
    pub fn reset(&mut self) {
        self.start(self.mode);
    }

    /// Starts a fresh game in `mode`. The ledger is kept.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) {
        debug!(%mode, "Board cleared");
        self.board = Board::new();
        self.mode = mode;
        self.state = GameState::AwaitingMove(Player::X);
        self.history.clear();
    }

    fn awaiting(&self) -> Result<Player, GameError> {
        match self.state {
            GameState::AwaitingMove(player) => Ok(player),
            GameState::Finished(_) => Err(GameError::GameOver),
        }
    }

    fn after_move(&mut self, player: Player, pos: Position) -> Result<GameState, GameError> {
        self.history.push(pos);
        debug!(%player, position = pos.number(), "Move applied");

        if cfg!(debug_assertions)
            && let Err(violations) = TicTacToeInvariants::check_all(&self.board)
        {
            panic!("board invariants violated: {:?}", violations);
        }

        if !self.board.terminal() {
            self.state = GameState::AwaitingMove(player.opponent());
            return Ok(self.state);
        }

        let outcome = self
            .board
            .winner()
            .map_or(Outcome::Draw, Outcome::Winner);
        self.state = GameState::Finished(outcome);
        info!(%outcome, moves = self.history.len(), "Game finished");

        self.ledger.record(LedgerEntry::attribute(self.mode, outcome))?;
        Ok(self.state)
    }
}
