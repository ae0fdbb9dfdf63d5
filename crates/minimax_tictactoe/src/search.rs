//! Exhaustive minimax search.
//!
//! The computer plays [`Player::O`] and maximizes; the human plays
//! [`Player::X`] and minimizes. Scores are depth-adjusted so the engine
//! prefers the fastest win and the slowest loss:
//!
//! | position           | score        |
//! |--------------------|--------------|
//! | computer has line  | `10 - depth` |
//! | human has line     | `depth - 10` |
//! | full board (draw)  | `0`          |
//!
//! No pruning is applied. The whole tree below an empty board has fewer than
//! 550 000 nodes.

use tracing::{debug, instrument};

use crate::{Board, LINES, Player, Position, Square};

const COMPUTER: Player = Player::O;
const HUMAN: Player = Player::X;
const WIN_SCORE: i32 = 10;

/// Scores a terminal board, or returns `None` if play continues.
///
/// A computer line is checked before a human line.
pub fn evaluate(board: &Board, depth: u32) -> Option<i32> {
    let depth = depth as i32;
    if has_line(board, COMPUTER) {
        Some(WIN_SCORE - depth)
    } else if has_line(board, HUMAN) {
        Some(depth - WIN_SCORE)
    } else if board.is_full() {
        Some(0)
    } else {
        None
    }
}

fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

/// Minimax value of `board` with `depth` plies already played.
///
/// `maximizing` is true when the computer is to move. Works on a private copy;
/// `board` is not touched.
pub fn search(board: &Board, depth: u32, maximizing: bool) -> i32 {
    Searcher::default().minimax(&mut board.clone(), depth, maximizing)
}

/// Best position for the computer on `board`.
///
/// Empty positions are tried in ascending order and only a strictly greater
/// score replaces the current choice, so the lowest-numbered optimal move is
/// returned.
///
/// # Panics
///
/// Panics if `board` is terminal.
#[instrument(skip(board), fields(empty = board.empty_positions().len()))]
pub fn best_move(board: &Board) -> Position {
    assert!(!board.terminal(), "best_move called on a terminal board");

    let mut searcher = Searcher::default();
    let mut work = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in work.empty_positions() {
        let score = {
            let mut probe = work.probe(pos, COMPUTER);
            searcher.minimax(probe.board_mut(), 0, false)
        };
        debug!(position = pos.number(), score, "Scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    // A non-terminal board always has an empty cell.
    let Some((pos, score)) = best else {
        unreachable!("non-terminal board without empty cells")
    };
    debug!(
        position = pos.number(),
        score,
        nodes = searcher.nodes,
        "Best move chosen"
    );
    pos
}

/// Recursion state for one search call.
#[derive(Debug, Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> i32 {
        self.nodes += 1;
        if let Some(score) = evaluate(board, depth) {
            return score;
        }

        let player = if maximizing { COMPUTER } else { HUMAN };
        let mut extremum = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.empty_positions() {
            let mut probe = board.probe(pos, player);
            let score = self.minimax(probe.board_mut(), depth + 1, !maximizing);
            extremum = if maximizing {
                extremum.max(score)
            } else {
                extremum.min(score)
            };
        }

        extremum
    }
}
