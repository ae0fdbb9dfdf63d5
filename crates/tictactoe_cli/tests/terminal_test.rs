//! Scripted sessions through the terminal front-end.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use minimax_tictactoe::{Game, GameMode, Outcome, Player, ScoreLedger, Tally};
use tempfile::TempDir;
use tictactoe_cli::Terminal;
use tracing::Level;

fn setup_game(mode: GameMode) -> (TempDir, Game) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let ledger = ScoreLedger::open(dir.path().join("scores.json"));
    (dir, Game::new(mode, ledger))
}

fn run_game(game: &mut Game, script: &str) -> (Option<Outcome>, String) {
    let mut terminal = Terminal::new(script.as_bytes(), Vec::new());
    let outcome = terminal.run_game(game).expect("Game failed");
    let output = String::from_utf8(terminal.into_output()).expect("UTF-8 output");
    (outcome, output)
}

fn run_menu(game: &mut Game, script: &str) -> String {
    let mut terminal = Terminal::new(script.as_bytes(), Vec::new());
    terminal.run_menu(game).expect("Menu failed");
    String::from_utf8(terminal.into_output()).expect("UTF-8 output")
}

#[test]
fn test_human_vs_human_game() {
    let (_dir, mut game) = setup_game(GameMode::HumanVsHuman);
    let (outcome, output) = run_game(&mut game, "1\n4\n2\n5\n3\n");

    assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
    assert!(output.contains("Player X wins!"));
    assert_eq!(game.ledger().tally(), Tally::new(1, 0, 0));
}

#[test]
fn test_computer_announces_moves_and_wins() {
    let (_dir, mut game) = setup_game(GameMode::HumanVsComputer);
    let (outcome, output) = run_game(&mut game, "1\n2\n4\n");

    assert_eq!(outcome, Some(Outcome::Winner(Player::O)));
    assert!(output.contains("Computer plays position 5."));
    assert!(output.contains("Computer plays position 3."));
    assert!(output.contains("Computer plays position 7."));
    assert!(output.contains("Player O wins!"));
    assert_eq!(game.ledger().tally(), Tally::new(0, 1, 0));
}

#[test]
fn test_final_computer_move_announced_when_score_not_saved() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let ledger = ScoreLedger::open(dir.path().join("missing").join("scores.json"));
    let mut game = Game::new(GameMode::HumanVsComputer, ledger);
    let (outcome, output) = run_game(&mut game, "1\n2\n4\n");

    assert_eq!(outcome, Some(Outcome::Winner(Player::O)));
    assert_eq!(output.matches("Computer plays position").count(), 3);
    assert!(output.contains("Computer plays position 7."));
    assert!(output.contains("Warning: the score could not be saved."));
    assert!(output.contains("Player O wins!"));
    assert_eq!(game.ledger().tally(), Tally::default());
}

#[test]
fn test_bad_input_reprompts() {
    let (_dir, mut game) = setup_game(GameMode::HumanVsHuman);
    let (outcome, output) = run_game(&mut game, "abc\n5\n5\n0\n1\n");

    assert_eq!(outcome, None);
    assert!(output.contains("Invalid input! Enter a number 1-9."));
    assert!(output.contains("Invalid move! Position 5 is already occupied."));
    assert!(output.contains("Invalid move! Position 0 is out of range (must be 1-9)."));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_input_ending_mid_game_returns_none() {
    let (_dir, mut game) = setup_game(GameMode::HumanVsHuman);
    let (outcome, _) = run_game(&mut game, "5\n");
    assert_eq!(outcome, None);
    assert_eq!(game.ledger().tally(), Tally::default());
}

#[test]
fn test_menu_scores_and_exit() {
    let (_dir, mut game) = setup_game(GameMode::HumanVsComputer);
    let output = run_menu(&mut game, "3\n4\n");

    assert!(output.contains("[1] Human vs Human"));
    assert!(output.contains("[2] Human vs Computer"));
    assert!(output.contains("HIGH SCORES"));
    assert!(output.contains("Goodbye"));
}

#[test]
fn test_menu_plays_game_then_shows_tally() {
    let (_dir, mut game) = setup_game(GameMode::HumanVsComputer);
    let output = run_menu(&mut game, "1\n1\n2\n3\n5\n4\n6\n8\n7\n9\n3\n9\n4\n");

    assert!(output.contains("It's a draw!"));
    assert!(output.contains("Invalid choice. Try again."));
    assert_eq!(game.mode(), GameMode::HumanVsHuman);
    assert_eq!(game.ledger().tally(), Tally::new(0, 0, 1));
    assert!(output.contains("Draws:            1"));
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("Log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("Log buffer poisoned").clone()).expect("UTF-8 logs")
    }
}

fn run_menu_logged(game: &mut Game, script: &str) -> String {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || run_menu(game, script));
    logs.contents()
}

#[test]
fn test_menu_logs_game_start_only_when_chosen() {
    let (_dir, mut game) = setup_game(GameMode::HumanVsComputer);
    let logs = run_menu_logged(&mut game, "3\n4\n");
    assert!(!logs.contains("Game started"));

    let logs = run_menu_logged(&mut game, "1\n1\n4\n2\n5\n3\n4\n");
    assert_eq!(logs.matches("Game started").count(), 1);
    assert!(logs.contains("Human vs Human"));
}
