//! Persisted win/loss/draw tally.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use crate::{GameMode, LedgerError, Outcome, Player};

/// Win/loss/draw counts.
///
/// Stored as one JSON object. Computer wins are written under `ai_wins`;
/// `computer_wins` is accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by a human.
    pub human_wins: u32,
    /// Games won by the search engine.
    #[serde(rename = "ai_wins", alias = "computer_wins")]
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Creates a tally from its three counters.
    pub fn new(human_wins: u32, computer_wins: u32, draws: u32) -> Self {
        Self {
            human_wins,
            computer_wins,
            draws,
        }
    }

    /// Total number of recorded games.
    pub fn total(&self) -> u32 {
        self.human_wins
            .saturating_add(self.computer_wins)
            .saturating_add(self.draws)
    }

    /// Formats the tally as a high-score table.
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Returns a copy with one counter incremented.
    fn with(mut self, entry: LedgerEntry) -> Result<Self, LedgerError> {
        let counter = match entry {
            LedgerEntry::HumanWin => &mut self.human_wins,
            LedgerEntry::ComputerWin => &mut self.computer_wins,
            LedgerEntry::Draw => &mut self.draws,
        };
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| LedgerError::new(format!("{} counter is at its maximum", entry)))?;
        Ok(self)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(40);
        writeln!(f, "{rule}")?;
        writeln!(f, "{:^40}", "HIGH SCORES")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "  Human Wins:     {:3}", self.human_wins)?;
        writeln!(f, "  Computer Wins:  {:3}", self.computer_wins)?;
        writeln!(f, "  Draws:          {:3}", self.draws)?;
        write!(f, "{rule}")
    }
}

/// Which counter a finished game increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LedgerEntry {
    /// A human won.
    #[strum(to_string = "human win")]
    HumanWin,
    /// The search engine won.
    #[strum(to_string = "computer win")]
    ComputerWin,
    /// Nobody won.
    #[strum(to_string = "draw")]
    Draw,
}

impl LedgerEntry {
    /// Attributes a game outcome to a counter.
    ///
    /// X is always human. O is the computer only in human-vs-computer play;
    /// an O win between two humans is a human win.
    pub fn attribute(mode: GameMode, outcome: Outcome) -> Self {
        match (outcome, mode) {
            (Outcome::Draw, _) => Self::Draw,
            (Outcome::Winner(Player::X), _) => Self::HumanWin,
            (Outcome::Winner(Player::O), GameMode::HumanVsHuman) => Self::HumanWin,
            (Outcome::Winner(Player::O), GameMode::HumanVsComputer) => Self::ComputerWin,
        }
    }
}

/// File-backed score tally.
///
/// Loaded once on [`ScoreLedger::open`]; each [`ScoreLedger::record`] writes
/// the whole tally to a temporary file beside the target and renames it into
/// place, so the file on disk is always either the old or the new tally.
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    path: PathBuf,
    tally: Tally,
}

impl ScoreLedger {
    /// Opens the ledger at `path`, starting from zero if it cannot be read.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let tally = Self::read(&path);
        info!(total = tally.total(), "Score ledger opened");
        Self { path, tally }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current in-memory tally.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Re-reads the tally from disk, or zero if no readable state exists.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&mut self) -> Tally {
        self.tally = Self::read(&self.path);
        self.tally
    }

    /// Increments one counter and persists the full tally.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the counter is already at `u32::MAX` or the
    /// file cannot be written. The in-memory tally and the previously persisted
    /// file are both left unchanged.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn record(&mut self, entry: LedgerEntry) -> Result<Tally, LedgerError> {
        let updated = self.tally.with(entry)?;
        self.write(&updated)?;
        self.tally = updated;
        info!(
            %entry,
            human_wins = updated.human_wins,
            computer_wins = updated.computer_wins,
            draws = updated.draws,
            "Tally recorded"
        );
        Ok(updated)
    }

    /// Formats the current tally.
    pub fn display(&self) -> String {
        self.tally.display()
    }

    fn read(path: &Path) -> Tally {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No ledger file, starting from zero");
                return Tally::default();
            }
            Err(e) => {
                warn!(error = %e, "Ledger unreadable, starting from zero");
                return Tally::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(tally) => tally,
            Err(e) => {
                warn!(error = %e, "Ledger corrupt, starting from zero");
                Tally::default()
            }
        }
    }

    fn write(&self, tally: &Tally) -> Result<(), LedgerError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, tally)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!("Ledger file replaced");
        Ok(())
    }
}
