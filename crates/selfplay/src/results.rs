//! Game records and match results, stored as JSON

use std::path::Path;

use othello_core::{Move, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfPlayError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a game ended before both sides ran out of moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum Forfeit {
    Timeout { side: Side },
    IllegalMove { side: Side, detail: String },
}

impl Forfeit {
    pub fn side(&self) -> Side {
        match self {
            Forfeit::Timeout { side } | Forfeit::IllegalMove { side, .. } => *side,
        }
    }
}

/// One finished game, seen from the board's two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Engine that moved first
    pub first: String,
    /// Engine that moved second
    pub second: String,
    /// Every turn in order, passes included
    pub moves: Vec<Move>,
    pub first_discs: u32,
    pub second_discs: u32,
    pub winner: Option<Side>,
    pub forfeit: Option<Forfeit>,
    /// Clock time each side used, in milliseconds
    pub first_ms: u64,
    pub second_ms: u64,
}

impl GameRecord {
    /// Number of discs placed during the game.
    pub fn placements(&self) -> usize {
        self.moves.iter().filter(|mv| !mv.is_pass()).count()
    }
}

/// Results of a match from the point of view of the configured `first` engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            ..Self::default()
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score for engine1 (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Records a game in which engine1 played `engine1_side`.
    pub fn add_game(&mut self, record: GameRecord, engine1_side: Side) {
        match record.winner {
            Some(side) if side == engine1_side => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
        self.games.push(record);
    }

    pub fn save(&self, path: &Path) -> Result<(), SelfPlayError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} vs {} ===\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "{:<4} {:<20} {:<20} {:>6} {:>6}  {}\n",
            "#", "First", "Second", "X", "O", "Result"
        ));
        report.push_str(&"-".repeat(72));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let outcome = match (&game.forfeit, game.winner) {
                (Some(forfeit), _) => format!("{} forfeits", forfeit.side()),
                (None, Some(side)) => format!("{side} wins"),
                (None, None) => "draw".to_string(),
            };
            report.push_str(&format!(
                "{:<4} {:<20} {:<20} {:>6} {:>6}  {}\n",
                i + 1,
                game.first,
                game.second,
                game.first_discs,
                game.second_discs,
                outcome
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.wins,
            self.losses,
            self.draws,
            self.score() * 100.0
        ));
        report
    }
}
