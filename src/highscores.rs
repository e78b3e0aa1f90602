//! High score leaderboard system
//!
//! Tracks the top 10 finished rounds. Ranked by fish caught; on a tie the
//! longer survival time wins. Storage is up to the host: the board only
//! converts to and from JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Fish caught
    pub score: u64,
    /// Round length (ms)
    pub elapsed_ms: u64,
    /// Seed the round was played with
    pub seed: u64,
}

impl HighScoreEntry {
    /// Whether a new result would rank above this entry
    fn is_beaten_by(&self, score: u64, elapsed_ms: u64) -> bool {
        (score, elapsed_ms) > (self.score, self.elapsed_ms)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Index a result would be inserted at, if it makes the board
    fn insertion_index(&self, score: u64, elapsed_ms: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let pos = self
            .entries
            .iter()
            .position(|e| e.is_beaten_by(score, elapsed_ms));
        match pos {
            Some(i) => Some(i),
            None if self.entries.len() < MAX_HIGH_SCORES => Some(self.entries.len()),
            None => None,
        }
    }

    /// Check if a result qualifies for the leaderboard
    pub fn qualifies(&self, score: u64, elapsed_ms: u64) -> bool {
        self.insertion_index(score, elapsed_ms).is_some()
    }

    /// Get the rank a result would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64, elapsed_ms: u64) -> Option<usize> {
        self.insertion_index(score, elapsed_ms).map(|i| i + 1)
    }

    /// Add a finished round to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, elapsed_ms: u64, seed: u64) -> Option<usize> {
        let index = self.insertion_index(score, elapsed_ms)?;
        self.entries.insert(
            index,
            HighScoreEntry {
                score,
                elapsed_ms,
                seed,
            },
        );

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!("New high score #{}: {} fish", index + 1, score);

        Some(index + 1)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut scores: HighScores = serde_json::from_str(json)?;
        // Tolerate hand-edited or older boards
        scores
            .entries
            .sort_by(|a, b| b.score.cmp(&a.score).then(b.elapsed_ms.cmp(&a.elapsed_ms)));
        scores.entries.truncate(MAX_HIGH_SCORES);
        Ok(scores)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
