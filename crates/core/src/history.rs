// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Score history across games, and how it compares to the expected value

use crate::progress::START_EXPECTED;
use serde::{Deserialize, Serialize};

/// A completed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: i32,
    pub timestamp: String,
}

/// One row of the expected-value tracker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerRow {
    /// One-based game number
    pub game: usize,
    pub score: i32,
    pub expected: f64,
    pub difference: f64,
}

/// Append-only record of completed games.
///
/// Survives resets; only a completed three-dice roll adds to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    entries: Vec<ScoreEntry>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, score: i32, timestamp: impl Into<String>) {
        self.entries.push(ScoreEntry {
            score,
            timestamp: timestamp.into(),
        });
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> i64 {
        self.entries.iter().map(|e| i64::from(e.score)).sum()
    }

    /// Mean score, `None` before the first completed game
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.total() as f64 / self.entries.len() as f64)
    }

    pub fn tracker_rows(&self) -> Vec<TrackerRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| TrackerRow {
                game: i + 1,
                score: entry.score,
                expected: START_EXPECTED,
                difference: f64::from(entry.score) - START_EXPECTED,
            })
            .collect()
    }

    /// Sum of `score - expected` over all games
    pub fn cumulative_difference(&self) -> f64 {
        self.tracker_rows().iter().map(|r| r.difference).sum()
    }

    pub fn average_difference(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.cumulative_difference() / self.entries.len() as f64
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
