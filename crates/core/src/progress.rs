// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expected-value progress for the game in play
//!
//! Each step records the expected value before and after one game action.
//! The tracker starts every game with a single `Start` step and only grows
//! until the next reset.

use serde::{Deserialize, Serialize};

/// Expected value of a fresh game
pub const START_EXPECTED: f64 = 1.25;
/// Expected value once the coin lands heads
pub const AFTER_HEADS_EXPECTED: f64 = 2.5;
/// Expected value once the two dice avoid seven
pub const AFTER_TWO_DICE_EXPECTED: f64 = 3.0;
/// Expected value once the game is lost
pub const LOST_EXPECTED: f64 = 0.0;
/// Mean of one die
pub const DIE_MEAN: f64 = 3.5;

/// Direction of an expected-value change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increase,
    Decrease,
    Neutral,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Trend::Increase
        } else if change < 0.0 {
            Trend::Decrease
        } else {
            Trend::Neutral
        }
    }
}

/// Format a change with an explicit sign, `0.00` when flat
pub fn signed(value: f64) -> String {
    match Trend::of(value) {
        Trend::Increase => format!("+{value:.2}"),
        Trend::Decrease => format!("{value:.2}"),
        Trend::Neutral => "0.00".to_string(),
    }
}

/// One logged expected-value change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStep {
    pub label: String,
    pub previous: f64,
    pub current: f64,
}

impl ProgressStep {
    pub fn change(&self) -> f64 {
        self.current - self.previous
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.change())
    }
}

/// Totals across the whole tracker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub start: f64,
    pub end: f64,
}

impl ProgressSummary {
    pub fn change(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressTracker {
    steps: Vec<ProgressStep>,
}

impl ProgressTracker {
    /// A tracker holding only the `Start` step
    pub fn start() -> Self {
        Self {
            steps: vec![ProgressStep {
                label: "Start".to_string(),
                previous: 0.0,
                current: START_EXPECTED,
            }],
        }
    }

    /// Expected value after the latest step
    pub fn last_expected(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.current)
    }

    /// Append a step continuing from the latest expected value
    pub fn push(&mut self, label: impl Into<String>, current: f64) {
        let previous = self.last_expected();
        self.steps.push(ProgressStep {
            label: label.into(),
            previous,
            current,
        });
    }

    pub fn steps(&self) -> &[ProgressStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn summary(&self) -> Option<ProgressSummary> {
        let first = self.steps.first()?;
        Some(ProgressSummary {
            start: first.current,
            end: self.last_expected(),
        })
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_a_single_start_step() {
        let tracker = ProgressTracker::start();
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.steps()[0].label, "Start");
        assert_eq!(tracker.steps()[0].previous, 0.0);
        assert_eq!(tracker.last_expected(), START_EXPECTED);
    }

    #[test]
    fn push_chains_from_the_previous_step() {
        let mut tracker = ProgressTracker::start();
        tracker.push("Coin Flip (Heads)", AFTER_HEADS_EXPECTED);
        tracker.push("Two Dice (3+4=7) - Reset", LOST_EXPECTED);

        let steps = tracker.steps();
        assert_eq!(steps[1].previous, START_EXPECTED);
        assert_eq!(steps[1].current, AFTER_HEADS_EXPECTED);
        assert_eq!(steps[2].previous, AFTER_HEADS_EXPECTED);
        assert_eq!(steps[2].trend(), Trend::Decrease);
    }

    #[test]
    fn summary_spans_first_to_last() {
        let mut tracker = ProgressTracker::start();
        tracker.push("Coin Flip (Heads)", AFTER_HEADS_EXPECTED);
        tracker.push("Two Dice (2+2=4)", AFTER_TWO_DICE_EXPECTED);

        let summary = tracker.summary().unwrap();
        assert_eq!(summary.start, START_EXPECTED);
        assert_eq!(summary.end, AFTER_TWO_DICE_EXPECTED);
        assert_eq!(summary.change(), 1.75);
    }

    #[test]
    fn signed_marks_direction() {
        assert_eq!(signed(1.25), "+1.25");
        assert_eq!(signed(-2.5), "-2.50");
        assert_eq!(signed(0.0), "0.00");
    }
}
