// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoring rules for the dice stages

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two-dice stage ends the game on this sum
pub const LOSING_SUM: u8 = 7;

/// Sum of a two-dice roll
pub fn two_dice_sum(dice: [u8; 2]) -> u8 {
    dice[0] + dice[1]
}

/// Whether a two-dice roll ends the game
pub fn is_losing_roll(dice: [u8; 2]) -> bool {
    two_dice_sum(dice) == LOSING_SUM
}

/// Parity class of a three-dice roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    AllEven,
    AllOdd,
    Mixed,
}

impl Parity {
    pub fn of(dice: [u8; 3]) -> Self {
        if dice.iter().all(|d| d % 2 == 0) {
            Parity::AllEven
        } else if dice.iter().all(|d| d % 2 == 1) {
            Parity::AllOdd
        } else {
            Parity::Mixed
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::AllEven => write!(f, "All Even"),
            Parity::AllOdd => write!(f, "All Odd"),
            Parity::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Whether a die counts for or against the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

/// A scored three-dice roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeDiceScore {
    pub dice: [u8; 3],
    pub parity: Parity,
    pub score: i32,
}

impl ThreeDiceScore {
    /// All even scores the sum, all odd the negated sum, mixed `d1 - d2 + d3`
    pub fn new(dice: [u8; 3]) -> Self {
        let [a, b, c] = dice.map(i32::from);
        let parity = Parity::of(dice);
        let score = match parity {
            Parity::AllEven => a + b + c,
            Parity::AllOdd => -(a + b + c),
            Parity::Mixed => a - b + c,
        };
        Self {
            dice,
            parity,
            score,
        }
    }

    /// Polarity of the die at `index` (0-based)
    pub fn polarity(&self, index: usize) -> Polarity {
        match self.parity {
            Parity::AllEven => Polarity::Positive,
            Parity::AllOdd => Polarity::Negative,
            Parity::Mixed if index == 1 => Polarity::Negative,
            Parity::Mixed => Polarity::Positive,
        }
    }

    /// Worked formula, e.g. `2 - 3 + 4 = 3 (Mixed)`
    pub fn formula(&self) -> String {
        let [a, b, c] = self.dice;
        match self.parity {
            Parity::AllEven => format!("{a} + {b} + {c} = {} ({})", self.score, self.parity),
            Parity::AllOdd => format!("-({a} + {b} + {c}) = {} ({})", self.score, self.parity),
            Parity::Mixed => format!("{a} - {b} + {c} = {} ({})", self.score, self.parity),
        }
    }
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;
