// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Game stages and the actions that drive them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a playthrough currently is.
///
/// Exactly one stage is active at a time. `Complete` follows a settled
/// three-dice roll and waits for a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Coin,
    TwoDice,
    ThreeDice,
    Complete,
}

impl Stage {
    /// The three playable stages, in order
    pub const PLAYABLE: [Stage; 3] = [Stage::Coin, Stage::TwoDice, Stage::ThreeDice];

    /// One-based position of a playable stage
    pub fn number(self) -> Option<u8> {
        match self {
            Stage::Coin => Some(1),
            Stage::TwoDice => Some(2),
            Stage::ThreeDice => Some(3),
            Stage::Complete => None,
        }
    }

    /// Status of this stage's box while the game sits in `current`
    pub fn status_in(self, current: Stage) -> StageStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StageStatus::Completed,
            std::cmp::Ordering::Equal => StageStatus::Active,
            std::cmp::Ordering::Greater => StageStatus::Locked,
        }
    }

    /// The action that plays this stage
    pub fn action(self) -> Action {
        match self {
            Stage::Coin => Action::FlipCoin,
            Stage::TwoDice => Action::RollTwoDice,
            Stage::ThreeDice => Action::RollThreeDice,
            Stage::Complete => Action::Reset,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Coin => write!(f, "coin"),
            Stage::TwoDice => write!(f, "two dice"),
            Stage::ThreeDice => write!(f, "three dice"),
            Stage::Complete => write!(f, "complete"),
        }
    }
}

/// Visual status of a stage box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Locked,
    Active,
    Completed,
}

/// The four user intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    FlipCoin,
    RollTwoDice,
    RollThreeDice,
    Reset,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::FlipCoin,
        Action::RollTwoDice,
        Action::RollThreeDice,
        Action::Reset,
    ];

    /// Stage this action plays, `None` for reset which is valid anywhere
    pub fn stage(self) -> Option<Stage> {
        match self {
            Action::FlipCoin => Some(Stage::Coin),
            Action::RollTwoDice => Some(Stage::TwoDice),
            Action::RollThreeDice => Some(Stage::ThreeDice),
            Action::Reset => None,
        }
    }

    /// Whether the control for this action is enabled in `stage`
    pub fn enabled_in(self, stage: Stage) -> bool {
        self.stage().is_none_or(|s| s == stage)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::FlipCoin => write!(f, "flip coin"),
            Action::RollTwoDice => write!(f, "roll two dice"),
            Action::RollThreeDice => write!(f, "roll three dice"),
            Action::Reset => write!(f, "reset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;
    use super::StageStatus::{Active, Completed, Locked};

    #[parameterized(
        at_coin = { Stage::Coin, [Active, Locked, Locked] },
        at_two_dice = { Stage::TwoDice, [Completed, Active, Locked] },
        at_three_dice = { Stage::ThreeDice, [Completed, Completed, Active] },
        at_complete = { Stage::Complete, [Completed, Completed, Completed] },
    )]
    fn stage_boxes_follow_current_stage(current: Stage, expected: [StageStatus; 3]) {
        let statuses: Vec<StageStatus> = Stage::PLAYABLE
            .iter()
            .map(|s| s.status_in(current))
            .collect();
        assert_eq!(statuses, expected);
    }

    #[test]
    fn reset_is_enabled_everywhere() {
        for stage in [Stage::Coin, Stage::TwoDice, Stage::ThreeDice, Stage::Complete] {
            assert!(Action::Reset.enabled_in(stage));
        }
    }

    #[test]
    fn each_roll_is_enabled_only_in_its_stage() {
        assert!(Action::FlipCoin.enabled_in(Stage::Coin));
        assert!(!Action::FlipCoin.enabled_in(Stage::TwoDice));
        assert!(Action::RollTwoDice.enabled_in(Stage::TwoDice));
        assert!(!Action::RollTwoDice.enabled_in(Stage::ThreeDice));
        assert!(Action::RollThreeDice.enabled_in(Stage::ThreeDice));
        assert!(!Action::RollThreeDice.enabled_in(Stage::Complete));
    }

    #[test]
    fn complete_stage_only_offers_reset() {
        assert_eq!(Stage::Complete.action(), Action::Reset);
        assert_eq!(Stage::Complete.number(), None);
    }
}
