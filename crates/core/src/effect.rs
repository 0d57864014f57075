// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::dice::CoinFace;
use crate::scoring::Parity;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

/// Effects are side effects that the game state machine requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for the renderer and subscribers
    Emit(Event),
    /// Fire `timer` once its configured delay has elapsed
    SetTimer { timer: GameTimer },
}

/// Deferred transitions standing in for animation delays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "timer", rename_all = "snake_case")]
pub enum GameTimer {
    /// The coin stops spinning
    SettleCoin { face: CoinFace },
    /// The two dice stop rolling
    SettleTwoDice { dice: [u8; 2] },
    /// The three dice stop rolling
    SettleThreeDice { dice: [u8; 3] },
    /// A lost game starts over
    Restart { cause: LossCause },
}

/// What ended a game early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossCause {
    Tails,
    Seven,
}

impl GameTimer {
    /// Scheduler id
    pub fn id(&self) -> &'static str {
        match self {
            GameTimer::SettleCoin { .. } => "settle-coin",
            GameTimer::SettleTwoDice { .. } => "settle-two-dice",
            GameTimer::SettleThreeDice { .. } => "settle-three-dice",
            GameTimer::Restart { .. } => "restart",
        }
    }
}

/// Events emitted by the game state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    CoinFlipped {
        face: CoinFace,
        flip_count: u32,
    },
    CoinSettled {
        face: CoinFace,
    },
    TwoDiceRolled {
        dice: [u8; 2],
    },
    TwoDiceSettled {
        dice: [u8; 2],
        sum: u8,
    },
    ThreeDiceRolled {
        dice: [u8; 3],
        parity: Parity,
        score: i32,
    },
    StageUnlocked {
        stage: Stage,
    },
    GameComplete {
        game: usize,
        dice: [u8; 3],
        score: i32,
        timestamp: String,
    },
    GameReset,
}

impl Event {
    /// Get the event name for pattern matching
    /// Format: "category:action" or "category:subcategory:action"
    pub fn name(&self) -> String {
        match self {
            Event::CoinFlipped { .. } => "coin:flipped".to_string(),
            Event::CoinSettled { face } => format!("coin:{face}"),
            Event::TwoDiceRolled { .. } => "dice:two:rolled".to_string(),
            Event::TwoDiceSettled { dice, .. } => {
                if crate::scoring::is_losing_roll(*dice) {
                    "dice:two:seven".to_string()
                } else {
                    "dice:two:safe".to_string()
                }
            }
            Event::ThreeDiceRolled { .. } => "dice:three:rolled".to_string(),
            Event::StageUnlocked { .. } => "stage:unlocked".to_string(),
            Event::GameComplete { .. } => "game:complete".to_string(),
            Event::GameReset => "game:reset".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
