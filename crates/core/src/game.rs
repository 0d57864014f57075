// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Game state machine
//!
//! Stages run `Coin → TwoDice → ThreeDice → Complete`, with a reset edge back
//! to `Coin` from anywhere. Every action first sets `is_animating` and
//! schedules a settle timer; the outcome takes effect when that timer fires.
//! Losses (tails, a seven) schedule one more timer that restarts the game.
//! While `is_animating` is set every user action is ignored.

use crate::clock::Clock;
use crate::dice::CoinFace;
use crate::effect::{Effect, Event, GameTimer, LossCause};
use crate::history::ScoreHistory;
use crate::progress::{
    ProgressTracker, AFTER_HEADS_EXPECTED, AFTER_TWO_DICE_EXPECTED, DIE_MEAN, LOST_EXPECTED,
};
use crate::scoring::{is_losing_roll, two_dice_sum, Parity, ThreeDiceScore};
use crate::stage::{Action, Stage};
use serde::Serialize;
use std::fmt;

/// Inputs to the state machine: user actions carrying their random draws,
/// and fired timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FlipCoin { face: CoinFace },
    RollTwoDice { dice: [u8; 2] },
    RollThreeDice { dice: [u8; 3] },
    Reset,
    TimerFired(GameTimer),
}

impl GameEvent {
    /// The user action behind this event, `None` for timers
    pub fn action(&self) -> Option<Action> {
        match self {
            GameEvent::FlipCoin { .. } => Some(Action::FlipCoin),
            GameEvent::RollTwoDice { .. } => Some(Action::RollTwoDice),
            GameEvent::RollThreeDice { .. } => Some(Action::RollThreeDice),
            GameEvent::Reset => Some(Action::Reset),
            GameEvent::TimerFired(_) => None,
        }
    }
}

/// Why an action was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// A previous action has not settled yet
    Busy,
    /// The action belongs to another stage
    WrongStage { action: Action, stage: Stage },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Busy => write!(f, "still settling the last action"),
            Rejection::WrongStage { action, stage } => {
                write!(f, "cannot {action} while at the {stage} stage")
            }
        }
    }
}

/// The whole game, owned by a single controller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub stage: Stage,
    pub current_score: i32,
    pub history: ScoreHistory,
    pub progress: ProgressTracker,
    /// Coin flips in the current game
    pub flip_count: u32,
    /// Single-flight guard, set from an action until it settles
    pub is_animating: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::fresh(ScoreHistory::new())
    }

    /// A new game that keeps the given history
    fn fresh(history: ScoreHistory) -> Self {
        Self {
            stage: Stage::Coin,
            current_score: 0,
            history,
            progress: ProgressTracker::start(),
            flip_count: 0,
            is_animating: false,
        }
    }

    /// Whether `action` would be accepted right now
    pub fn check(&self, action: Action) -> Result<(), Rejection> {
        if self.is_animating {
            return Err(Rejection::Busy);
        }
        if !action.enabled_in(self.stage) {
            return Err(Rejection::WrongStage {
                action,
                stage: self.stage,
            });
        }
        Ok(())
    }

    /// The action that moves the game forward from here
    pub fn next_action(&self) -> Action {
        self.stage.action()
    }

    /// Pure transition function - returns new state and effects
    pub fn transition(&self, event: GameEvent, clock: &impl Clock) -> (GameState, Vec<Effect>) {
        if let Some(action) = event.action() {
            if self.check(action).is_err() {
                return (self.clone(), vec![]);
            }
        }

        match event {
            GameEvent::FlipCoin { face } => {
                let state = GameState {
                    flip_count: self.flip_count + 1,
                    is_animating: true,
                    ..self.clone()
                };
                let effects = vec![
                    Effect::Emit(Event::CoinFlipped {
                        face,
                        flip_count: state.flip_count,
                    }),
                    Effect::SetTimer {
                        timer: GameTimer::SettleCoin { face },
                    },
                ];
                (state, effects)
            }

            GameEvent::RollTwoDice { dice } => {
                let state = GameState {
                    is_animating: true,
                    ..self.clone()
                };
                let effects = vec![
                    Effect::Emit(Event::TwoDiceRolled { dice }),
                    Effect::SetTimer {
                        timer: GameTimer::SettleTwoDice { dice },
                    },
                ];
                (state, effects)
            }

            // Progress steps land as soon as the dice are thrown; the score
            // and history wait for the settle timer.
            GameEvent::RollThreeDice { dice } => {
                let scored = ThreeDiceScore::new(dice);
                let mut state = GameState {
                    is_animating: true,
                    ..self.clone()
                };
                push_three_dice_steps(&mut state.progress, &scored);
                let effects = vec![
                    Effect::Emit(Event::ThreeDiceRolled {
                        dice,
                        parity: scored.parity,
                        score: scored.score,
                    }),
                    Effect::SetTimer {
                        timer: GameTimer::SettleThreeDice { dice },
                    },
                ];
                (state, effects)
            }

            GameEvent::Reset => self.restart(),

            // Timers only settle the action in flight
            GameEvent::TimerFired(_) if !self.is_animating => (self.clone(), vec![]),
            GameEvent::TimerFired(timer) => self.settle(timer, clock),
        }
    }

    fn settle(&self, timer: GameTimer, clock: &impl Clock) -> (GameState, Vec<Effect>) {
        match (self.stage, timer) {
            (Stage::Coin, GameTimer::SettleCoin { face: CoinFace::Heads }) => {
                let mut state = GameState {
                    stage: Stage::TwoDice,
                    is_animating: false,
                    ..self.clone()
                };
                state
                    .progress
                    .push("Coin Flip (Heads)", AFTER_HEADS_EXPECTED);
                let effects = vec![
                    Effect::Emit(Event::CoinSettled {
                        face: CoinFace::Heads,
                    }),
                    Effect::Emit(Event::StageUnlocked {
                        stage: Stage::TwoDice,
                    }),
                ];
                (state, effects)
            }

            (Stage::Coin, GameTimer::SettleCoin { face: CoinFace::Tails }) => {
                let effects = vec![
                    Effect::Emit(Event::CoinSettled {
                        face: CoinFace::Tails,
                    }),
                    Effect::SetTimer {
                        timer: GameTimer::Restart {
                            cause: LossCause::Tails,
                        },
                    },
                ];
                (self.clone(), effects)
            }

            (Stage::TwoDice, GameTimer::SettleTwoDice { dice }) => {
                let [a, b] = dice;
                let sum = two_dice_sum(dice);
                let settled = Effect::Emit(Event::TwoDiceSettled { dice, sum });

                if is_losing_roll(dice) {
                    let mut state = self.clone();
                    state
                        .progress
                        .push(format!("Two Dice ({a}+{b}={sum}) - Reset"), LOST_EXPECTED);
                    let effects = vec![
                        settled,
                        Effect::SetTimer {
                            timer: GameTimer::Restart {
                                cause: LossCause::Seven,
                            },
                        },
                    ];
                    return (state, effects);
                }

                let mut state = GameState {
                    stage: Stage::ThreeDice,
                    is_animating: false,
                    ..self.clone()
                };
                state
                    .progress
                    .push(format!("Two Dice ({a}+{b}={sum})"), AFTER_TWO_DICE_EXPECTED);
                let effects = vec![
                    settled,
                    Effect::Emit(Event::StageUnlocked {
                        stage: Stage::ThreeDice,
                    }),
                ];
                (state, effects)
            }

            (Stage::ThreeDice, GameTimer::SettleThreeDice { dice }) => {
                let scored = ThreeDiceScore::new(dice);
                let timestamp = clock.timestamp();
                let mut state = GameState {
                    stage: Stage::Complete,
                    current_score: scored.score,
                    is_animating: false,
                    ..self.clone()
                };
                state.history.record(scored.score, timestamp.clone());
                let effects = vec![Effect::Emit(Event::GameComplete {
                    game: state.history.len(),
                    dice,
                    score: scored.score,
                    timestamp,
                })];
                (state, effects)
            }

            (_, GameTimer::Restart { .. }) => self.restart(),

            // Stale timer for a stage we already left
            _ => (self.clone(), vec![]),
        }
    }

    fn restart(&self) -> (GameState, Vec<Effect>) {
        let state = GameState::fresh(self.history.clone());
        (state, vec![Effect::Emit(Event::GameReset)])
    }
}

fn push_three_dice_steps(progress: &mut ProgressTracker, scored: &ThreeDiceScore) {
    let [a, b, c] = scored.dice;
    let score = f64::from(scored.score);
    match scored.parity {
        Parity::AllEven => progress.push(format!("All Even: {a}+{b}+{c}"), score),
        Parity::AllOdd => progress.push(format!("All Odd: -({a}+{b}+{c})"), score),
        Parity::Mixed => {
            let (fa, fb) = (f64::from(a), f64::from(b));
            progress.push(format!("Die 1: +{a}"), fa);
            progress.push(format!("Die 2: -{b}"), fa - fb + DIE_MEAN);
            progress.push(format!("Die 3: +{c}"), score);
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
