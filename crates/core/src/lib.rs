// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tc-core: Core library for the three-stage coin and dice game
//!
//! This crate provides:
//! - A pure game state machine driven by actions and timers
//! - Scoring, progress and history bookkeeping
//! - A timer scheduler and event bus
//! - A renderer turning events into display commands

pub mod clock;
pub mod dice;
pub mod events;
pub mod history;
pub mod progress;
pub mod render;
pub mod scheduler;
pub mod scoring;
pub mod stage;
pub mod timing;
pub mod traced;

// State machine (order matters for dependencies)
pub mod effect;
pub mod game;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use dice::{CoinFace, RandRoller, Roller};
pub use effect::{Effect, Event, GameTimer, LossCause};
pub use events::{EventBus, EventPattern, EventReceiver, SubscriberId, Subscription};
pub use game::{GameEvent, GameState, Rejection};
pub use history::{ScoreEntry, ScoreHistory, TrackerRow};
pub use progress::{ProgressStep, ProgressSummary, ProgressTracker, Trend};
pub use render::{render, render_all, Region, RenderCommand, Tone};
pub use scheduler::{ScheduledItem, Scheduler};
pub use scoring::{Parity, ThreeDiceScore};
pub use stage::{Action, Stage, StageStatus};
pub use timing::Timing;
pub use traced::TracedEffect;

#[cfg(any(test, feature = "test-support"))]
pub use dice::ScriptedRoller;
