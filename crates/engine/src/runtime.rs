// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime for the game engine
//!
//! The runtime is the single controller: it owns the game state, draws
//! random outcomes for accepted actions, feeds events through the state
//! machine and hands the resulting effects to the executor.

use crate::{error::RuntimeError, Executor};
use std::time::Instant;
use tc_adapters::DisplayAdapter;
use tc_core::{
    render_all, Action, Clock, EventBus, GameEvent, GameState, Rejection, Roller, Timing,
};

/// Runtime configuration
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub timing: Timing,
}

/// Runtime adapter dependencies
pub struct RuntimeDeps<D, R> {
    pub display: D,
    pub roller: R,
    pub bus: EventBus,
}

/// Outcome of dispatching a user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Accepted,
    Ignored(Rejection),
}

/// Runtime that coordinates the game
pub struct Runtime<D, C: Clock, R> {
    executor: Executor<D, C>,
    state: GameState,
    roller: R,
    clock: C,
}

impl<D, C, R> Runtime<D, C, R>
where
    D: DisplayAdapter,
    C: Clock,
    R: Roller,
{
    /// Create a new runtime
    pub fn new(deps: RuntimeDeps<D, R>, clock: C, config: RuntimeConfig) -> Self {
        Self {
            executor: Executor::new(deps.display, deps.bus, config.timing, clock.clone()),
            state: GameState::new(),
            roller: deps.roller,
            clock,
        }
    }

    /// Draw the initial board
    pub async fn start(&mut self) -> Result<(), RuntimeError> {
        let commands = render_all(&self.state);
        self.executor.display().apply(&commands).await.map_err(crate::ExecuteError::from)?;
        Ok(())
    }

    /// Handle a user action
    ///
    /// Rejected actions change nothing and consume no randomness.
    pub async fn dispatch(&mut self, action: Action) -> Result<Dispatch, RuntimeError> {
        if let Err(rejection) = self.state.check(action) {
            tracing::debug!(%action, %rejection, "ignored");
            return Ok(Dispatch::Ignored(rejection));
        }

        let event = match action {
            Action::FlipCoin => GameEvent::FlipCoin {
                face: self.roller.flip(),
            },
            Action::RollTwoDice => GameEvent::RollTwoDice {
                dice: self.roller.roll_two(),
            },
            Action::RollThreeDice => GameEvent::RollThreeDice {
                dice: self.roller.roll_three(),
            },
            Action::Reset => GameEvent::Reset,
        };
        tracing::info!(%action, ?event, "dispatch");

        self.handle(event).await?;
        Ok(Dispatch::Accepted)
    }

    /// Fire every timer that is due, including timers scheduled by the
    /// ones that fired
    ///
    /// Returns the number of timers fired.
    pub async fn tick(&mut self) -> Result<usize, RuntimeError> {
        let mut fired = 0;
        loop {
            let now = self.clock.now();
            let ready = self.executor.scheduler_mut().poll(now);
            if ready.is_empty() {
                return Ok(fired);
            }
            for item in ready {
                tracing::debug!(timer = %item.id, "fired");
                self.handle(GameEvent::TimerFired(item.timer)).await?;
                fired += 1;
            }
        }
    }

    async fn handle(&mut self, event: GameEvent) -> Result<(), RuntimeError> {
        let (state, effects) = self.state.transition(event, &self.clock);
        self.state = state;
        self.executor.execute_all(effects, &self.state).await?;
        Ok(())
    }

    /// When the next timer is due, if any is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.executor.scheduler().next_fire_time()
    }

    /// Nothing in flight and nothing scheduled
    pub fn is_idle(&self) -> bool {
        !self.state.is_animating && self.executor.scheduler().is_empty()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn bus(&self) -> &EventBus {
        self.executor.bus()
    }

    pub fn timing(&self) -> &Timing {
        self.executor.timing()
    }

    pub fn display(&self) -> &D {
        self.executor.display()
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
