// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use tc_adapters::{DisplayAdapter, DisplayError};
use tc_core::{render, Clock, Effect, EventBus, GameState, Scheduler, Timing};
use thiserror::Error;
use tracing::Instrument;

/// Errors that can occur during effect execution
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("display error: {0}")]
    Display(#[from] DisplayError),
}

/// Executes effects against the display, the event bus and the scheduler
pub struct Executor<D, C> {
    display: D,
    bus: EventBus,
    scheduler: Scheduler,
    timing: Timing,
    clock: C,
}

impl<D, C> Executor<D, C>
where
    D: DisplayAdapter,
    C: Clock,
{
    pub fn new(display: D, bus: EventBus, timing: Timing, clock: C) -> Self {
        Self {
            display,
            bus,
            scheduler: Scheduler::new(),
            timing,
            clock,
        }
    }

    /// Execute a single effect with tracing
    ///
    /// `state` is the state the effect's transition produced; emitted
    /// events are rendered against it.
    pub async fn execute(
        &mut self,
        effect: Effect,
        state: &GameState,
    ) -> Result<(), ExecuteError> {
        use tc_core::TracedEffect;

        let op_name = effect.name();
        let span = tracing::debug_span!("effect", effect = op_name);

        async {
            tracing::debug!(fields = ?effect.fields(), "executing");

            let result = self.execute_inner(effect, state).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "failed");
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn execute_inner(
        &mut self,
        effect: Effect,
        state: &GameState,
    ) -> Result<(), ExecuteError> {
        match effect {
            Effect::Emit(event) => {
                let commands = render(&event, state);
                self.display.apply(&commands).await?;
                self.bus.publish(&event);
                tracing::info!(event = %event.name(), "emitted");
                Ok(())
            }

            Effect::SetTimer { timer } => {
                let delay = self.timing.delay_for(&timer);
                let fire_at = self.clock.now() + delay;
                self.scheduler.schedule(timer.id(), fire_at, timer);
                tracing::debug!(
                    timer = timer.id(),
                    delay_ms = delay.as_millis() as u64,
                    "scheduled"
                );
                Ok(())
            }
        }
    }

    /// Execute multiple effects in order
    ///
    /// A failing effect does not stop the rest: a timer requested alongside
    /// a failed emit is still scheduled. The first error is returned.
    pub async fn execute_all(
        &mut self,
        effects: Vec<Effect>,
        state: &GameState,
    ) -> Result<(), ExecuteError> {
        let mut first_error = None;
        for effect in effects {
            if let Err(e) = self.execute(effect, state).await {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
