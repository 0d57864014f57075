// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::display::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use tc_core::RenderCommand;
use tracing::Instrument;

/// Wrapper that adds tracing to any DisplayAdapter
#[derive(Clone)]
pub struct TracedDisplay<D> {
    inner: D,
}

impl<D> TracedDisplay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

#[async_trait]
impl<D: DisplayAdapter> DisplayAdapter for TracedDisplay<D> {
    async fn apply(&self, commands: &[RenderCommand]) -> Result<(), DisplayError> {
        let span = tracing::debug_span!("display.apply", commands = commands.len());

        async {
            let start = std::time::Instant::now();
            let result = self.inner.apply(commands).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::trace!(elapsed_us = elapsed.as_micros() as u64, "drawn"),
                Err(e) => tracing::error!(
                    elapsed_us = elapsed.as_micros() as u64,
                    error = %e,
                    "draw failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
