// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op display for headless runs.

use super::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use tc_core::RenderCommand;

/// Display that draws nothing.
///
/// Used when output goes somewhere else, such as a JSON event stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDisplay;

impl NoOpDisplay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DisplayAdapter for NoOpDisplay {
    async fn apply(&self, _commands: &[RenderCommand]) -> Result<(), DisplayError> {
        Ok(())
    }
}
