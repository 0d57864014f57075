// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display adapters

mod noop;
mod terminal;

pub use noop::NoOpDisplay;
pub use terminal::TerminalDisplay;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDisplay;

use async_trait::async_trait;
use tc_core::RenderCommand;
use thiserror::Error;

/// Errors from display operations
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter that draws render commands somewhere a player can see them
#[async_trait]
pub trait DisplayAdapter: Clone + Send + Sync + 'static {
    /// Apply one batch of commands, in order
    async fn apply(&self, commands: &[RenderCommand]) -> Result<(), DisplayError>;
}
