// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake display for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tc_core::{Region, RenderCommand};

#[derive(Default)]
struct FakeState {
    batches: Vec<Vec<RenderCommand>>,
    texts: HashMap<Region, String>,
    fail_next: bool,
}

/// Fake display that records every batch and tracks region text
#[derive(Clone, Default)]
pub struct FakeDisplay {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `apply` fail without recording anything
    pub fn fail_next(&self) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).fail_next = true;
    }

    /// Get all recorded batches
    pub fn batches(&self) -> Vec<Vec<RenderCommand>> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .batches
            .clone()
    }

    /// Get all recorded commands, flattened
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.batches().into_iter().flatten().collect()
    }

    /// Text currently shown in `region`, if any
    pub fn text(&self, region: Region) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .texts
            .get(&region)
            .cloned()
    }
}

#[async_trait]
impl DisplayAdapter for FakeDisplay {
    async fn apply(&self, commands: &[RenderCommand]) -> Result<(), DisplayError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if std::mem::take(&mut inner.fail_next) {
            return Err(DisplayError::Io(std::io::Error::other("fake display failure")));
        }
        for command in commands {
            match command {
                RenderCommand::SetText { region, text } => {
                    inner.texts.insert(*region, text.clone());
                }
                RenderCommand::Clear { region } => {
                    inner.texts.remove(region);
                }
                _ => {}
            }
        }
        inner.batches.push(commands.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
