// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod auto;
pub mod config;
pub mod play;

use crate::output::{self, OutputFormat};
use std::time::Instant;
use tc_core::{EventBus, EventPattern, EventReceiver, Subscription};

/// Subscribe to every game event
fn watch_all(bus: &EventBus) -> EventReceiver {
    bus.subscribe(Subscription::new("cli", vec![EventPattern::all()]))
}

/// Print pending events as JSON lines; in text mode they are only drained
fn flush_events(events: &mut EventReceiver, format: OutputFormat) {
    while let Ok(event) = events.try_recv() {
        if format == OutputFormat::Json {
            output::print_line(&event);
        }
    }
}

/// Sleep until `deadline`, or forever when nothing is scheduled
async fn until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}
