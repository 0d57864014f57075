// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tc auto` - Play complete games without input
//!
//! Always takes the one action the current stage allows, waits for it to
//! settle and repeats until enough games have completed.

use super::{flush_events, until, watch_all};
use crate::config::Config;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use tc_adapters::{NoOpDisplay, TracedDisplay};
use tc_core::progress::signed;
use tc_core::{
    Event, EventBus, EventPattern, RandRoller, ScoreHistory, Subscription, SystemClock,
    ThreeDiceScore, Timing,
};
use tc_engine::{Runtime, RuntimeConfig, RuntimeDeps};

#[derive(Args)]
pub struct AutoArgs {
    /// Number of completed games to play
    #[arg(long, short = 'n', default_value_t = 10)]
    pub games: usize,

    /// Seed the dice for a repeatable run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip every delay
    #[arg(long)]
    pub instant: bool,
}

/// Totals after an automatic run
#[derive(Debug, Serialize)]
pub struct Summary {
    pub games_played: usize,
    pub average_score: Option<f64>,
    pub cumulative_difference: f64,
    pub average_difference: f64,
}

impl Summary {
    pub fn of(history: &ScoreHistory) -> Self {
        Self {
            games_played: history.len(),
            average_score: history.average(),
            cumulative_difference: history.cumulative_difference(),
            average_difference: history.average_difference(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games played:          {}", self.games_played)?;
        match self.average_score {
            Some(average) => writeln!(f, "average score:         {average:.2}")?,
            None => writeln!(f, "average score:         -")?,
        }
        writeln!(f, "cumulative difference: {}", signed(self.cumulative_difference))?;
        write!(f, "average difference:    {}", signed(self.average_difference))
    }
}

pub async fn auto(args: AutoArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let timing = if args.instant {
        Timing::instant()
    } else {
        config.timing
    };
    let mut runtime = Runtime::new(
        RuntimeDeps {
            display: TracedDisplay::new(NoOpDisplay::new()),
            roller: RandRoller::new(args.seed),
            bus: EventBus::new(),
        },
        SystemClock,
        RuntimeConfig { timing },
    );
    let mut events = watch_all(runtime.bus());
    let mut completed = runtime.bus().subscribe(Subscription::new(
        "auto-results",
        vec![EventPattern::new("game:complete")],
    ));

    tracing::info!(games = args.games, seed = ?args.seed, instant = args.instant, "auto play");

    while runtime.state().history.len() < args.games {
        let action = runtime.state().next_action();
        runtime.dispatch(action).await?;

        // Wait out this action, including any restart it triggers
        loop {
            runtime.tick().await?;
            if runtime.is_idle() {
                break;
            }
            until(runtime.next_deadline()).await;
        }

        flush_events(&mut events, format);
        while let Ok(event) = completed.try_recv() {
            if let (OutputFormat::Text, Event::GameComplete { game, dice, .. }) = (format, &event)
            {
                println!("game {game}: {}", ThreeDiceScore::new(*dice).formula());
            }
        }
    }

    output::print(&Summary::of(&runtime.state().history), format);
    Ok(())
}
