// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tc play` - Interactive game loop
//!
//! Reads one command per line from stdin. Input is read on a plain thread
//! and forwarded over a channel so the loop can wait on input and on the
//! next timer deadline at the same time.

use super::{flush_events, until, watch_all};
use crate::config::Config;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::io::BufRead;
use tc_adapters::{DisplayAdapter, NoOpDisplay, TerminalDisplay, TracedDisplay};
use tc_core::progress::signed;
use tc_core::{Action, EventBus, GameState, RandRoller, Stage, SystemClock, TrackerRow};
use tc_engine::{Dispatch, Runtime, RuntimeConfig, RuntimeDeps};
use tokio::sync::mpsc;

#[derive(Args)]
pub struct PlayArgs {
    /// Seed the dice for a repeatable game
    #[arg(long)]
    pub seed: Option<u64>,
}

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Status,
    History,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let command = match line.trim().to_ascii_lowercase().as_str() {
            "flip" | "f" => Command::Act(Action::FlipCoin),
            "roll2" | "2" => Command::Act(Action::RollTwoDice),
            "roll3" | "3" => Command::Act(Action::RollThreeDice),
            "reset" | "r" => Command::Act(Action::Reset),
            "status" | "s" => Command::Status,
            "history" | "h" => Command::History,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

const HELP: &str = "\
commands:
  flip   (f)   flip the coin
  roll2  (2)   roll two dice
  roll3  (3)   roll three dice
  reset  (r)   start a new game
  status (s)   show the current game
  history (h)  show completed games
  help   (?)   show this help
  quit   (q)   leave";

/// Snapshot of the game in play
#[derive(Debug, Serialize)]
pub struct Status {
    pub stage: Stage,
    pub next_action: Action,
    pub current_score: i32,
    pub flip_count: u32,
    pub settling: bool,
    pub games_played: usize,
    pub average_score: Option<f64>,
}

impl Status {
    pub fn of(state: &GameState) -> Self {
        Self {
            stage: state.stage,
            next_action: state.next_action(),
            current_score: state.current_score,
            flip_count: state.flip_count,
            settling: state.is_animating,
            games_played: state.history.len(),
            average_score: state.history.average(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stage: {}  score: {}  flips: {}  games: {}",
            self.stage, self.current_score, self.flip_count, self.games_played
        )?;
        if let Some(average) = self.average_score {
            write!(f, "  average: {average:.2}")?;
        }
        if self.settling {
            write!(f, "  (settling)")
        } else {
            write!(f, "  next: {}", self.next_action)
        }
    }
}

/// A completed game with its timestamp
#[derive(Debug, Serialize)]
pub struct HistoryRow {
    #[serde(flatten)]
    pub row: TrackerRow,
    pub timestamp: String,
}

impl fmt::Display for HistoryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "game {:>3}  {}  score {:>3}  expected {:.2}  diff {}",
            self.row.game,
            self.timestamp,
            self.row.score,
            self.row.expected,
            signed(self.row.difference)
        )
    }
}

fn history_rows(state: &GameState) -> Vec<HistoryRow> {
    state
        .history
        .tracker_rows()
        .into_iter()
        .zip(state.history.entries())
        .map(|(row, entry)| HistoryRow {
            row,
            timestamp: entry.timestamp.clone(),
        })
        .collect()
}

pub async fn play(args: PlayArgs, config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let display = TracedDisplay::new(TerminalDisplay::stdout());
            run(display, args, config, format).await
        }
        OutputFormat::Json => {
            let display = TracedDisplay::new(NoOpDisplay::new());
            run(display, args, config, format).await
        }
    }
}

async fn run<D: DisplayAdapter>(
    display: D,
    args: PlayArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let mut runtime = Runtime::new(
        RuntimeDeps {
            display,
            roller: RandRoller::new(args.seed),
            bus: EventBus::new(),
        },
        SystemClock,
        RuntimeConfig {
            timing: config.timing,
        },
    );
    let mut events = watch_all(runtime.bus());
    let mut lines = spawn_stdin_reader();

    if format == OutputFormat::Text {
        println!("Triple Chance: flip heads, dodge seven, then roll for points.");
        println!("Type 'help' for commands.\n");
    }
    runtime.start().await?;
    tracing::info!(seed = ?args.seed, "game started");

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    // Input closed: let whatever is in flight settle, then stop
                    while let Some(deadline) = runtime.next_deadline() {
                        until(Some(deadline)).await;
                        runtime.tick().await?;
                        flush_events(&mut events, format);
                    }
                    break;
                };

                match Command::parse(&line) {
                    Some(Command::Act(action)) => {
                        if let Dispatch::Ignored(rejection) = runtime.dispatch(action).await? {
                            match format {
                                OutputFormat::Text => println!("  ({rejection})"),
                                OutputFormat::Json => output::print_line(&serde_json::json!({
                                    "event": "ignored",
                                    "action": action,
                                    "rejection": rejection,
                                })),
                            }
                        }
                    }
                    Some(Command::Status) => output::print(&Status::of(runtime.state()), format),
                    Some(Command::History) => {
                        let rows = history_rows(runtime.state());
                        if rows.is_empty() && format == OutputFormat::Text {
                            println!("no games completed yet");
                        } else {
                            output::print_list(&rows, format);
                        }
                    }
                    Some(Command::Help) => println!("{HELP}"),
                    Some(Command::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => eprintln!("unknown command '{}', type 'help'", line.trim()),
                }
            }

            _ = until(runtime.next_deadline()) => {
                runtime.tick().await?;
            }
        }
        flush_events(&mut events, format);
    }

    tracing::info!(games = runtime.state().history.len(), "game over");
    Ok(())
}

/// Forward stdin lines to the async loop
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
