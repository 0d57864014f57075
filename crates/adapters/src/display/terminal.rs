// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented terminal display
//!
//! Keeps a copy of every region and prints only the regions a batch
//! changed, followed by the stage bar and available actions when those
//! moved. Tones become ANSI colors when color is on.

use super::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};
use tc_core::{Action, Region, RenderCommand, Stage, StageStatus, Tone};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

struct Board<W> {
    out: W,
    color: bool,
    texts: HashMap<Region, String>,
    tones: HashMap<Region, Tone>,
    stages: HashMap<Stage, StageStatus>,
    enabled: HashMap<Action, bool>,
}

/// Display that prints to a terminal (or any writer)
pub struct TerminalDisplay<W = io::Stdout> {
    board: Arc<Mutex<Board<W>>>,
}

impl<W> Clone for TerminalDisplay<W> {
    fn clone(&self) -> Self {
        Self {
            board: Arc::clone(&self.board),
        }
    }
}

impl TerminalDisplay<io::Stdout> {
    /// Print to stdout, colored when stdout is a terminal
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self::new(out, color)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            board: Arc::new(Mutex::new(Board {
                out,
                color,
                texts: HashMap::new(),
                tones: HashMap::new(),
                stages: HashMap::new(),
                enabled: HashMap::new(),
            })),
        }
    }
}

impl<W: Write> Board<W> {
    fn apply(&mut self, commands: &[RenderCommand]) -> io::Result<()> {
        let mut changed: Vec<Region> = Vec::new();
        let mut stages_moved = false;
        let mut controls_moved = false;

        for command in commands {
            match command {
                RenderCommand::SetText { region, text } => {
                    if self.texts.get(region) != Some(text) {
                        self.texts.insert(*region, text.clone());
                        if !changed.contains(region) {
                            changed.push(*region);
                        }
                    }
                }
                RenderCommand::Clear { region } => {
                    self.texts.remove(region);
                    self.tones.remove(region);
                    changed.retain(|r| r != region);
                }
                RenderCommand::SetTone { region, tone } => {
                    self.tones.insert(*region, *tone);
                }
                RenderCommand::SetStage { stage, status } => {
                    stages_moved |= self.stages.insert(*stage, *status) != Some(*status);
                }
                RenderCommand::SetEnabled { control, enabled } => {
                    controls_moved |= self.enabled.insert(*control, *enabled) != Some(*enabled);
                }
            }
        }

        for region in changed {
            self.write_region(region)?;
        }
        if stages_moved {
            self.write_stages()?;
        }
        if controls_moved {
            self.write_controls()?;
        }
        self.out.flush()
    }

    fn write_region(&mut self, region: Region) -> io::Result<()> {
        let Some(text) = self.texts.get(&region) else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        let (start, end) = match (self.color, self.tones.get(&region)) {
            (true, Some(Tone::Positive)) => (GREEN, RESET),
            (true, Some(Tone::Negative)) => (RED, RESET),
            (true, Some(Tone::Neutral)) => (DIM, RESET),
            _ => ("", ""),
        };

        if text.contains('\n') {
            writeln!(self.out, "  {}:", region.label())?;
            for line in text.lines() {
                writeln!(self.out, "    {start}{line}{end}")?;
            }
        } else {
            writeln!(self.out, "  {:<22} {start}{text}{end}", format!("{}:", region.label()))?;
        }
        Ok(())
    }

    fn write_stages(&mut self) -> io::Result<()> {
        let boxes: Vec<String> = Stage::PLAYABLE
            .iter()
            .filter_map(|stage| {
                let status = self.stages.get(stage)?;
                let number = stage.number()?;
                let mark = match status {
                    StageStatus::Locked => "locked",
                    StageStatus::Active => "active",
                    StageStatus::Completed => "done",
                };
                Some(format!("[{number} {stage}: {mark}]"))
            })
            .collect();
        writeln!(self.out, "  {}", boxes.join(" "))
    }

    fn write_controls(&mut self) -> io::Result<()> {
        let actions: Vec<String> = Action::ALL
            .iter()
            .filter(|action| self.enabled.get(action).copied().unwrap_or(false))
            .map(|action| action.to_string())
            .collect();
        writeln!(self.out, "  actions: {}", actions.join(", "))
    }
}

#[async_trait]
impl<W: Write + Send + 'static> DisplayAdapter for TerminalDisplay<W> {
    async fn apply(&self, commands: &[RenderCommand]) -> Result<(), DisplayError> {
        let mut board = self.board.lock().unwrap_or_else(|e| e.into_inner());
        board.apply(commands)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
