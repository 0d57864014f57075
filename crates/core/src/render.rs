// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turns game events into display commands
//!
//! The renderer is pure: it reads the event and the state the event left
//! behind and returns commands keyed by named regions. A display adapter
//! decides what those regions look like.

use crate::dice::CoinFace;
use crate::effect::Event;
use crate::game::GameState;
use crate::history::ScoreHistory;
use crate::progress::{signed, ProgressTracker, Trend};
use crate::scoring::{is_losing_roll, Polarity, ThreeDiceScore};
use crate::stage::{Action, Stage, StageStatus};
use serde::Serialize;
use std::fmt;

/// Named areas of the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    CoinDisplay,
    CoinStatus,
    TwoDiceDisplay,
    TwoDiceStatus,
    ThreeDiceDisplay,
    ThreeDiceStatus,
    CurrentScore,
    ScoreHistory,
    GamesPlayed,
    AverageScore,
    TrackerHistory,
    CumulativeDiff,
    AverageDiff,
    ProgressSteps,
    ProgressTotal,
}

impl Region {
    /// Regions wiped by a reset
    pub const STAGE_OUTPUT: [Region; 6] = [
        Region::CoinDisplay,
        Region::CoinStatus,
        Region::TwoDiceDisplay,
        Region::TwoDiceStatus,
        Region::ThreeDiceDisplay,
        Region::ThreeDiceStatus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::CoinDisplay => "coin",
            Region::CoinStatus => "coin status",
            Region::TwoDiceDisplay => "two dice",
            Region::TwoDiceStatus => "two dice status",
            Region::ThreeDiceDisplay => "three dice",
            Region::ThreeDiceStatus => "three dice status",
            Region::CurrentScore => "current score",
            Region::ScoreHistory => "score history",
            Region::GamesPlayed => "games played",
            Region::AverageScore => "average score",
            Region::TrackerHistory => "expected value tracker",
            Region::CumulativeDiff => "cumulative difference",
            Region::AverageDiff => "average difference",
            Region::ProgressSteps => "progress",
            Region::ProgressTotal => "progress total",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color hint for a region's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    fn of_sign(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

/// A single instruction for the display surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RenderCommand {
    SetText { region: Region, text: String },
    Clear { region: Region },
    /// Applies to the next text shown in `region`
    SetTone { region: Region, tone: Tone },
    SetEnabled { control: Action, enabled: bool },
    SetStage { stage: Stage, status: StageStatus },
}

impl RenderCommand {
    fn text(region: Region, text: impl Into<String>) -> Self {
        RenderCommand::SetText {
            region,
            text: text.into(),
        }
    }

    fn toned(region: Region, tone: Tone, text: impl Into<String>) -> [Self; 2] {
        [
            RenderCommand::SetTone { region, tone },
            RenderCommand::text(region, text),
        ]
    }
}

/// Commands for one event, given the state after it
pub fn render(event: &Event, state: &GameState) -> Vec<RenderCommand> {
    let mut commands = Vec::new();
    match event {
        Event::CoinFlipped { face, .. } => {
            commands.push(RenderCommand::text(
                Region::CoinDisplay,
                face.to_string().to_uppercase(),
            ));
        }

        Event::CoinSettled {
            face: CoinFace::Heads,
        } => {
            commands.extend(RenderCommand::toned(
                Region::CoinStatus,
                Tone::Positive,
                "✅ Heads! Unlocked Stage 2",
            ));
            commands.extend(progress(&state.progress));
        }

        Event::CoinSettled {
            face: CoinFace::Tails,
        } => {
            commands.extend(RenderCommand::toned(
                Region::CoinStatus,
                Tone::Negative,
                "❌ Tails! Game restarted...",
            ));
        }

        Event::TwoDiceRolled { dice } => {
            commands.push(RenderCommand::text(Region::TwoDiceDisplay, faces(dice)));
        }

        Event::TwoDiceSettled { dice, sum } => {
            let [a, b] = dice;
            let status = if is_losing_roll(*dice) {
                RenderCommand::toned(
                    Region::TwoDiceStatus,
                    Tone::Negative,
                    format!("🎲 {a} + {b} = {sum}! Game Reset!"),
                )
            } else {
                RenderCommand::toned(
                    Region::TwoDiceStatus,
                    Tone::Positive,
                    format!("✅ {a} + {b} = {sum}! Stage 3 Unlocked"),
                )
            };
            commands.extend(status);
            commands.extend(progress(&state.progress));
        }

        Event::ThreeDiceRolled { dice, .. } => {
            let scored = ThreeDiceScore::new(*dice);
            commands.push(RenderCommand::text(
                Region::ThreeDiceDisplay,
                signed_faces(&scored),
            ));
            commands.extend(progress(&state.progress));
        }

        Event::StageUnlocked { .. } => {
            commands.extend(stages(state));
            commands.extend(controls(state));
        }

        Event::GameComplete { dice, score, .. } => {
            commands.extend(RenderCommand::toned(
                Region::ThreeDiceStatus,
                Tone::of_sign(f64::from(*score)),
                format!("🎯 {}", ThreeDiceScore::new(*dice).formula()),
            ));
            commands.push(RenderCommand::text(Region::CurrentScore, score.to_string()));
            commands.extend(history(&state.history));
            commands.extend(stages(state));
            commands.extend(controls(state));
        }

        Event::GameReset => {
            commands.extend(
                Region::STAGE_OUTPUT
                    .iter()
                    .map(|region| RenderCommand::Clear { region: *region }),
            );
            commands.push(RenderCommand::text(
                Region::CurrentScore,
                state.current_score.to_string(),
            ));
            commands.extend(stages(state));
            commands.extend(controls(state));
            commands.extend(progress(&state.progress));
        }
    }
    commands
}

/// Everything needed to draw the current state from scratch
pub fn render_all(state: &GameState) -> Vec<RenderCommand> {
    let mut commands = vec![RenderCommand::text(
        Region::CurrentScore,
        state.current_score.to_string(),
    )];
    commands.extend(stages(state));
    commands.extend(controls(state));
    commands.extend(progress(&state.progress));
    commands.extend(history(&state.history));
    commands
}

fn stages(state: &GameState) -> Vec<RenderCommand> {
    Stage::PLAYABLE
        .iter()
        .map(|stage| RenderCommand::SetStage {
            stage: *stage,
            status: stage.status_in(state.stage),
        })
        .collect()
}

fn controls(state: &GameState) -> Vec<RenderCommand> {
    Action::ALL
        .iter()
        .map(|action| RenderCommand::SetEnabled {
            control: *action,
            enabled: action.enabled_in(state.stage),
        })
        .collect()
}

fn progress(tracker: &ProgressTracker) -> Vec<RenderCommand> {
    let rows: Vec<String> = tracker
        .steps()
        .iter()
        .map(|step| {
            format_row(
                &step.label,
                step.previous,
                step.current,
                &signed(step.change()),
            )
        })
        .collect();
    let mut commands = vec![RenderCommand::text(Region::ProgressSteps, rows.join("\n"))];

    if let Some(summary) = tracker.summary() {
        let tone = match Trend::of(summary.change()) {
            Trend::Decrease => Tone::Negative,
            Trend::Increase | Trend::Neutral => Tone::Positive,
        };
        commands.extend(RenderCommand::toned(
            Region::ProgressTotal,
            tone,
            format_row(
                "Total",
                summary.start,
                summary.end,
                &with_sign(summary.change()),
            ),
        ));
    }
    commands
}

fn format_row(label: &str, previous: f64, current: f64, change: &str) -> String {
    format!("{label:<24} {previous:>7.2} {current:>7.2} {change:>7}")
}

fn history(history: &ScoreHistory) -> Vec<RenderCommand> {
    let games: Vec<String> = history
        .entries()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let sign = if entry.score >= 0 { "+" } else { "" };
            format!("Game {} - {}  {sign}{}", i + 1, entry.timestamp, entry.score)
        })
        .collect();

    let tracker: Vec<String> = history
        .tracker_rows()
        .iter()
        .rev()
        .map(|row| {
            format!(
                "{:>4} {:>5} {:>6.2} {:>8}",
                row.game,
                row.score,
                row.expected,
                with_sign(row.difference)
            )
        })
        .collect();

    let mut commands = vec![
        RenderCommand::text(Region::ScoreHistory, games.join("\n")),
        RenderCommand::text(Region::GamesPlayed, history.len().to_string()),
    ];
    if let Some(average) = history.average() {
        commands.push(RenderCommand::text(
            Region::AverageScore,
            format!("{average:.2}"),
        ));
    }
    commands.push(RenderCommand::text(Region::TrackerHistory, tracker.join("\n")));

    let cumulative = history.cumulative_difference();
    let average = history.average_difference();
    if history.is_empty() {
        commands.extend(RenderCommand::toned(Region::CumulativeDiff, Tone::Neutral, "0.00"));
        commands.extend(RenderCommand::toned(Region::AverageDiff, Tone::Neutral, "0.00"));
    } else {
        commands.extend(RenderCommand::toned(
            Region::CumulativeDiff,
            Tone::of_sign(cumulative),
            with_sign(cumulative),
        ));
        commands.extend(RenderCommand::toned(
            Region::AverageDiff,
            Tone::of_sign(average),
            with_sign(average),
        ));
    }
    commands
}

/// `+x.xx` for zero and above, `-x.xx` below
fn with_sign(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

/// Unicode die face for 1..=6
pub fn die_face(value: u8) -> char {
    match value {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        6 => '⚅',
        _ => '?',
    }
}

fn faces(dice: &[u8]) -> String {
    dice.iter()
        .map(|d| format!("{} {d}", die_face(*d)))
        .collect::<Vec<_>>()
        .join("   ")
}

fn signed_faces(scored: &ThreeDiceScore) -> String {
    scored
        .dice
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let sign = match scored.polarity(i) {
                Polarity::Positive => '+',
                Polarity::Negative => '-',
            };
            format!("{} {sign}{d}", die_face(*d))
        })
        .collect::<Vec<_>>()
        .join("   ")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
