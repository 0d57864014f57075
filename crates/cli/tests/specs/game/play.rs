// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive play specs
//!
//! Commands are fed through stdin; closing stdin ends the session.

use crate::prelude::*;

#[test]
fn status_reports_a_fresh_game() {
    let temp = Project::empty();

    temp.tc()
        .args(&["play", "--seed", "1"])
        .stdin("status\nquit\n")
        .passes()
        .stdout_has("Type 'help' for commands.")
        .stdout_has("stage: coin  score: 0  flips: 0  games: 0  next: flip coin");
}

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.tc()
        .args(&["play"])
        .stdin("help\n")
        .passes()
        .stdout_has("commands:")
        .stdout_has("roll3  (3)");
}

#[test]
fn unknown_commands_are_reported() {
    let temp = Project::empty();

    temp.tc()
        .args(&["play"])
        .stdin("bogus\nquit\n")
        .passes()
        .stderr_has("unknown command 'bogus'");
}

#[test]
fn empty_history_says_so() {
    let temp = Project::empty();

    temp.tc()
        .args(&["play"])
        .stdin("history\n")
        .passes()
        .stdout_has("no games completed yet");
}

#[test]
fn wrong_stage_actions_are_ignored() {
    let temp = Project::empty();

    temp.tc()
        .args(&["play", "--seed", "1"])
        .stdin("roll3\n")
        .passes()
        .stdout_has("(cannot roll three dice while at the coin stage)");
}

#[test]
fn json_reports_actions_while_settling() {
    let temp = Project::empty();

    temp.tc()
        .args(&["--format", "json", "play", "--seed", "1"])
        .stdin("flip\nflip\n")
        .passes()
        .stdout_has("\"event\":\"coin_flipped\"")
        .stdout_has("\"event\":\"ignored\"")
        .stdout_has("\"event\":\"coin_settled\"")
        .stdout_lacks("Type 'help'");
}

#[test]
fn closing_input_lets_the_flip_settle() {
    let temp = Project::empty();
    temp.user_config(FAST_CONFIG);

    temp.tc()
        .args(&["--format", "json", "play", "--seed", "2"])
        .stdin("flip\n")
        .passes()
        .stdout_has("\"event\":\"coin_settled\"");
}
