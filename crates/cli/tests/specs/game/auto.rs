// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Automatic play specs
//!
//! `tc auto` plays whole games and summarizes them.

use crate::prelude::*;

#[test]
fn plays_the_requested_number_of_games() {
    let temp = Project::empty();

    temp.tc()
        .args(&["auto", "--games", "3", "--seed", "7", "--instant"])
        .passes()
        .stdout_has("game 1: ")
        .stdout_has("game 3: ")
        .stdout_lacks("game 4: ")
        .stdout_has("games played:          3")
        .stdout_has("average difference:");
}

#[test]
fn same_seed_plays_the_same_games() {
    let temp = Project::empty();
    let args = ["auto", "--games", "5", "--seed", "42", "--instant"];

    let first = temp.tc().args(&args).passes().stdout();
    let second = temp.tc().args(&args).passes().stdout();

    similar_asserts::assert_eq!(first, second);
}

#[test]
fn zero_games_has_no_average() {
    let temp = Project::empty();

    temp.tc()
        .args(&["auto", "--games", "0", "--instant"])
        .passes()
        .stdout_has("games played:          0")
        .stdout_has("average score:         -");
}

#[test]
fn json_streams_events_then_summary() {
    let temp = Project::empty();

    let stdout = temp
        .tc()
        .args(&["--format", "json", "auto", "--games", "3", "--seed", "9", "--instant"])
        .passes()
        .stdout_has("\"event\":\"coin_flipped\"")
        .stdout_has("\"event\":\"game_complete\"")
        .stdout_has("\"games_played\": 3")
        .stdout();

    let completed = stdout
        .lines()
        .filter(|line| line.contains("\"event\":\"game_complete\""))
        .count();
    assert_eq!(completed, 3);
}

#[test]
fn configured_delays_are_waited_out() {
    let temp = Project::empty();
    temp.user_config(FAST_CONFIG);

    temp.tc()
        .args(&["auto", "--games", "2", "--seed", "5"])
        .passes()
        .stdout_has("games played:          2");
}
