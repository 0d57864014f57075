// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and completion specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.tc()
        .args(&["--help"])
        .passes()
        .stdout_has("play")
        .stdout_has("auto")
        .stdout_has("config")
        .stdout_has("completions")
        .stdout_has("--format");
}

#[test]
fn version_is_reported() {
    let temp = Project::empty();

    temp.tc().args(&["--version"]).passes().stdout_has("tc ");
}

#[test]
fn completions_are_generated_for_bash() {
    let temp = Project::empty();

    temp.tc()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("_tc()");
}

#[test]
fn completions_ignore_a_broken_config() {
    let temp = Project::empty();
    temp.user_config("[timing\n");

    temp.tc().args(&["completions", "zsh"]).passes().stdout_has("#compdef tc");
}
