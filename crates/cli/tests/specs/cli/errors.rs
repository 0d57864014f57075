// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting specs
//!
//! Configuration problems fail with a message, context and suggestions.

use crate::prelude::*;

#[test]
fn missing_config_flag_file_fails() {
    let temp = Project::empty();

    temp.tc()
        .args(&["--config", "absent.toml", "auto", "--games", "1", "--instant"])
        .fails()
        .stderr_has("error: Cannot read config file 'absent.toml'")
        .stderr_has("suggestions:");
}

#[test]
fn missing_env_config_file_fails() {
    let temp = Project::empty();

    temp.tc()
        .env("TC_CONFIG", temp.path().join("nowhere.toml"))
        .args(&["config"])
        .fails()
        .stderr_has("nowhere.toml");
}

#[test]
fn invalid_duration_explains_the_format() {
    let temp = Project::empty();
    temp.user_config("[timing]\ncoin_settle = \"quickly\"\n");

    temp.tc()
        .args(&["config"])
        .fails()
        .stderr_has("is not valid")
        .stderr_has("\"600ms\"");
}

#[test]
fn unknown_format_is_a_usage_error() {
    let temp = Project::empty();

    temp.tc()
        .args(&["--format", "yaml", "config"])
        .fails()
        .stderr_has("invalid value 'yaml'");
}
