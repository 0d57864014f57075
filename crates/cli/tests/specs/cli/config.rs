// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config command specs
//!
//! Verify where configuration is read from and how it is shown.

use crate::prelude::*;

#[test]
fn defaults_apply_without_a_config_file() {
    let temp = Project::empty();

    temp.tc()
        .args(&["config"])
        .passes()
        .stdout_has("# source: built-in defaults")
        .stdout_has("coin_settle = \"600ms\"")
        .stdout_has("seven_restart = \"2s\"");
}

#[test]
fn user_config_directory_is_read() {
    let temp = Project::empty();
    temp.user_config("[timing]\ncoin_settle = \"50ms\"\n");

    temp.tc()
        .args(&["config"])
        .passes()
        .stdout_has("config.toml")
        .stdout_has("coin_settle = \"50ms\"")
        .stdout_has("tails_restart = \"1s 500ms\"");
}

#[test]
fn env_config_overrides_user_config() {
    let temp = Project::empty();
    temp.user_config("[timing]\ncoin_settle = \"50ms\"\n");
    let env_file = temp.file("env.toml", "[timing]\ncoin_settle = \"70ms\"\n");

    temp.tc()
        .env("TC_CONFIG", &env_file)
        .args(&["config"])
        .passes()
        .stdout_has("$TC_CONFIG")
        .stdout_has("coin_settle = \"70ms\"");
}

#[test]
fn flag_overrides_env_config() {
    let temp = Project::empty();
    let env_file = temp.file("env.toml", "[timing]\ncoin_settle = \"70ms\"\n");
    temp.file("flag.toml", "[log]\nlevel = \"debug\"\nfile = \"logs/tc.log\"\n");

    temp.tc()
        .env("TC_CONFIG", &env_file)
        .args(&["--config", "flag.toml", "config"])
        .passes()
        .stdout_has("(--config)")
        .stdout_has("coin_settle = \"600ms\"")
        .stdout_has("level = \"debug\"");
}

#[test]
fn json_config_is_machine_readable() {
    let temp = Project::empty();

    temp.tc()
        .args(&["--format", "json", "config"])
        .passes()
        .stdout_has("\"source\": \"built-in defaults\"")
        .stdout_has("\"coin_settle\": \"600ms\"");
}

#[test]
fn configured_log_file_receives_logs() {
    let temp = Project::empty();
    temp.file(
        "tc.toml",
        "[log]\nlevel = \"info\"\nfile = \"logs/tc.log\"\n",
    );

    temp.tc()
        .args(&["--config", "tc.toml", "auto", "--games", "1", "--instant", "--seed", "3"])
        .passes()
        .stderr_lacks("auto play");

    let log = std::fs::read_to_string(temp.path().join("logs/tc.log")).unwrap();
    assert!(log.contains("auto play"), "log was: {log}");
}
