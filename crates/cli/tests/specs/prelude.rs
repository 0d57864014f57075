// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs
//!
//! Every `Project` gets its own config directory and home so the user's
//! real configuration never leaks into a spec.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config file whose delays are short enough for specs to wait on
pub const FAST_CONFIG: &str = r#"
[timing]
coin_settle = "1ms"
tails_restart = "1ms"
two_dice_settle = "1ms"
seven_restart = "1ms"
three_dice_settle = "1ms"
"#;

/// An isolated working area
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write the user-level config file `tc` looks for by default
    pub fn user_config(&self, content: &str) -> PathBuf {
        self.file("config/tc/config.toml", content)
    }

    pub fn tc(&self) -> Tc {
        let mut cmd = Command::cargo_bin("tc").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env_remove("TC_CONFIG")
            .env_remove("RUST_LOG");
        Tc { cmd }
    }
}

/// A pending `tc` invocation
pub struct Tc {
    cmd: Command,
}

impl Tc {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Feed lines to stdin, which closes afterwards
    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> Run {
        Run::from(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Run {
        Run::from(self.cmd.assert().failure())
    }
}

/// A finished invocation
pub struct Run {
    stdout: String,
    stderr: String,
}

impl From<assert_cmd::assert::Assert> for Run {
    fn from(assert: assert_cmd::assert::Assert) -> Self {
        let output = assert.get_output();
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Run {
    pub fn stdout_has(self, expected: &str) -> Self {
        assert!(
            self.stdout.contains(expected),
            "stdout lacks {expected:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        assert!(
            !self.stdout.contains(unexpected),
            "stdout has {unexpected:?}\n--- stdout ---\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        assert!(
            self.stderr.contains(expected),
            "stderr lacks {expected:?}\n--- stderr ---\n{}",
            self.stderr
        );
        self
    }

    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        assert!(
            !self.stderr.contains(unexpected),
            "stderr has {unexpected:?}\n--- stderr ---\n{}",
            self.stderr
        );
        self
    }

    pub fn stdout(&self) -> String {
        self.stdout.clone()
    }
}
