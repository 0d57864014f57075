// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the tc CLI.
//!
//! Install completions using:
//!
//! ```bash
//! # Bash
//! tc completions bash > ~/.local/share/bash-completion/completions/tc
//!
//! # Zsh
//! tc completions zsh > ~/.zfunc/_tc
//!
//! # Fish
//! tc completions fish > ~/.config/fish/completions/tc.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions and write to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "tc", &mut io::stdout());
}

/// Arguments for the completions command.
#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
