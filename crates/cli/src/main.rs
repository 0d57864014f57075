// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tc - Triple Chance CLI

mod commands;
mod completions;
mod config;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{auto, play};
use completions::CompletionsArgs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{Config, ConfigSource};
use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tc",
    version,
    about = "Triple Chance - flip a coin, dodge seven, score three dice"
)]
struct Cli {
    /// Config file (default: $TC_CONFIG, then tc/config.toml in the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play(play::PlayArgs),
    /// Play complete games automatically and summarize them
    Auto(auto::AutoArgs),
    /// Show the effective configuration
    Config,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{cli_error}"),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Play(args) => {
            let (config, _, _log_guard) = prepare(cli.config.as_deref())?;
            play::play(args, &config, cli.format).await?;
        }
        Commands::Auto(args) => {
            let (config, _, _log_guard) = prepare(cli.config.as_deref())?;
            auto::auto(args, &config, cli.format).await?;
        }
        Commands::Config => {
            let (config, source, _log_guard) = prepare(cli.config.as_deref())?;
            commands::config::show(&config, &source, cli.format);
        }
        // Completions never depend on configuration
        Commands::Completions(args) => completions::generate_completions::<Cli>(args.shell),
    }

    Ok(())
}

/// Load configuration and start logging
fn prepare(flag: Option<&Path>) -> Result<(Config, ConfigSource, Option<WorkerGuard>)> {
    let (config, source) = Config::load(flag).map_err(CliError::from)?;
    let guard = logging::setup_logging(&config.log)?;
    tracing::debug!(%source, "configuration loaded");
    Ok((config, source, guard))
}
