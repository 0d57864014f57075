// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use crate::config::{ConfigError, CONFIG_ENV};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let path = err.path().display().to_string();
        let base = match &err {
            ConfigError::Read { source, .. } => {
                CliError::new(format!("Cannot read config file '{path}'"))
                    .with_context(source.to_string())
                    .with_suggestion(format!("Check the path passed to --config or ${CONFIG_ENV}"))
            }
            ConfigError::Parse { source, .. } => {
                CliError::new(format!("Config file '{path}' is not valid"))
                    .with_context(source.message().to_string())
                    .with_context("Delays are written as durations such as \"600ms\" or \"1.5s\"")
                    .with_suggestion("Show the built-in settings: tc config --config /dev/null")
            }
        };
        base.with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let err = CliError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn missing_config_suggests_checking_the_path() {
        let err = CliError::from(ConfigError::Read {
            path: PathBuf::from("/nowhere/tc.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        let output = err.to_string();
        assert!(output.contains("Cannot read config file '/nowhere/tc.toml'"));
        assert!(output.contains("-> not found"));
        assert!(output.contains("TC_CONFIG"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_config_explains_duration_syntax() {
        let source = toml::from_str::<crate::config::Config>("[timing]\ncoin_settle = 5\n")
            .unwrap_err();
        let err = CliError::from(ConfigError::Parse {
            path: PathBuf::from("tc.toml"),
            source,
        });
        let output = err.to_string();
        assert!(output.contains("Config file 'tc.toml' is not valid"));
        assert!(output.contains("\"600ms\""));
    }
}
