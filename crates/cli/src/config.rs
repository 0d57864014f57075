// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file loading
//!
//! Looked up in order: `--config`, `$TC_CONFIG`, then `tc/config.toml` in
//! the user config directory. The first two must exist; the last is
//! optional and built-in defaults apply without it.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use tc_core::Timing;
use thiserror::Error;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TC_CONFIG";

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: Timing,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Write logs here instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    UserDir(PathBuf),
    Defaults,
}

impl ConfigSource {
    /// Pick the file to load. Only the user directory file may be absent.
    pub fn resolve(
        flag: Option<&Path>,
        env: Option<OsString>,
        user_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = flag {
            return ConfigSource::Flag(path.to_path_buf());
        }
        if let Some(path) = env.filter(|p| !p.is_empty()) {
            return ConfigSource::Env(PathBuf::from(path));
        }
        match user_file {
            Some(path) if path.is_file() => ConfigSource::UserDir(path),
            _ => ConfigSource::Defaults,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Flag(path) | ConfigSource::Env(path) | ConfigSource::UserDir(path) => {
                Some(path)
            }
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Env(path) => write!(f, "{} (${CONFIG_ENV})", path.display()),
            ConfigSource::UserDir(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

impl Config {
    /// `tc/config.toml` under the user config directory
    pub fn user_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tc").join("config.toml"))
    }

    /// Load from the first configured location
    pub fn load(flag: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
        let source =
            ConfigSource::resolve(flag, std::env::var_os(CONFIG_ENV), Self::user_file());
        let config = match source.path() {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        Ok((config, source))
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
