// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tc config` - Show the effective configuration

use crate::config::{Config, ConfigSource};
use crate::output::{self, OutputFormat};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct ConfigView {
    pub source: String,
    #[serde(flatten)]
    pub config: Config,
}

impl fmt::Display for ConfigView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# source: {}", self.source)?;
        let body = toml::to_string_pretty(&self.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body.trim_end())
    }
}

pub fn show(config: &Config, source: &ConfigSource, format: OutputFormat) {
    let view = ConfigView {
        source: source.to_string(),
        config: config.clone(),
    };
    output::print(&view, format);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_view_is_commented_toml() {
        let view = ConfigView {
            source: ConfigSource::Defaults.to_string(),
            config: Config::default(),
        };
        let text = view.to_string();
        assert!(text.starts_with("# source: built-in defaults\n"));
        assert!(text.contains("[timing]"));
        assert!(text.contains("seven_restart = \"2s\""));
        assert!(text.contains("[log]"));
    }

    #[test]
    fn json_view_flattens_the_config() {
        let view = ConfigView {
            source: "tc.toml".to_string(),
            config: Config::default(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["source"], "tc.toml");
        assert_eq!(json["timing"]["coin_settle"], "600ms");
        assert_eq!(json["log"]["level"], "warn");
    }
}
