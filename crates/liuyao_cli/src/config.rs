//! CLI configuration file.
//!
//! Resolution order, highest first: command-line flags, the file named by
//! `--config`, `./liuyao.toml` when present, built-in defaults.
//!
//! ```toml
//! [output]
//! format = "json"
//!
//! [calendar]
//! utc_offset_hours = 8
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use liuyao_time::CalendarConfig;
use serde::Deserialize;
use tracing::debug;

use crate::cli::{GlobalArgs, OutputFormat};

pub const DEFAULT_CONFIG_FILE: &str = "liuyao.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load from an explicit path (which must exist), else the default file
    /// in the working directory, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    debug!("no config file; using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        config
            .calendar
            .offset()
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(offset) = args.utc_offset {
            self.calendar.utc_offset_hours = offset;
        }
        self
    }
}
