//! Application configuration
//!
//! Settings come from an optional `fi.toml`:
//!
//! ```toml
//! [output]
//! pretty = true
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! Command-line flags take precedence over the file.

use crate::error::{common, ErrorExt, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "fi.toml";

/// Application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    /// Verbosity from the command line; never read from the file
    #[serde(skip)]
    pub verbose: u8,
}

/// How results are written
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when no `-v` flag is given
    pub level: Option<String>,
}

impl FiConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `fi.toml` in `working_dir`
    /// is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(path) if !path.exists() => return Err(common::config_not_found(path)),
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        debug!("Loading configuration from {}", path.display());
        let text = std::fs::read_to_string(&path)
            .to_config_error("Failed to read configuration")
            .map_err(|e| e.with_path(&path))?;
        Self::from_toml(&text).map_err(|e| e.with_path(&path))
    }

    /// Set the verbosity level
    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Force pretty output on (a flag can only enable it)
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.output.pretty |= pretty;
        self
    }

    /// Get the log filter based on verbosity, falling back to the configured level
    pub fn log_level(&self) -> String {
        match self.verbose {
            0 => self
                .logging
                .level
                .clone()
                .unwrap_or_else(|| "info".to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
