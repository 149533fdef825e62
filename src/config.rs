//! Configuration management and validation.
//!
//! Provides the optional TOML configuration layer for report defaults.
//! Settings load from a file when one is given, fall back to built-in
//! defaults otherwise, and are overridden by explicit CLI arguments.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::constants::{DEFAULT_TOP_COMPANIES, TABLE_ROW_CAP};
use crate::{Error, Result};

/// Top-level configuration for the analyzer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report rendering defaults
    pub report: ReportConfig,
}

/// Defaults for report rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of companies shown in the ranking section
    pub top_companies: usize,

    /// Maximum number of rows shown in the report table
    pub table_row_cap: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_companies: DEFAULT_TOP_COMPANIES,
            table_row_cap: TABLE_ROW_CAP,
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file
    ///
    /// With no file given, built-in defaults apply. A file that exists but
    /// fails to parse or validate is an error rather than a silent fallback.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let Some(path) = config_file else {
            debug!("No config file specified, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::config_parsing(path.display().to_string(), e))?;
        config.validate()?;

        debug!(
            "Loaded config from {}: top_companies={}, table_row_cap={}",
            path.display(),
            config.report.top_companies,
            config.report.table_row_cap
        );
        Ok(config)
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.report.top_companies == 0 {
            return Err(Error::configuration(
                "report.top_companies must be greater than 0".to_string(),
            ));
        }

        if self.report.table_row_cap == 0 {
            return Err(Error::configuration(
                "report.table_row_cap must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
