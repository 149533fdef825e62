//! Mission Analyzer Library
//!
//! A Rust library for analyzing spaceflight launch datasets distributed as
//! delimited text files.
//!
//! This library provides tools for:
//! - Tokenizing delimited launch data with quoted-field support
//! - Representing parsed files as immutable, string-typed record sets
//! - Computing mission counts, success rates, rankings, and multi-year averages
//! - Deriving filtered, sorted, and grouped views for reporting
//! - Re-serializing record sets with consistent field quoting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_parser;
        pub mod query_engine;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Dataset, MissionStatus, Record, StatusTally};
pub use config::Config;

/// Result type alias for mission analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading and analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file has an extension the parser does not accept
    #[error("Unsupported file type '{path}': only .csv files are accepted")]
    UnsupportedFileType { path: String },

    /// Input file is an Apple Numbers spreadsheet export
    #[error("'{path}' is a .numbers spreadsheet: export it as CSV and retry")]
    SpreadsheetExport { path: String },

    /// Input file parsed but contained no data rows
    #[error("No data found in '{path}': the file has no rows after the header")]
    NoData { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse config file '{path}'")]
    ConfigParsing {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported file type error
    pub fn unsupported_file_type(path: impl Into<String>) -> Self {
        Self::UnsupportedFileType { path: path.into() }
    }

    /// Create a spreadsheet export rejection error
    pub fn spreadsheet_export(path: impl Into<String>) -> Self {
        Self::SpreadsheetExport { path: path.into() }
    }

    /// Create a no-data error for an empty input file
    pub fn no_data(path: impl Into<String>) -> Self {
        Self::NoData { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a config file parsing error
    pub fn config_parsing(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParsing {
            path: path.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
