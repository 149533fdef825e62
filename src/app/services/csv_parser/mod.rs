//! CSV parser for spaceflight launch datasets
//!
//! This module provides a tokenizing parser for comma-delimited launch data
//! with optional double-quote field enclosure, plus the matching serializer
//! used to re-emit filtered views.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - Character-scan field splitting for a single line
//! - [`parser`] - Header/row orchestration and file-level loading
//! - [`serializer`] - Dataset re-emission with consistent field quoting
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use mission_analyzer::app::services::csv_parser::MissionCsvParser;
//!
//! let parser = MissionCsvParser::new();
//! let result = parser.parse("Company,Date\nSpaceX,2020-01-01");
//!
//! assert_eq!(result.dataset.len(), 1);
//! assert_eq!(result.stats.records_parsed, 1);
//! ```

pub mod parser;
pub mod serializer;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use parser::MissionCsvParser;
pub use serializer::to_csv;
pub use stats::{ParseResult, ParseStats};
