//! Parsing statistics and result structures for mission CSV processing

use crate::app::models::Dataset;

/// Parsing result carrying the dataset and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed, immutable record set
    pub dataset: Dataset,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of lines after the header, blank or not
    pub total_lines: usize,

    /// Number of records produced
    pub records_parsed: usize,

    /// Number of all-whitespace lines skipped without producing a record
    pub blank_lines_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            records_parsed: 0,
            blank_lines_skipped: 0,
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
