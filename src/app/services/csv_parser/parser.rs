//! Core mission CSV parser implementation
//!
//! This module provides the parser orchestration: header extraction, row
//! tokenization, and file-level loading with the input extension gate.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize_line;
use crate::app::models::{Dataset, Record};
use crate::constants::{CSV_EXTENSION, NUMBERS_EXTENSION};
use crate::{Error, Result};

/// Tokenizing parser for comma-delimited launch datasets
///
/// The parser focuses on essential functionality:
/// - Quoted-field tokenization applied uniformly to header and data lines
/// - Positional zipping of rows against the header (short rows pad with
///   empty strings, long rows drop extras)
/// - Blank-line skipping without producing empty records
#[derive(Debug, Default)]
pub struct MissionCsvParser;

impl MissionCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse raw delimited text into a dataset
    ///
    /// The first line defines the column names; every subsequent non-blank
    /// line becomes one record. Input that is empty after trimming yields an
    /// empty dataset with no columns. Duplicate header names collide
    /// silently in each record's map, last one wins.
    pub fn parse(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();

        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Input is empty after trimming, producing empty dataset");
            return ParseResult {
                dataset: Dataset::empty(),
                stats,
            };
        }

        let mut lines = trimmed.lines();
        let header_line = lines.next().unwrap_or_default();
        let columns = tokenize_line(header_line);

        let mut records = Vec::new();
        for line in lines {
            stats.total_lines += 1;

            if line.trim().is_empty() {
                stats.blank_lines_skipped += 1;
                continue;
            }

            let fields = tokenize_line(line);
            let mut values = HashMap::with_capacity(columns.len());
            for (index, column) in columns.iter().enumerate() {
                let value = fields.get(index).cloned().unwrap_or_default();
                values.insert(column.clone(), value);
            }

            records.push(Record::new(values));
            stats.records_parsed += 1;
        }

        debug!(
            "Parsed {} records from {} lines ({} blank)",
            stats.records_parsed, stats.total_lines, stats.blank_lines_skipped
        );

        ParseResult {
            dataset: Dataset::new(columns, records),
            stats,
        }
    }

    /// Load and parse a launch dataset from disk
    ///
    /// The extension gate runs before any read: only `.csv` is accepted,
    /// and `.numbers` spreadsheets get re-export guidance. The whole file is
    /// read at once; this is the only awaited step in the pipeline. A file
    /// with no data rows after the header is rejected so that no empty
    /// dataset is ever installed from a file.
    pub async fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        check_extension(file_path)?;

        info!("Parsing mission CSV file: {}", file_path.display());

        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        let result = self.parse(&content);
        if result.dataset.is_empty() {
            return Err(Error::no_data(file_path.display().to_string()));
        }

        info!(
            "Loaded {} missions with {} columns",
            result.dataset.len(),
            result.dataset.columns().len()
        );

        Ok(result)
    }
}

/// Reject input files by extension before reading them
fn check_extension(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        CSV_EXTENSION => Ok(()),
        NUMBERS_EXTENSION => Err(Error::spreadsheet_export(file_path.display().to_string())),
        _ => Err(Error::unsupported_file_type(
            file_path.display().to_string(),
        )),
    }
}
