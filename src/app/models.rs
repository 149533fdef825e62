//! Data models for mission analysis
//!
//! This module contains the core data structures for representing parsed
//! launch datasets: string-typed records keyed by column name, the ordered
//! dataset they form, and the mission status taxonomy.

use crate::constants::status_labels;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

// =============================================================================
// Record Structure
// =============================================================================

/// One parsed data row: a mapping from column name to cell value
///
/// All values are strings; numeric and date semantics are derived on demand
/// by query functions, never stored as typed fields. Records are immutable
/// once constructed and a missing column reads as the empty string, so field
/// access never fails mid-query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    /// Create a record from column/value pairs
    ///
    /// Duplicate column names collide silently; the last value wins,
    /// matching the header-collision behavior of the parser.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Get a field value, or the empty string when the column is absent
    pub fn field(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Get a field value if the column is present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

// =============================================================================
// Dataset Structure
// =============================================================================

/// The full ordered sequence of records from one parsed file
///
/// The column list comes from the header row and defines the schema once for
/// every record. The dataset is immutable after construction: filtering and
/// sorting produce new `Dataset` values rather than mutating this one. An
/// empty dataset (zero data rows) is valid and distinct from "no dataset
/// loaded", which callers model with `Option<Dataset>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from a header-defined column list and record sequence
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Create an empty dataset with no columns and no records
    pub fn empty() -> Self {
        Self::default()
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records in file order, unless this dataset came from a sort
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no data records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

// =============================================================================
// Mission Status Enumeration
// =============================================================================

/// Recognized mission outcome statuses
///
/// Datasets may carry other status strings; those are treated as "other" and
/// excluded from the status tally rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    /// Mission achieved its objectives
    Success,

    /// Mission failed after launch
    Failure,

    /// Mission partially achieved its objectives
    PartialFailure,

    /// Mission failed before launch
    PrelaunchFailure,
}

impl MissionStatus {
    /// Classify a raw status cell, returning `None` for unrecognized values
    pub fn classify(value: &str) -> Option<Self> {
        match value {
            status_labels::SUCCESS => Some(Self::Success),
            status_labels::FAILURE => Some(Self::Failure),
            status_labels::PARTIAL_FAILURE => Some(Self::PartialFailure),
            status_labels::PRELAUNCH_FAILURE => Some(Self::PrelaunchFailure),
            _ => None,
        }
    }

    /// Canonical label as it appears in the dataset
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => status_labels::SUCCESS,
            Self::Failure => status_labels::FAILURE,
            Self::PartialFailure => status_labels::PARTIAL_FAILURE,
            Self::PrelaunchFailure => status_labels::PRELAUNCH_FAILURE,
        }
    }

    /// All recognized status values in tally order
    pub fn all_values() -> [MissionStatus; 4] {
        [
            MissionStatus::Success,
            MissionStatus::Failure,
            MissionStatus::PartialFailure,
            MissionStatus::PrelaunchFailure,
        ]
    }
}

impl FromStr for MissionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::classify(s.trim()).ok_or_else(|| {
            Error::data_validation(format!(
                "Invalid mission status '{}': must be one of {}, {}, {}, {}",
                s,
                status_labels::SUCCESS,
                status_labels::FAILURE,
                status_labels::PARTIAL_FAILURE,
                status_labels::PRELAUNCH_FAILURE
            ))
        })
    }
}

impl std::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Status Tally Structure
// =============================================================================

/// Counts per recognized mission status
///
/// The tally always carries all four keys, even at zero, so downstream
/// consumers see a fixed shape. Unrecognized status values are not tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusTally {
    #[serde(rename = "Success")]
    pub success: usize,

    #[serde(rename = "Failure")]
    pub failure: usize,

    #[serde(rename = "Partial Failure")]
    pub partial_failure: usize,

    #[serde(rename = "Prelaunch Failure")]
    pub prelaunch_failure: usize,
}

impl StatusTally {
    /// Create an all-zero tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of a recognized status
    pub fn record(&mut self, status: MissionStatus) {
        match status {
            MissionStatus::Success => self.success += 1,
            MissionStatus::Failure => self.failure += 1,
            MissionStatus::PartialFailure => self.partial_failure += 1,
            MissionStatus::PrelaunchFailure => self.prelaunch_failure += 1,
        }
    }

    /// Count for one recognized status
    pub fn count(&self, status: MissionStatus) -> usize {
        match status {
            MissionStatus::Success => self.success,
            MissionStatus::Failure => self.failure,
            MissionStatus::PartialFailure => self.partial_failure,
            MissionStatus::PrelaunchFailure => self.prelaunch_failure,
        }
    }

    /// Sum over all four recognized statuses
    pub fn total(&self) -> usize {
        self.success + self.failure + self.partial_failure + self.prelaunch_failure
    }

    /// Status/count pairs in tally order, for report rendering
    pub fn as_pairs(&self) -> [(MissionStatus, usize); 4] {
        MissionStatus::all_values().map(|status| (status, self.count(status)))
    }
}
