//! Derived presentation views over a dataset
//!
//! Filtering, sorting, and grouping are pure transformations layered on top
//! of the query operations: each produces a fresh value and never aliases
//! back into its source. Views are recomputed from scratch per invocation;
//! datasets at this scale do not need an incremental layer.

use std::collections::BTreeMap;

use serde::Serialize;

use super::engine::{ranked_counts, round2};
use crate::app::models::{Dataset, MissionStatus, Record};
use crate::constants::{COL_COMPANY, COL_DATE, COL_MISSION_STATUS};

// =============================================================================
// Filtering
// =============================================================================

/// Record predicate for narrowing a dataset
///
/// All criteria are optional and conjunctive: company and status match
/// exactly, date bounds compare lexicographically against the `Date` field.
/// Unlike the query-argument gate, filter bounds are not validated; a
/// malformed bound simply matches nothing on that side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionFilter {
    /// Keep records whose `Company` equals this value
    pub company: Option<String>,

    /// Keep records whose `MissionStatus` equals this value
    pub status: Option<String>,

    /// Keep records whose `Date` is on or after this bound
    pub start_date: Option<String>,

    /// Keep records whose `Date` is on or before this bound
    pub end_date: Option<String>,
}

impl MissionFilter {
    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Check one record against every set criterion
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(company) = &self.company {
            if record.field(COL_COMPANY) != company {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if record.field(COL_MISSION_STATUS) != status {
                return false;
            }
        }
        if let Some(start) = &self.start_date {
            if record.field(COL_DATE) < start.as_str() {
                return false;
            }
        }
        if let Some(end) = &self.end_date {
            if record.field(COL_DATE) > end.as_str() {
                return false;
            }
        }
        true
    }

    /// Produce the narrowed dataset
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        let records = dataset
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        Dataset::new(dataset.columns().to_vec(), records)
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Sort order for a table view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first
    #[default]
    Ascending,

    /// Largest value first
    Descending,
}

/// Sort configuration for a table view
///
/// Repeating the same key flips the direction; choosing a new key resets to
/// ascending. With no key set, a dataset passes through in its current
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortSpec {
    /// Column to sort by
    pub key: Option<String>,

    /// Direction applied to the key
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort spec from an explicit key and direction
    pub fn new(key: Option<String>, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Select a sort column, flipping direction on a repeated key
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) && self.direction == SortDirection::Ascending {
            self.direction = SortDirection::Descending;
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Produce the reordered dataset (stable sort)
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        let Some(key) = &self.key else {
            return dataset.clone();
        };

        let mut records = dataset.records().to_vec();
        records.sort_by(|a, b| {
            let ordering = a.field(key).cmp(b.field(key));
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        Dataset::new(dataset.columns().to_vec(), records)
    }
}

// =============================================================================
// Grouped Series and Summary
// =============================================================================

/// One point of the yearly launch time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    /// Four-character year prefix of the `Date` field
    pub year: String,

    /// Missions launched in that year
    pub count: usize,
}

/// One bar of the top-companies ranking series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub company: String,
    pub count: usize,
}

/// One slice of the status distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Raw status value as it appears in the data, recognized or not
    pub status: String,
    pub count: usize,
}

/// Headline numbers for the current view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Records in the view
    pub total: usize,

    /// Percentage of records with `Success` status, two decimal places
    pub success_rate: f64,
}

/// A render-ready slice of the current view
#[derive(Debug, Clone)]
pub struct TablePage {
    /// The first rows of the view, up to the cap
    pub rows: Vec<Record>,

    /// Total records in the view, for the "showing N of M" line
    pub total: usize,
}

/// Missions per launch year, ascending by year
///
/// Records with an empty `Date` are skipped; a date shorter than four
/// characters groups under its full value.
pub fn missions_per_year(dataset: &Dataset) -> Vec<YearCount> {
    let mut years: BTreeMap<String, usize> = BTreeMap::new();
    for record in dataset.iter() {
        let date = record.field(COL_DATE);
        if date.is_empty() {
            continue;
        }
        let year = date.get(0..4).unwrap_or(date);
        *years.entry(year.to_string()).or_insert(0) += 1;
    }

    years
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// The most active companies in the view, capped for charting
///
/// Same group/count/rank pattern as the top-N query, including the
/// ascending-alphabetical tie-break.
pub fn top_companies(dataset: &Dataset, limit: usize) -> Vec<CompanyCount> {
    let mut ranked = ranked_counts(dataset.iter().map(|record| record.field(COL_COMPANY)));
    ranked.truncate(limit);
    ranked
        .into_iter()
        .map(|(company, count)| CompanyCount { company, count })
        .collect()
}

/// Counts per raw status value, in first-seen order
///
/// Unlike the fixed four-key tally, this covers every status string present
/// in the view, including unrecognized ones.
pub fn status_distribution(dataset: &Dataset) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for record in dataset.iter() {
        let status = record.field(COL_MISSION_STATUS);
        match counts.iter_mut().find(|entry| entry.status == status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: status.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// Headline totals for the view
pub fn summary_stats(dataset: &Dataset) -> SummaryStats {
    let total = dataset.len();
    if total == 0 {
        return SummaryStats {
            total: 0,
            success_rate: 0.0,
        };
    }

    let successes = dataset
        .iter()
        .filter(|record| record.field(COL_MISSION_STATUS) == MissionStatus::Success.as_str())
        .count();

    SummaryStats {
        total,
        success_rate: round2(successes as f64 / total as f64 * 100.0),
    }
}

/// The first `cap` rows of the view plus its total count
pub fn table_page(dataset: &Dataset, cap: usize) -> TablePage {
    TablePage {
        rows: dataset.records().iter().take(cap).cloned().collect(),
        total: dataset.len(),
    }
}
