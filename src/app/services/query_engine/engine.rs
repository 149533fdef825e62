//! The eight query operations over an immutable dataset
//!
//! Each operation validates its arguments up front and returns a defined
//! neutral result (0, 0.0, empty sequence, empty string, or an all-zero
//! tally) on invalid input, so downstream rendering never has an error path
//! to handle. Rejections are logged at debug level for diagnosis.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::app::models::{Dataset, MissionStatus, Record, StatusTally};
use crate::constants::{
    COL_COMPANY, COL_DATE, COL_MISSION, COL_MISSION_STATUS, COL_ROCKET, MAX_YEAR, MIN_YEAR,
};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("ISO date pattern is valid"));

/// Check a date argument at the query boundary
///
/// Requires the exact `YYYY-MM-DD` shape and a real calendar date. Dates in
/// the dataset itself are never validated; this gate applies to query
/// arguments only, after which comparison stays lexicographic.
pub fn is_strict_iso_date(value: &str) -> bool {
    ISO_DATE_RE.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Analytical query operations over one immutable dataset
///
/// The engine borrows the dataset and never mutates it; each call is an
/// independent pass over the records. Construct a new engine after a
/// re-parse replaces the dataset.
#[derive(Debug)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over a parsed dataset
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Count missions whose `Company` exactly matches the given name
    ///
    /// A blank company name yields 0.
    pub fn mission_count_by_company(&self, company: &str) -> usize {
        if company.trim().is_empty() {
            debug!("mission_count_by_company: rejecting blank company name");
            return 0;
        }

        self.dataset
            .iter()
            .filter(|record| record.field(COL_COMPANY) == company)
            .count()
    }

    /// Percentage of a company's missions with `Success` status
    ///
    /// Rounded to two decimal places. A blank company name or a company
    /// with zero missions yields 0.0.
    pub fn success_rate(&self, company: &str) -> f64 {
        if company.trim().is_empty() {
            debug!("success_rate: rejecting blank company name");
            return 0.0;
        }

        let missions: Vec<&Record> = self
            .dataset
            .iter()
            .filter(|record| record.field(COL_COMPANY) == company)
            .collect();
        if missions.is_empty() {
            return 0.0;
        }

        let successes = missions
            .iter()
            .filter(|record| {
                record.field(COL_MISSION_STATUS) == MissionStatus::Success.as_str()
            })
            .count();

        round2(successes as f64 / missions.len() as f64 * 100.0)
    }

    /// Mission names launched within `[start, end]`, ascending by date
    ///
    /// Both bounds must be strict ISO dates with `start <= end`; otherwise
    /// the result is empty. Dates compare lexicographically, which matches
    /// chronological order for the ISO format.
    pub fn missions_in_date_range(&self, start: &str, end: &str) -> Vec<String> {
        if !is_strict_iso_date(start) || !is_strict_iso_date(end) {
            debug!(start, end, "missions_in_date_range: rejecting malformed date bound");
            return Vec::new();
        }
        if start > end {
            debug!(start, end, "missions_in_date_range: rejecting reversed range");
            return Vec::new();
        }

        let mut matches: Vec<&Record> = self
            .dataset
            .iter()
            .filter(|record| {
                let date = record.field(COL_DATE);
                date >= start && date <= end
            })
            .collect();
        matches.sort_by(|a, b| a.field(COL_DATE).cmp(b.field(COL_DATE)));

        matches
            .into_iter()
            .map(|record| record.field(COL_MISSION).to_string())
            .collect()
    }

    /// The `n` companies with the most missions
    ///
    /// Sorted by count descending; equal counts break ascending
    /// alphabetically by company name.
    pub fn top_companies_by_count(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = ranked_counts(self.dataset.iter().map(|record| record.field(COL_COMPANY)));
        ranked.truncate(n);
        ranked
    }

    /// Counts per recognized mission status
    ///
    /// Always returns all four keys, even at zero; unrecognized status
    /// values are not tallied.
    pub fn mission_status_tally(&self) -> StatusTally {
        let mut tally = StatusTally::new();
        for record in self.dataset.iter() {
            if let Some(status) = MissionStatus::classify(record.field(COL_MISSION_STATUS)) {
                tally.record(status);
            }
        }
        tally
    }

    /// Count missions whose `Date` starts with the given 4-digit year
    ///
    /// Years outside `[1900, 2100]` yield 0.
    pub fn missions_by_year(&self, year: i32) -> usize {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            debug!(year, "missions_by_year: rejecting out-of-range year");
            return 0;
        }

        let prefix = year.to_string();
        self.dataset
            .iter()
            .filter(|record| record.field(COL_DATE).starts_with(&prefix))
            .count()
    }

    /// The most frequently used rocket name
    ///
    /// Records with an empty `Rocket` field are ignored; equal counts break
    /// ascending alphabetically. Returns the empty string when no record
    /// carries a rocket name.
    pub fn most_used_rocket(&self) -> String {
        let ranked = ranked_counts(
            self.dataset
                .iter()
                .map(|record| record.field(COL_ROCKET))
                .filter(|rocket| !rocket.is_empty()),
        );

        ranked
            .into_iter()
            .next()
            .map(|(rocket, _)| rocket)
            .unwrap_or_default()
    }

    /// Mean missions per year over `[start_year, end_year]` inclusive
    ///
    /// Years with zero missions still count toward the divisor. Rounded to
    /// two decimal places. An inverted range or a bound outside
    /// `[1900, 2100]` yields 0.0.
    pub fn average_missions_per_year(&self, start_year: i32, end_year: i32) -> f64 {
        if start_year > end_year || start_year < MIN_YEAR || end_year > MAX_YEAR {
            debug!(
                start_year,
                end_year, "average_missions_per_year: rejecting invalid year range"
            );
            return 0.0;
        }

        let total = self
            .dataset
            .iter()
            .filter(|record| {
                launch_year(record)
                    .map(|year| year >= start_year && year <= end_year)
                    .unwrap_or(false)
            })
            .count();

        let years = (end_year - start_year + 1) as f64;
        round2(total as f64 / years)
    }
}

/// Group values, count them, and rank by count descending
///
/// Equal counts break ascending alphabetically; this is the uniform
/// tie-break shared by the top-companies ranking, the rocket mode, and the
/// chart groupings.
pub(crate) fn ranked_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Round half away from zero to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Extract the numeric launch year from a record's date prefix
fn launch_year(record: &Record) -> Option<i32> {
    record.field(COL_DATE).get(0..4).and_then(|s| s.parse().ok())
}
