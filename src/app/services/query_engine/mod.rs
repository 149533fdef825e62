//! Query engine for parsed launch datasets
//!
//! This module provides the analytical operations over an immutable
//! [`Dataset`](crate::app::models::Dataset): counting, rate computation,
//! range filtering, ranking, status tallying, and multi-year averaging.
//! Every operation is a pure function of the dataset and its arguments;
//! invalid arguments produce documented neutral results instead of errors.
//!
//! ## Architecture
//!
//! - [`engine`] - The eight query operations and their shared helpers
//! - [`views`] - Derived presentation views (filter, sort, group, table page)
//!
//! ## Usage
//!
//! ```rust
//! use mission_analyzer::app::services::csv_parser::MissionCsvParser;
//! use mission_analyzer::app::services::query_engine::QueryEngine;
//!
//! let parsed = MissionCsvParser::new().parse(
//!     "Company,Date,MissionStatus\nSpaceX,2020-01-01,Success",
//! );
//! let engine = QueryEngine::new(&parsed.dataset);
//!
//! assert_eq!(engine.mission_count_by_company("SpaceX"), 1);
//! assert_eq!(engine.success_rate("SpaceX"), 100.0);
//! ```

pub mod engine;
pub mod views;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use engine::{QueryEngine, is_strict_iso_date};
pub use views::{
    CompanyCount, MissionFilter, SortDirection, SortSpec, StatusCount, SummaryStats, TablePage,
    YearCount,
};
