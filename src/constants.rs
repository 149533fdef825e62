//! Application constants for mission analysis
//!
//! This module contains the recognized dataset column names, mission status
//! labels, validation bounds, and report defaults used throughout the
//! mission analyzer.

// =============================================================================
// Dataset Column Names
// =============================================================================

/// Column holding the launch operator name
pub const COL_COMPANY: &str = "Company";

/// Column holding the launch date as an ISO `YYYY-MM-DD` string
pub const COL_DATE: &str = "Date";

/// Column holding the mission name
pub const COL_MISSION: &str = "Mission";

/// Column holding the rocket (vehicle) name
pub const COL_ROCKET: &str = "Rocket";

/// Column holding the mission outcome status
pub const COL_MISSION_STATUS: &str = "MissionStatus";

/// Column holding the launch site description
pub const COL_LOCATION: &str = "Location";

/// Columns shown in the report table, in display order
pub const TABLE_COLUMNS: &[&str] = &[
    COL_COMPANY,
    COL_DATE,
    COL_MISSION,
    COL_ROCKET,
    COL_MISSION_STATUS,
    COL_LOCATION,
];

// =============================================================================
// Mission Status Labels
// =============================================================================

/// Canonical status labels as they appear in the dataset
pub mod status_labels {
    /// Mission achieved its objectives
    pub const SUCCESS: &str = "Success";

    /// Mission failed after launch
    pub const FAILURE: &str = "Failure";

    /// Mission partially achieved its objectives
    pub const PARTIAL_FAILURE: &str = "Partial Failure";

    /// Mission failed before launch
    pub const PRELAUNCH_FAILURE: &str = "Prelaunch Failure";
}

// =============================================================================
// Validation Bounds
// =============================================================================

/// Earliest year accepted by year-based queries
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted by year-based queries
pub const MAX_YEAR: i32 = 2100;

// =============================================================================
// File Extensions
// =============================================================================

/// The only input extension the loader accepts
pub const CSV_EXTENSION: &str = "csv";

/// Spreadsheet extension rejected with re-export guidance
pub const NUMBERS_EXTENSION: &str = "numbers";

// =============================================================================
// Report Defaults
// =============================================================================

/// Maximum number of rows shown in the report table
pub const TABLE_ROW_CAP: usize = 100;

/// Number of companies shown in the top-companies ranking
pub const DEFAULT_TOP_COMPANIES: usize = 10;
