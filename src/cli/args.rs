//! Command-line argument definitions for the mission analyzer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::MissionStatus;
use crate::app::services::query_engine::is_strict_iso_date;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the mission analyzer
///
/// Parses spaceflight launch CSV datasets and computes mission statistics,
/// rankings, and filtered views.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mission-analyzer",
    version,
    about = "Analyze spaceflight launch CSV datasets",
    long_about = "Parses a spaceflight launch dataset from CSV and computes mission counts, \
                  success rates, rankings, status tallies, and yearly trends. Reports can be \
                  filtered by company, status, and date range, sorted by any column, and \
                  emitted as human-readable text, JSON, or CSV."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the mission analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Produce a full analysis report over a (optionally filtered) dataset
    Analyze(AnalyzeArgs),
    /// Run a single query operation and print its result
    Query(QueryArgs),
}

/// Arguments for the analyze command (full report)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input CSV file with launch data
    ///
    /// Must have a header row naming the columns. Only .csv files are
    /// accepted; .numbers spreadsheets must be exported as CSV first.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input CSV file with launch data"
    )]
    pub input: PathBuf,

    /// Only include missions launched by this company
    #[arg(long = "company", value_name = "NAME")]
    pub company: Option<String>,

    /// Only include missions with this outcome status
    ///
    /// One of: Success, Failure, Partial Failure, Prelaunch Failure
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<String>,

    /// Only include missions launched on or after this date (YYYY-MM-DD)
    #[arg(long = "start-date", value_name = "DATE")]
    pub start_date: Option<String>,

    /// Only include missions launched on or before this date (YYYY-MM-DD)
    #[arg(long = "end-date", value_name = "DATE")]
    pub end_date: Option<String>,

    /// Sort the report table by this column
    #[arg(long = "sort-by", value_name = "COLUMN")]
    pub sort_by: Option<String>,

    /// Sort the report table in descending order
    #[arg(long = "descending", requires = "sort_by")]
    pub descending: bool,

    /// Number of companies to show in the ranking section
    ///
    /// Overrides the configured default (10).
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the report
    ///
    /// If not specified, outputs to stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for report defaults.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the query command (single operation)
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    /// Input CSV file with launch data
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input CSV file with launch data"
    )]
    pub input: PathBuf,

    /// Query operation to run
    #[arg(value_enum)]
    pub operation: QueryOperation,

    /// Company name for company-based operations
    #[arg(long = "company", value_name = "NAME")]
    pub company: Option<String>,

    /// Range start date (YYYY-MM-DD) for date-range
    #[arg(long = "start-date", value_name = "DATE")]
    pub start_date: Option<String>,

    /// Range end date (YYYY-MM-DD) for date-range
    #[arg(long = "end-date", value_name = "DATE")]
    pub end_date: Option<String>,

    /// Ranking size for top-companies
    #[arg(short = 'n', long = "n", value_name = "N")]
    pub n: Option<usize>,

    /// Year for missions-by-year
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// Range start year for average-missions-per-year
    #[arg(long = "start-year", value_name = "YEAR")]
    pub start_year: Option<i32>,

    /// Range end year for average-missions-per-year
    #[arg(long = "end-year", value_name = "YEAR")]
    pub end_year: Option<i32>,

    /// Emit the result as JSON instead of plain text
    #[arg(long = "json")]
    pub json: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the analyze report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV export of the filtered, sorted view
    Csv,
}

/// The eight query operations exposed by the query command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryOperation {
    /// Count missions for a company (requires --company)
    MissionCount,
    /// Success percentage for a company (requires --company)
    SuccessRate,
    /// Mission names within a date range (requires --start-date, --end-date)
    DateRange,
    /// Most active companies (requires --n)
    TopCompanies,
    /// Counts per recognized mission status
    StatusTally,
    /// Mission count for one year (requires --year)
    MissionsByYear,
    /// Most frequently used rocket
    MostUsedRocket,
    /// Mean missions per year over a range (requires --start-year, --end-year)
    AverageMissionsPerYear,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        // Filter dates are a usability check here; the filter itself stays
        // permissive like the engine's derived views.
        if let Some(start) = &self.start_date {
            if !is_strict_iso_date(start) {
                return Err(Error::data_validation(format!(
                    "Invalid start date '{}': expected YYYY-MM-DD",
                    start
                )));
            }
        }

        if let Some(end) = &self.end_date {
            if !is_strict_iso_date(end) {
                return Err(Error::data_validation(format!(
                    "Invalid end date '{}': expected YYYY-MM-DD",
                    end
                )));
            }
        }

        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            if start > end {
                return Err(Error::data_validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }

        if let Some(status) = &self.status {
            MissionStatus::from_str(status)?;
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl QueryArgs {
    /// Validate that the arguments the chosen operation needs are present
    ///
    /// Presence only: argument values flow to the engine, which applies the
    /// documented neutral-result behavior to anything invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        match self.operation {
            QueryOperation::MissionCount | QueryOperation::SuccessRate => {
                if self.company.is_none() {
                    return Err(Error::configuration(
                        "This operation requires --company".to_string(),
                    ));
                }
            }
            QueryOperation::DateRange => {
                if self.start_date.is_none() || self.end_date.is_none() {
                    return Err(Error::configuration(
                        "date-range requires --start-date and --end-date".to_string(),
                    ));
                }
            }
            QueryOperation::TopCompanies => {
                if self.n.is_none() {
                    return Err(Error::configuration(
                        "top-companies requires --n".to_string(),
                    ));
                }
            }
            QueryOperation::MissionsByYear => {
                if self.year.is_none() {
                    return Err(Error::configuration(
                        "missions-by-year requires --year".to_string(),
                    ));
                }
            }
            QueryOperation::AverageMissionsPerYear => {
                if self.start_year.is_none() || self.end_year.is_none() {
                    return Err(Error::configuration(
                        "average-missions-per-year requires --start-year and --end-year"
                            .to_string(),
                    ));
                }
            }
            QueryOperation::StatusTally | QueryOperation::MostUsedRocket => {}
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_test_csv() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        writeln!(file, "Company,Date\nSpaceX,2020-01-01").unwrap();
        file
    }

    fn analyze_args(input: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            input,
            company: None,
            status: None,
            start_date: None,
            end_date: None,
            sort_by: None,
            descending: false,
            top: None,
            output_format: OutputFormat::Human,
            output_file: None,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }

    fn query_args(input: PathBuf, operation: QueryOperation) -> QueryArgs {
        QueryArgs {
            input,
            operation,
            company: None,
            start_date: None,
            end_date: None,
            n: None,
            year: None,
            start_year: None,
            end_year: None,
            json: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_analyze_args_validation() {
        let file = create_test_csv();
        let args = analyze_args(file.path().to_path_buf());
        assert!(args.validate().is_ok());

        // Nonexistent input
        let mut invalid = args.clone();
        invalid.input = PathBuf::from("/nonexistent/missions.csv");
        assert!(invalid.validate().is_err());

        // Malformed filter date
        let mut invalid = args.clone();
        invalid.start_date = Some("2020-13-01".to_string());
        assert!(invalid.validate().is_err());

        // Reversed filter range
        let mut invalid = args.clone();
        invalid.start_date = Some("2020-06-01".to_string());
        invalid.end_date = Some("2020-01-01".to_string());
        assert!(invalid.validate().is_err());

        // Unknown status
        let mut invalid = args.clone();
        invalid.status = Some("Exploded".to_string());
        assert!(invalid.validate().is_err());

        // Recognized status
        let mut valid = args.clone();
        valid.status = Some("Partial Failure".to_string());
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_analyze_log_level() {
        let file = create_test_csv();
        let mut args = analyze_args(file.path().to_path_buf());

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_query_args_required_flags() {
        let file = create_test_csv();

        let mut args = query_args(file.path().to_path_buf(), QueryOperation::MissionCount);
        assert!(args.validate().is_err());
        args.company = Some("SpaceX".to_string());
        assert!(args.validate().is_ok());

        let mut args = query_args(file.path().to_path_buf(), QueryOperation::DateRange);
        args.start_date = Some("2020-01-01".to_string());
        assert!(args.validate().is_err());
        args.end_date = Some("2020-06-01".to_string());
        assert!(args.validate().is_ok());

        let mut args = query_args(file.path().to_path_buf(), QueryOperation::TopCompanies);
        assert!(args.validate().is_err());
        args.n = Some(5);
        assert!(args.validate().is_ok());

        let args = query_args(file.path().to_path_buf(), QueryOperation::StatusTally);
        assert!(args.validate().is_ok());

        let args = query_args(file.path().to_path_buf(), QueryOperation::MostUsedRocket);
        assert!(args.validate().is_ok());

        let mut args = query_args(
            file.path().to_path_buf(),
            QueryOperation::AverageMissionsPerYear,
        );
        args.start_year = Some(2019);
        assert!(args.validate().is_err());
        args.end_year = Some(2021);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = Args::parse_from([
            "mission-analyzer",
            "analyze",
            "--input",
            "missions.csv",
            "--company",
            "SpaceX",
            "--format",
            "json",
        ]);
        match args.get_command() {
            Commands::Analyze(analyze) => {
                assert_eq!(analyze.input, PathBuf::from("missions.csv"));
                assert_eq!(analyze.company.as_deref(), Some("SpaceX"));
                assert_eq!(analyze.output_format, OutputFormat::Json);
            }
            _ => panic!("expected analyze subcommand"),
        }

        let args = Args::parse_from([
            "mission-analyzer",
            "query",
            "top-companies",
            "--input",
            "missions.csv",
            "-n",
            "3",
        ]);
        match args.get_command() {
            Commands::Query(query) => {
                assert_eq!(query.operation, QueryOperation::TopCompanies);
                assert_eq!(query.n, Some(3));
            }
            _ => panic!("expected query subcommand"),
        }
    }
}
