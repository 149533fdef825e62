//! Shared components for CLI commands
//!
//! This module contains the logging setup, dataset loading, and report
//! emission helpers used by both subcommands.

use std::path::Path;
use tracing::{debug, info};

use crate::app::services::csv_parser::{MissionCsvParser, ParseResult};
use crate::{Error, Result};

/// Set up structured logging from the resolved verbosity level
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mission_analyzer={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load and parse the input dataset
///
/// Runs the extension gate, awaits the single file read, and rejects files
/// with no data rows; no dataset is installed on any failure path.
pub async fn load_dataset(path: &Path) -> Result<ParseResult> {
    let parser = MissionCsvParser::new();
    let result = parser.parse_file(path).await?;

    info!(
        "Loaded {} missions from {}",
        result.dataset.len(),
        path.display()
    );
    if result.stats.blank_lines_skipped > 0 {
        debug!(
            "Skipped {} blank lines while parsing",
            result.stats.blank_lines_skipped
        );
    }

    Ok(result)
}

/// Write report output to a file, or print it to stdout
pub fn emit_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                Error::io(format!("Failed to write report to {}", path.display()), e)
            })?;
            info!("Report written to: {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }

    Ok(())
}
