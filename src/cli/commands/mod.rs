//! Command implementations for the mission analyzer CLI
//!
//! This module contains the command execution logic and shared plumbing for
//! the CLI interface. Each command is implemented in its own module:
//! - `analyze`: full report over a filtered, sorted view of the dataset
//! - `query`: a single query operation with a scalar or sequence result

pub mod analyze;
pub mod query;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the mission analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Analyze(analyze_args) => analyze::run_analyze(analyze_args).await,
        Commands::Query(query_args) => query::run_query(query_args).await,
    }
}
