//! Analyze command implementation for the mission analyzer CLI
//!
//! This module builds the filtered, sorted view of the dataset and renders
//! the full analysis report in human-readable, JSON, or CSV form.

use std::time::Instant;

use serde_json::json;
use tracing::{debug, info};

use super::shared::{emit_output, load_dataset, setup_logging};
use crate::app::models::Dataset;
use crate::app::services::csv_parser::to_csv;
use crate::app::services::query_engine::views::{self, MissionFilter, SortDirection, SortSpec};
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::constants::TABLE_COLUMNS;
use crate::{Error, Result};

/// Analyze command runner
///
/// Loads the dataset, narrows and orders it per the CLI filters, and emits
/// the report in the requested format.
pub async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting mission analysis");
    debug!("Analyze arguments: {:?}", args);

    args.validate()?;

    let config = Config::load(args.config_file.as_deref())?;
    let top_n = args.top.unwrap_or(config.report.top_companies);
    let table_cap = config.report.table_row_cap;

    let parse_result = load_dataset(&args.input).await?;
    let dataset = parse_result.dataset;

    let filter = MissionFilter {
        company: args.company.clone(),
        status: args.status.clone(),
        start_date: args.start_date.clone(),
        end_date: args.end_date.clone(),
    };
    let filtered = filter.apply(&dataset);
    info!(
        "{} of {} missions match the filters",
        filtered.len(),
        dataset.len()
    );

    let direction = if args.descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    let sort = SortSpec::new(args.sort_by.clone(), direction);
    let view = sort.apply(&filtered);

    let report = match args.output_format {
        OutputFormat::Human => generate_human_report(&args, &dataset, &view, top_n, table_cap),
        OutputFormat::Json => generate_json_report(&args, &dataset, &view, top_n, table_cap)?,
        OutputFormat::Csv => to_csv(&view),
    };
    emit_output(&report, args.output_file.as_deref())?;

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Generate the human-readable analysis report
fn generate_human_report(
    args: &AnalyzeArgs,
    dataset: &Dataset,
    view: &Dataset,
    top_n: usize,
    table_cap: usize,
) -> String {
    let summary = views::summary_stats(view);

    let mut output = format!(
        "🚀 Space Mission Analysis Report\n\
         ================================\n\
         📁 Input: {}\n\
         🛰  Missions: {} loaded, {} in view\n\
         ✅ Success Rate: {:.2}%\n\
         \n",
        args.input.display(),
        dataset.len(),
        summary.total,
        summary.success_rate
    );

    if view.is_empty() {
        output.push_str("No missions match the specified filters.\n");
        return output;
    }

    // Yearly launch trend
    output.push_str("📅 Missions Per Year:\n");
    for point in views::missions_per_year(view) {
        output.push_str(&format!("   • {}: {} missions\n", point.year, point.count));
    }
    output.push('\n');

    // Company ranking
    output.push_str(&format!("🏆 Top {} Companies:\n", top_n));
    for bar in views::top_companies(view, top_n) {
        output.push_str(&format!("   • {}: {} missions\n", bar.company, bar.count));
    }
    output.push('\n');

    // Outcome distribution over raw status values
    output.push_str("📊 Status Distribution:\n");
    for slice in views::status_distribution(view) {
        let percentage = (slice.count as f64 / summary.total as f64) * 100.0;
        output.push_str(&format!(
            "   • {}: {} missions ({:.1}%)\n",
            slice.status, slice.count, percentage
        ));
    }
    output.push('\n');

    // Record table, capped for readability
    let page = views::table_page(view, table_cap);
    output.push_str(&format!("📋 Mission Data ({} missions):\n", page.total));
    output.push_str(
        "Company              | Date       | Mission                   | Rocket          | Status            | Location\n",
    );
    output.push_str(
        "---------------------|------------|---------------------------|-----------------|-------------------|---------------------------\n",
    );
    for record in &page.rows {
        output.push_str(&format!(
            "{:20} | {:10} | {:25} | {:15} | {:17} | {}\n",
            truncate_cell(record.field(TABLE_COLUMNS[0]), 20),
            truncate_cell(record.field(TABLE_COLUMNS[1]), 10),
            truncate_cell(record.field(TABLE_COLUMNS[2]), 25),
            truncate_cell(record.field(TABLE_COLUMNS[3]), 15),
            truncate_cell(record.field(TABLE_COLUMNS[4]), 17),
            record.field(TABLE_COLUMNS[5]),
        ));
    }
    if page.total > page.rows.len() {
        output.push_str(&format!(
            "\nShowing first {} of {} missions (use --format csv for the complete listing)\n",
            page.rows.len(),
            page.total
        ));
    }

    output
}

/// Generate the JSON analysis report
fn generate_json_report(
    args: &AnalyzeArgs,
    dataset: &Dataset,
    view: &Dataset,
    top_n: usize,
    table_cap: usize,
) -> Result<String> {
    let summary = views::summary_stats(view);
    let page = views::table_page(view, table_cap);

    let rows: Vec<_> = page
        .rows
        .iter()
        .map(|record| {
            let mut row = serde_json::Map::new();
            for column in view.columns() {
                row.insert(column.clone(), json!(record.field(column)));
            }
            serde_json::Value::Object(row)
        })
        .collect();

    let report = json!({
        "metadata": {
            "input": args.input.display().to_string(),
            "records_loaded": dataset.len(),
            "records_in_view": view.len(),
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        },
        "filters_applied": {
            "company": args.company,
            "status": args.status,
            "start_date": args.start_date,
            "end_date": args.end_date
        },
        "sort": {
            "key": args.sort_by,
            "descending": args.descending
        },
        "summary": summary,
        "missions_per_year": views::missions_per_year(view),
        "top_companies": views::top_companies(view, top_n),
        "status_distribution": views::status_distribution(view),
        "table": {
            "total": page.total,
            "rows": rows
        }
    });

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))
}

/// Shorten a cell value to fit its table column
fn truncate_cell(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let kept: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}
