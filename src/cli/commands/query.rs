//! Query command implementation for the mission analyzer CLI
//!
//! Runs exactly one of the eight query operations over the loaded dataset
//! and prints the result, either as plain text or as a small JSON document.

use serde_json::json;
use tracing::debug;

use super::shared::{load_dataset, setup_logging};
use crate::app::services::query_engine::QueryEngine;
use crate::cli::args::{QueryArgs, QueryOperation};
use crate::{Error, Result};

/// Query command runner
pub async fn run_query(args: QueryArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;
    debug!("Query arguments: {:?}", args);

    args.validate()?;

    let parse_result = load_dataset(&args.input).await?;
    let engine = QueryEngine::new(&parse_result.dataset);

    // validate() guarantees the per-operation arguments are present; any
    // invalid value still flows to the engine, which answers with its
    // documented neutral result.
    let (operation, result, rendered) = match args.operation {
        QueryOperation::MissionCount => {
            let company = args.company.as_deref().unwrap_or_default();
            let count = engine.mission_count_by_company(company);
            (
                "mission-count",
                json!(count),
                format!("{}: {} missions", company, count),
            )
        }
        QueryOperation::SuccessRate => {
            let company = args.company.as_deref().unwrap_or_default();
            let rate = engine.success_rate(company);
            (
                "success-rate",
                json!(rate),
                format!("{}: {:.2}% success rate", company, rate),
            )
        }
        QueryOperation::DateRange => {
            let start = args.start_date.as_deref().unwrap_or_default();
            let end = args.end_date.as_deref().unwrap_or_default();
            let missions = engine.missions_in_date_range(start, end);
            let rendered = if missions.is_empty() {
                format!("No missions between {} and {}", start, end)
            } else {
                missions.join("\n")
            };
            ("date-range", json!(missions), rendered)
        }
        QueryOperation::TopCompanies => {
            let n = args.n.unwrap_or_default();
            let ranking = engine.top_companies_by_count(n);
            let rendered = ranking
                .iter()
                .enumerate()
                .map(|(rank, (company, count))| {
                    format!("{}. {}: {} missions", rank + 1, company, count)
                })
                .collect::<Vec<_>>()
                .join("\n");
            ("top-companies", json!(ranking), rendered)
        }
        QueryOperation::StatusTally => {
            let tally = engine.mission_status_tally();
            let rendered = tally
                .as_pairs()
                .iter()
                .map(|(status, count)| format!("{}: {}", status, count))
                .collect::<Vec<_>>()
                .join("\n");
            ("status-tally", json!(tally), rendered)
        }
        QueryOperation::MissionsByYear => {
            let year = args.year.unwrap_or_default();
            let count = engine.missions_by_year(year);
            (
                "missions-by-year",
                json!(count),
                format!("{}: {} missions", year, count),
            )
        }
        QueryOperation::MostUsedRocket => {
            let rocket = engine.most_used_rocket();
            let rendered = if rocket.is_empty() {
                "No rocket data available".to_string()
            } else {
                rocket.clone()
            };
            ("most-used-rocket", json!(rocket), rendered)
        }
        QueryOperation::AverageMissionsPerYear => {
            let start_year = args.start_year.unwrap_or_default();
            let end_year = args.end_year.unwrap_or_default();
            let average = engine.average_missions_per_year(start_year, end_year);
            (
                "average-missions-per-year",
                json!(average),
                format!(
                    "{:.2} missions per year over {}-{}",
                    average, start_year, end_year
                ),
            )
        }
    };

    if args.json {
        let document = json!({ "operation": operation, "result": result });
        let output = serde_json::to_string_pretty(&document)
            .map_err(|e| Error::configuration(format!("Failed to serialize result: {}", e)))?;
        println!("{}", output);
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
