//! Test utilities and fixtures for query engine testing

use crate::app::models::Dataset;
use crate::app::services::csv_parser::MissionCsvParser;

mod views_tests;

/// Helper to build a dataset from inline CSV text
pub fn dataset_from_csv(text: &str) -> Dataset {
    MissionCsvParser::new().parse(text).dataset
}

/// Helper to build the three-mission reference dataset
pub fn create_scenario_dataset() -> Dataset {
    dataset_from_csv(
        "Company,Date,Mission,Rocket,MissionStatus\n\
         SpaceX,2020-01-01,Starlink-1,Falcon 9,Success\n\
         SpaceX,2020-06-01,Demo-2,Falcon 9,Failure\n\
         NASA,2020-03-01,Artemis Test,SLS,Success\n",
    )
}
