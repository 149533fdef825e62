//! Test utilities and fixtures for mission CSV parser testing

use std::io::Write;
use tempfile::NamedTempFile;

mod tokenizer_tests;

/// Helper to create a complete test launch dataset
pub fn create_test_missions_csv() -> String {
    "Company,Date,Mission,Rocket,MissionStatus,Location\n\
     SpaceX,2020-01-01,Starlink-1,Falcon 9,Success,\"Cape Canaveral, USA\"\n\
     SpaceX,2020-06-01,Demo-2,Falcon 9,Failure,\"Cape Canaveral, USA\"\n\
     NASA,2020-03-01,Artemis Test,SLS,Success,\"Kennedy Space Center, USA\"\n"
        .to_string()
}

/// Helper to create a temporary file with the given suffix and content
pub fn create_temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
