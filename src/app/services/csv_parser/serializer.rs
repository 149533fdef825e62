//! Dataset serialization back to delimited text
//!
//! Fields are quoted only when they contain the delimiter, which is exactly
//! the set of values the tokenizer needs quotes to round-trip. Embedded
//! quote characters are not escaped, matching the parser's no-escape
//! tokenization.

use crate::app::models::Dataset;

/// Serialize a dataset back to comma-delimited text
///
/// Emits the header row followed by every record, with each row's cells in
/// header column order. Values parsed from a well-formed file round-trip
/// exactly, with or without embedded commas.
pub fn to_csv(dataset: &Dataset) -> String {
    let mut output = String::new();

    let header: Vec<String> = dataset.columns().iter().map(|c| escape_field(c)).collect();
    output.push_str(&header.join(","));
    output.push('\n');

    for record in dataset.iter() {
        let row: Vec<String> = dataset
            .columns()
            .iter()
            .map(|column| escape_field(record.field(column)))
            .collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}

/// Quote a field value when it contains the delimiter
fn escape_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
