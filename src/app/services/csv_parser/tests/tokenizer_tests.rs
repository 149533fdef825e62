//! Tests for the character-scan line tokenizer

use crate::app::services::csv_parser::tokenizer::tokenize_line;

#[test]
fn test_simple_fields() {
    assert_eq!(
        tokenize_line("SpaceX,2020-01-01,Starlink-1"),
        vec!["SpaceX", "2020-01-01", "Starlink-1"]
    );
}

#[test]
fn test_quoted_field_keeps_embedded_comma() {
    assert_eq!(
        tokenize_line("SpaceX,\"Cape Canaveral, USA\",Success"),
        vec!["SpaceX", "Cape Canaveral, USA", "Success"]
    );
}

#[test]
fn test_quoted_field_alone() {
    assert_eq!(tokenize_line("\"Alpha, Beta\""), vec!["Alpha, Beta"]);
}

#[test]
fn test_fields_are_trimmed() {
    assert_eq!(
        tokenize_line("  SpaceX , 2020-01-01 ,Starlink-1  "),
        vec!["SpaceX", "2020-01-01", "Starlink-1"]
    );
}

#[test]
fn test_quoted_field_trims_outer_whitespace_only() {
    // Whitespace around the quotes is trimmed; interior spacing survives
    // because the quote characters are gone before the trim runs.
    assert_eq!(tokenize_line("  \"a,  b\"  "), vec!["a,  b"]);
}

#[test]
fn test_empty_fields() {
    assert_eq!(tokenize_line("a,,c"), vec!["a", "", "c"]);
    assert_eq!(tokenize_line(",,"), vec!["", "", ""]);
}

#[test]
fn test_trailing_comma_yields_trailing_empty_field() {
    assert_eq!(tokenize_line("a,b,"), vec!["a", "b", ""]);
}

#[test]
fn test_empty_line_yields_single_empty_field() {
    assert_eq!(tokenize_line(""), vec![""]);
}

#[test]
fn test_quote_characters_are_stripped() {
    assert_eq!(tokenize_line("\"SpaceX\",\"NASA\""), vec!["SpaceX", "NASA"]);
}

#[test]
fn test_unterminated_quote_swallows_rest_of_line() {
    // An unbalanced quote leaves the scanner in quoted mode, so the
    // remaining commas join the final field.
    assert_eq!(tokenize_line("a,\"b,c"), vec!["a", "b,c"]);
}

#[test]
fn test_carriage_return_is_trimmed() {
    assert_eq!(tokenize_line("a,b\r"), vec!["a", "b"]);
}
