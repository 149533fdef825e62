//! Character-scan tokenizer for one delimited line
//!
//! The same tokenization is applied to the header line and to every data
//! line: a double quote toggles quoted mode without being kept, a comma
//! outside quoted mode ends the current field, and every other character
//! accumulates. There is no escaped-quote support.

/// Split one line into field values
///
/// A comma inside a quoted region is part of the field, not a separator.
/// Each completed field is finalized with [`finalize_field`], so fields are
/// trimmed and stripped of one enclosing quote pair. An empty line yields a
/// single empty field, mirroring the flush of the final accumulator.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(finalize_field(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(finalize_field(&current));

    fields
}

/// Finalize an accumulated field value
///
/// Trims surrounding whitespace, then strips at most one leading and one
/// trailing literal quote. The quote stripping is redundant with the
/// toggle-based removal in [`tokenize_line`] and kept as a harmless second
/// pass; interior spacing inside a quoted field survives because the trim
/// runs after the quote characters are already gone.
fn finalize_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.to_string()
}
