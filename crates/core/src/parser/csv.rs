//! Line-based CSV parsing for project tables.
//!
//! The dialect is deliberately small: double quotes toggle a literal-comma
//! mode and are never emitted, there is no doubled-quote escaping, no
//! embedded newlines (input is pre-split on bare `\n`), and no whitespace
//! trimming.

use crate::record::ProjectRecord;

/// Parses one line into its fields.
///
/// A single left-to-right scan with one in-quote flag. A quote toggles the
/// flag; a comma separates fields only while the flag is off; every other
/// character accumulates into the current field. An unbalanced quote is not
/// an error, the flag just stays on for the rest of the scan.
///
/// The final field is appended only if non-empty, so a line ending in a
/// separator drops its trailing empty field. Interior empty fields are kept.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quote = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quote = !in_quote,
            ',' if !in_quote => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    if !field.is_empty() {
        fields.push(field);
    }
    fields
}

/// Parses a whole CSV table: first line is the header row, each following
/// line one record.
///
/// Splits on bare `\n` only; a `\r` left by CRLF input stays in the field.
/// Rows shorter than the header leave the trailing attributes absent. Blank
/// lines become empty records, which the pipeline skips for want of a title.
pub fn parse_records(content: &str) -> Vec<ProjectRecord> {
    let mut lines = content.split('\n');
    let headers = match lines.next() {
        Some(header) => parse_line(header),
        None => return Vec::new(),
    };
    lines
        .map(|line| ProjectRecord::from_row(&headers, parse_line(line)))
        .collect()
}
