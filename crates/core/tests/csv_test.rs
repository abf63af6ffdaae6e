//! Tests for the CSV line parser and record table parser.

use folio_core::parser::csv::{parse_line, parse_records};

// ============================================================================
// parse_line - field splitting
// ============================================================================

#[test]
fn test_plain_fields() {
    assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn test_quoted_comma_is_literal() {
    assert_eq!(parse_line("a,\"b,c\",d"), vec!["a", "b,c", "d"]);
}

#[test]
fn test_quotes_are_never_emitted() {
    assert_eq!(parse_line("\"a\"b"), vec!["ab"]);
}

#[test]
fn test_empty_line_yields_no_fields() {
    assert!(parse_line("").is_empty());
}

#[test]
fn test_trailing_empty_field_is_dropped() {
    // Intended behavior: the final field is appended only if non-empty.
    assert_eq!(parse_line("a,"), vec!["a"]);
    assert_eq!(parse_line("a,b,"), vec!["a", "b"]);
}

#[test]
fn test_interior_empty_fields_are_kept() {
    assert_eq!(parse_line("a,,b"), vec!["a", "", "b"]);
    assert_eq!(parse_line(",a"), vec!["", "a"]);
}

#[test]
fn test_unbalanced_quote_does_not_fail() {
    // The in-quote flag just stays on for the rest of the scan, so the
    // remaining commas are literal.
    assert_eq!(parse_line("a,\"b,c"), vec!["a", "b,c"]);
}

#[test]
fn test_whitespace_is_not_trimmed() {
    assert_eq!(parse_line(" a , b"), vec![" a ", " b"]);
}

// ============================================================================
// parse_records - header zipping
// ============================================================================

#[test]
fn test_records_zip_header_with_rows() {
    let records = parse_records("title,owner\nAlpha,Jane\nBeta,Bob");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title(), Some("Alpha"));
    assert_eq!(records[0].get("owner"), Some("Jane"));
    assert_eq!(records[1].title(), Some("Beta"));
}

#[test]
fn test_short_row_leaves_attributes_absent() {
    let records = parse_records("title,owner,budget\nAlpha,Jane");
    assert_eq!(records[0].get("budget"), None);
    assert_eq!(records[0].len(), 2);
}

#[test]
fn test_blank_trailing_line_becomes_empty_record() {
    let records = parse_records("title\nAlpha\n");
    assert_eq!(records.len(), 2);
    assert!(records[1].is_empty());
}

#[test]
fn test_empty_input_yields_no_records() {
    assert!(parse_records("").is_empty());
}

#[test]
fn test_quoted_title_with_comma() {
    let records = parse_records("title,owner\n\"Alpha, the first\",Jane");
    assert_eq!(records[0].title(), Some("Alpha, the first"));
}
