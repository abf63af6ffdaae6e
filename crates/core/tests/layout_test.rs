//! Tests for height estimation and column planning.

use folio_core::document::LineMetrics;
use folio_core::geometry::Bounds;
use folio_core::layout::{
    ColumnLayout, attribute_frame_bounds, estimate_height, plan_columns,
};

fn line(baseline: f64, ascent: f64, descent: f64) -> LineMetrics {
    LineMetrics {
        baseline,
        ascent,
        descent,
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

fn assert_bounds(actual: Bounds, expected: Bounds) {
    assert_close(actual.top, expected.top);
    assert_close(actual.left, expected.left);
    assert_close(actual.bottom, expected.bottom);
    assert_close(actual.right, expected.right);
}

// ============================================================================
// estimate_height
// ============================================================================

#[test]
fn test_no_lines_is_zero() {
    assert_eq!(estimate_height(&[]), 0.0);
}

#[test]
fn test_single_line_is_ascent_plus_descent() {
    assert_close(estimate_height(&[line(0.0, 8.0, 2.0)]), 10.0);
}

#[test]
fn test_multiple_lines_span_first_to_last_baseline() {
    let lines = [line(0.0, 8.0, 2.0), line(15.0, 8.0, 2.0), line(30.0, 8.0, 2.0)];
    // The last line's descent and the first line's leading are ignored.
    assert_close(estimate_height(&lines), 30.0);
}

#[test]
fn test_two_lines() {
    assert_close(estimate_height(&[line(6.1, 0.1, 0.05), line(6.3, 0.1, 0.05)]), 0.2);
}

// ============================================================================
// plan_columns
// ============================================================================

#[test]
fn test_planner_halves_content_height_above_fixed_bottom() {
    let layout = ColumnLayout {
        bottom: 10.5,
        left: 0.25,
        width: 4.0,
        padding: 0.25,
    };
    let plan = plan_columns(4.0, &layout);

    assert_close(plan.height, 2.25);
    assert_close(plan.top, 8.25);
    assert_bounds(plan.first, Bounds::new(8.25, 0.25, 10.5, 4.25));
    assert_bounds(plan.second, Bounds::new(8.25, 4.25, 10.5, 8.25));
}

#[test]
fn test_zero_height_content_still_gets_padding() {
    let plan = plan_columns(0.0, &ColumnLayout::default());
    assert_close(plan.height, 0.25);
    assert_close(plan.top, 10.25);
}

#[test]
fn test_columns_abut_with_zero_gap() {
    let plan = plan_columns(1.5, &ColumnLayout::default());
    assert_close(plan.first.right, plan.second.left);
}

// ============================================================================
// attribute_frame_bounds
// ============================================================================

#[test]
fn test_attribute_frame_sits_above_columns() {
    let bounds = attribute_frame_bounds(8.25, 0.4375, 0.3, 0.25, 8.0);
    assert_bounds(bounds, Bounds::new(7.5125, 0.25, 7.8125, 8.25));
}

#[test]
fn test_attribute_frame_keeps_height() {
    let bounds = attribute_frame_bounds(9.0, 0.5, 1.25, 0.25, 8.0);
    assert_close(bounds.height(), 1.25);
}
