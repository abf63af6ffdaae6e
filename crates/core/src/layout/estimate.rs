//! Rendered-text height estimation from line metrics.

use crate::document::LineMetrics;

/// Estimates the total block height of rendered text from the lines the
/// measuring host reports.
///
/// Zero lines measure 0. A single line measures ascent + descent. Multiple
/// lines measure last baseline minus first baseline, which ignores the final
/// line's descent and the first line's leading. Downstream column sizing is
/// calibrated against exactly this arithmetic, so the asymmetry stays.
pub fn estimate_height(lines: &[LineMetrics]) -> f64 {
    match lines {
        [] => 0.0,
        [only] => only.ascent + only.descent,
        [first, .., last] => last.baseline - first.baseline,
    }
}
