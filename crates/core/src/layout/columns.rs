//! Two-column description layout planning.

use crate::geometry::Bounds;

/// Column constants for the description area at the foot of a page.
///
/// Defaults place two 4-unit columns side by side with no gap, anchored
/// 0.25 units above the bottom of an 11-unit page.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Fixed bottom edge both columns are anchored to.
    pub bottom: f64,

    /// Left edge of the first column.
    pub left: f64,

    /// Width of each column.
    pub width: f64,

    /// Extra height added on top of the halved content height to absorb
    /// paragraph spacing.
    pub padding: f64,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            bottom: 10.5,
            left: 0.25,
            width: 4.0,
            padding: 0.25,
        }
    }
}

/// The planner's output: the shared column height and top edge, and the two
/// column rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPlan {
    pub height: f64,
    pub top: f64,
    pub first: Bounds,
    pub second: Bounds,
}

/// Plans two side-by-side columns for content of the given estimated height.
///
/// The height is halved because the content threads across both columns and
/// is expected to split roughly evenly. Columns grow upward from the fixed
/// bottom edge; a tall enough block pushes the top edge above the page top
/// without clamping.
pub fn plan_columns(content_height: f64, layout: &ColumnLayout) -> ColumnPlan {
    let height = content_height / 2.0 + layout.padding;
    let top = layout.bottom - height;
    let first = Bounds::new(top, layout.left, layout.bottom, layout.left + layout.width);
    let second = Bounds::new(
        top,
        layout.left + layout.width,
        layout.bottom,
        layout.left + 2.0 * layout.width,
    );
    ColumnPlan {
        height,
        top,
        first,
        second,
    }
}

/// Bounds for the attribute frame repositioned to sit directly above the
/// description columns: its bottom edge lands `block_gap` above the column
/// top, keeping the frame's pre-existing height and horizontal span.
pub fn attribute_frame_bounds(
    column_top: f64,
    block_gap: f64,
    frame_height: f64,
    left: f64,
    width: f64,
) -> Bounds {
    let bottom = column_top - block_gap;
    Bounds::new(bottom - frame_height, left, bottom, left + width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_share_an_edge() {
        let plan = plan_columns(3.0, &ColumnLayout::default());
        assert_eq!(plan.first.right, plan.second.left);
        assert_eq!(plan.first.top, plan.second.top);
        assert_eq!(plan.first.bottom, plan.second.bottom);
    }

    #[test]
    fn tall_content_is_not_clamped() {
        let plan = plan_columns(30.0, &ColumnLayout::default());
        assert!(plan.top < 0.0);
    }
}
