//! Layout arithmetic: text-height estimation and column planning.

pub mod columns;
pub mod estimate;

pub use columns::{ColumnLayout, ColumnPlan, attribute_frame_bounds, plan_columns};
pub use estimate::estimate_height;
