//! Input parsing for the composition pipelines.

pub mod csv;
