//! The composition pipelines: caption generation and project page building.

pub mod captions;
pub mod projects;

pub use captions::{CaptionParams, CaptionReport, generate_captions};
pub use projects::{
    ProjectParams, ProjectReport, build_from_csv, build_project_pages, find_page_with_title,
};
