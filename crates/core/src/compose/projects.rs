//! Project page building from CSV records and Markdown descriptions.
//!
//! Each CSV record is matched to the page already carrying its title text.
//! The page gets a fresh title frame, a tab-separated attribute table, and,
//! when a description file exists, a pair of threaded text columns sized
//! from the measured description height.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::document::{DocumentModel, PageId};
use crate::error::Result;
use crate::geometry::Bounds;
use crate::layout::{ColumnLayout, attribute_frame_bounds, estimate_height, plan_columns};
use crate::naming::{format_attribute, is_skipped_attribute};
use crate::parser::csv::parse_records;
use crate::record::ProjectRecord;

/// Options for a project-layout run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectParams {
    /// Layer generated items land on; its items on a matched page are
    /// removed before the page is rebuilt.
    pub layer_name: String,

    /// Font applied to the generated frames, looked up by name.
    pub font_name: String,

    pub title_style: String,
    pub title_point_size: f64,
    pub title_bounds: Bounds,

    pub attribute_style: String,
    pub attribute_point_size: f64,

    /// Top edge of the attribute frame before it is repositioned.
    pub attribute_top: f64,

    /// Seed height of the attribute frame; kept when the table is empty.
    pub attribute_seed_height: f64,

    /// Left edge shared by the attribute frame and the columns.
    pub frame_left: f64,

    /// Width of the title and attribute frames.
    pub frame_width: f64,

    /// Bounds the description is measured in before the columns are planned.
    pub probe_bounds: Bounds,

    pub columns: ColumnLayout,

    /// Vertical gap between the attribute frame and the description columns.
    pub block_gap: f64,

    /// Directory holding one `<title>/description.md` per project. The
    /// title is used verbatim as a path segment.
    pub content_root: PathBuf,

    /// File name of the description inside each project directory.
    pub description_file: String,
}

impl Default for ProjectParams {
    fn default() -> Self {
        Self {
            layer_name: "scripted".to_string(),
            font_name: "Arial".to_string(),
            title_style: "ProjectTitle".to_string(),
            title_point_size: 14.0,
            title_bounds: Bounds::new(0.25, 0.25, 0.75, 8.25),
            attribute_style: "LeaderDotsStyle".to_string(),
            attribute_point_size: 9.0,
            attribute_top: 6.0,
            attribute_seed_height: 3.0,
            frame_left: 0.25,
            frame_width: 8.0,
            probe_bounds: Bounds::new(0.0, 0.25, 10.0, 4.25),
            columns: ColumnLayout::default(),
            block_gap: 0.4375,
            content_root: PathBuf::from("original_content"),
            description_file: "description.md".to_string(),
        }
    }
}

/// What a project run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectReport {
    /// Pages rebuilt.
    pub built: usize,

    /// Records skipped: no title column, or no page carries the title.
    pub skipped: usize,
}

/// First page whose text frames include one whose full contents exactly
/// equal the title. Case-sensitive, no trimming; document order decides
/// ties.
pub fn find_page_with_title(doc: &impl DocumentModel, title: &str) -> Result<Option<PageId>> {
    for page in doc.pages() {
        if doc.frame_texts(page)?.iter().any(|text| text == title) {
            return Ok(Some(page));
        }
    }
    Ok(None)
}

/// The attribute table text: one `Name\tValue\r` line per attribute in
/// record order, skip-listed keys and empty values omitted, names run
/// through the display formatter.
pub fn attribute_table(record: &ProjectRecord) -> String {
    let mut contents = String::new();
    for (key, value) in record.attributes() {
        if is_skipped_attribute(key) || value.is_empty() {
            continue;
        }
        contents.push_str(&format_attribute(key));
        contents.push('\t');
        contents.push_str(value);
        contents.push('\r');
    }
    contents
}

/// Reads a project's description file, treating a missing file as an empty
/// description. Any other read failure is fatal.
pub fn load_description(params: &ProjectParams, title: &str) -> Result<String> {
    let path = params.content_root.join(title).join(&params.description_file);
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no description file");
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Reads and parses the CSV file, then builds every record's page.
pub fn build_from_csv(
    doc: &mut impl DocumentModel,
    csv_path: &Path,
    params: &ProjectParams,
) -> Result<ProjectReport> {
    let content = fs::read_to_string(csv_path)?;
    build_project_pages(doc, parse_records(&content), params)
}

/// Builds a page layout for each record.
///
/// Records without a matching page are skipped silently. A host failure
/// aborts the run; frames already placed stay in the document.
pub fn build_project_pages(
    doc: &mut impl DocumentModel,
    records: Vec<ProjectRecord>,
    params: &ProjectParams,
) -> Result<ProjectReport> {
    let layer = match doc.find_layer(&params.layer_name) {
        Some(layer) => layer,
        None => doc.create_layer(&params.layer_name)?,
    };

    let mut report = ProjectReport::default();
    for mut record in records {
        let Some(title) = record.title().map(str::to_owned) else {
            report.skipped += 1;
            continue;
        };
        let Some(page) = find_page_with_title(doc, &title)? else {
            debug!(title = %title, "no page carries this title, skipping record");
            report.skipped += 1;
            continue;
        };

        doc.clear_layer_on_page(page, layer)?;

        let title_frame = doc.create_text_frame(page, layer, params.title_bounds, &title)?;
        doc.apply_font(title_frame, &params.font_name, params.title_point_size)?;
        if !doc.apply_paragraph_style(title_frame, &params.title_style)? {
            debug!(style = %params.title_style, "paragraph style not found, keeping defaults");
        }

        let table = attribute_table(&record);
        let seed = Bounds::new(
            params.attribute_top,
            params.frame_left,
            params.attribute_top + params.attribute_seed_height,
            params.frame_left + params.frame_width,
        );
        let attr_frame = doc.create_text_frame(page, layer, seed, &table)?;
        doc.apply_font(attr_frame, &params.font_name, params.attribute_point_size)?;
        if !doc.apply_paragraph_style(attr_frame, &params.attribute_style)? {
            debug!(style = %params.attribute_style, "paragraph style not found, keeping defaults");
        }

        // Pull the frame bottom up to the last line's baseline (exactly the
        // baseline: the descent stays outside the frame).
        let table_lines = doc.measure(&table, seed)?;
        if let Some(last) = table_lines.last() {
            doc.set_frame_bounds(
                attr_frame,
                Bounds::new(seed.top, seed.left, last.baseline, seed.right),
            )?;
        }
        let attr_height = doc.frame_bounds(attr_frame)?.height();

        record.set_description(load_description(params, &title)?);
        if !record.description().is_empty() {
            let lines = doc.measure(record.description(), params.probe_bounds)?;
            let plan = plan_columns(estimate_height(&lines), &params.columns);

            let first = doc.create_text_frame(page, layer, plan.first, record.description())?;
            let second = doc.create_text_frame(page, layer, plan.second, "")?;
            doc.thread_frames(first, second)?;

            doc.set_frame_bounds(
                attr_frame,
                attribute_frame_bounds(
                    plan.top,
                    params.block_gap,
                    attr_height,
                    params.frame_left,
                    params.frame_width,
                ),
            )?;
        }

        report.built += 1;
    }

    info!(built = report.built, skipped = report.skipped, "project run finished");
    Ok(report)
}
