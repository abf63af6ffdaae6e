//! Caption generation for placed images.
//!
//! Scans the document's image links, derives a caption from each file name,
//! and places a styled caption frame directly under the image, fit to its
//! text and re-widened to the image frame's width.

use tracing::{debug, info};

use crate::document::DocumentModel;
use crate::error::Result;
use crate::geometry::Bounds;
use crate::naming::derive_caption;

/// Link types captions are generated for. Anything else is skipped.
pub const DEFAULT_LINK_TYPES: [&str; 6] = ["JPEG", "PNG", "TIFF", "PDF", "WEBP", "GIF"];

/// Options for a caption run.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionParams {
    /// Layer the captions land on. Reused and emptied when it already
    /// exists, created otherwise.
    pub layer_name: String,

    /// Paragraph style applied to each caption when the document defines it;
    /// captions keep default formatting otherwise.
    pub style_name: String,

    /// Host link-type strings considered images.
    pub link_types: Vec<String>,

    /// Height of a freshly placed caption frame before it is fit to its
    /// text.
    pub seed_height: f64,
}

impl Default for CaptionParams {
    fn default() -> Self {
        Self {
            layer_name: "figure_titles".to_string(),
            style_name: "FigureDescription".to_string(),
            link_types: DEFAULT_LINK_TYPES.iter().map(|t| t.to_string()).collect(),
            seed_height: 1.0,
        }
    }
}

/// What a caption run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionReport {
    /// Captions placed.
    pub placed: usize,

    /// Links skipped for an unsupported type.
    pub skipped: usize,
}

/// Runs the caption pipeline over every image link in the document.
pub fn generate_captions(
    doc: &mut impl DocumentModel,
    params: &CaptionParams,
) -> Result<CaptionReport> {
    let layer = match doc.find_layer(&params.layer_name) {
        Some(layer) => {
            doc.clear_layer(layer)?;
            layer
        }
        None => doc.create_layer(&params.layer_name)?,
    };

    let mut report = CaptionReport::default();
    for link in doc.links() {
        if !params.link_types.iter().any(|t| t == &link.link_type) {
            debug!(
                name = %link.name,
                link_type = %link.link_type,
                "skipping link with unsupported type"
            );
            report.skipped += 1;
            continue;
        }

        let caption = derive_caption(&link.name);
        let image = link.frame_bounds;
        let seed = Bounds::new(
            image.bottom,
            image.left,
            image.bottom + params.seed_height,
            image.right,
        );
        let frame = doc.create_text_frame(link.page, layer, seed, &caption)?;

        if !doc.apply_paragraph_style(frame, &params.style_name)? {
            debug!(style = %params.style_name, "paragraph style not found, keeping defaults");
        }

        // Fit the height to the text, then snap the width back to the image.
        doc.fit_to_content(frame)?;
        let fitted = doc.frame_bounds(frame)?;
        doc.set_frame_bounds(
            frame,
            Bounds::new(fitted.top, image.left, fitted.bottom, image.right),
        )?;

        report.placed += 1;
    }

    info!(placed = report.placed, skipped = report.skipped, "caption run finished");
    Ok(report)
}
