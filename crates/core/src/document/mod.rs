//! Document model abstraction over the host page-layout application.
//!
//! The pipelines never talk to a live host directly: layers, pages, text
//! frames, placed image links, styles, fonts, and line measurement all go
//! through [`DocumentModel`]. [`MemoryDocument`] is the in-memory
//! implementation used by tests and the snapshot-driven CLI.

pub mod memory;

pub use memory::{MemoryDocument, TextMetrics};

use crate::error::Result;
use crate::geometry::Bounds;

/// Handle to a page, stable for the lifetime of a run.
pub type PageId = usize;

/// Handle to a named layer.
pub type LayerId = usize;

/// Handle to a text frame.
pub type FrameId = usize;

/// Metrics for one rendered line, as reported by the measuring host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Baseline position in page units, measured from the page top.
    pub baseline: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// A placed image link as the host reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Display name of the linked file, extension included.
    pub name: String,

    /// Host link-type string, e.g. `JPEG` or `TIFF`.
    pub link_type: String,

    /// Page the image frame sits on.
    pub page: PageId,

    /// Bounds of the frame containing the image.
    pub frame_bounds: Bounds,
}

/// Capabilities the composition pipelines require of a host document.
///
/// Mutating and measuring calls return `Result`: a host failure is fatal to
/// the run and propagates uncaught, leaving already-placed frames in the
/// document (there is no rollback).
pub trait DocumentModel {
    /// Looks up a layer by exact name.
    fn find_layer(&self, name: &str) -> Option<LayerId>;

    fn create_layer(&mut self, name: &str) -> Result<LayerId>;

    /// Removes every item on the layer, across all pages.
    fn clear_layer(&mut self, layer: LayerId) -> Result<()>;

    /// Removes the layer's items on one page only.
    fn clear_layer_on_page(&mut self, page: PageId, layer: LayerId) -> Result<()>;

    /// Pages in document order.
    fn pages(&self) -> Vec<PageId>;

    /// Full text contents of every live text frame on the page.
    fn frame_texts(&self, page: PageId) -> Result<Vec<String>>;

    /// Placed image links, in document order.
    fn links(&self) -> Vec<Link>;

    fn create_text_frame(
        &mut self,
        page: PageId,
        layer: LayerId,
        bounds: Bounds,
        contents: &str,
    ) -> Result<FrameId>;

    fn frame_bounds(&self, frame: FrameId) -> Result<Bounds>;

    fn set_frame_bounds(&mut self, frame: FrameId, bounds: Bounds) -> Result<()>;

    /// Applies a named paragraph style, clearing local overrides first.
    ///
    /// Returns `Ok(false)` when no style of that name exists; the caller
    /// keeps default formatting in that case.
    fn apply_paragraph_style(&mut self, frame: FrameId, style_name: &str) -> Result<bool>;

    /// Applies a font (looked up by name) and point size to the frame text.
    fn apply_font(&mut self, frame: FrameId, font_name: &str, point_size: f64) -> Result<()>;

    /// Shrinks or grows the frame to hug its rendered contents.
    fn fit_to_content(&mut self, frame: FrameId) -> Result<()>;

    /// Threads overset text from one frame into the next.
    fn thread_frames(&mut self, from: FrameId, to: FrameId) -> Result<()>;

    /// Measures how the contents would render inside the given bounds.
    ///
    /// This is the rendering oracle: line breaking and the returned metrics
    /// are entirely the host's.
    fn measure(&self, contents: &str, bounds: Bounds) -> Result<Vec<LineMetrics>>;
}
