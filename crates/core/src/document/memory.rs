//! In-memory document host.
//!
//! Backs the integration tests and the snapshot-driven CLI. Text
//! measurement is a deterministic stand-in for the host typesetter: greedy
//! character-count wrapping with fixed per-line metrics. Real line breaking
//! and font metrics are out of scope; the pipelines only ever see
//! [`LineMetrics`], so the model is swappable.

use super::{DocumentModel, FrameId, LayerId, Link, LineMetrics, PageId};
use crate::error::{ComposeError, Result};
use crate::geometry::Bounds;

/// Constants for the built-in line-wrap measurement model, in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub ascent: f64,
    pub descent: f64,
    /// Baseline-to-baseline distance.
    pub leading: f64,
    /// Characters that fit into one page unit of frame width.
    pub chars_per_unit: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            ascent: 0.15,
            descent: 0.05,
            leading: 0.25,
            chars_per_unit: 12.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Frame {
    page: PageId,
    layer: LayerId,
    bounds: Bounds,
    contents: String,
    style: Option<String>,
    font: Option<(String, f64)>,
    next: Option<FrameId>,
    removed: bool,
}

#[derive(Debug, Default)]
struct Page {
    frames: Vec<FrameId>,
}

/// A complete document held in memory.
///
/// Frame ids are slab indices and stay stable across removals; a removed
/// frame's id becomes stale and reports [`ComposeError::UnknownFrame`].
/// A fresh document starts with one default layer, like a host document.
#[derive(Debug)]
pub struct MemoryDocument {
    metrics: TextMetrics,
    layer_names: Vec<String>,
    pages: Vec<Page>,
    frames: Vec<Frame>,
    links: Vec<Link>,
    styles: Vec<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::with_metrics(TextMetrics::default())
    }

    pub fn with_metrics(metrics: TextMetrics) -> Self {
        Self {
            metrics,
            layer_names: vec!["Layer 1".to_string()],
            pages: Vec::new(),
            frames: Vec::new(),
            links: Vec::new(),
            styles: Vec::new(),
        }
    }

    /// The layer every document starts with.
    pub fn default_layer(&self) -> LayerId {
        0
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    pub fn add_page(&mut self) -> PageId {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Registers a paragraph style name.
    pub fn define_style(&mut self, name: &str) {
        if !self.styles.iter().any(|s| s == name) {
            self.styles.push(name.to_string());
        }
    }

    /// Paragraph style names the document defines.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Places a text frame on the default layer; for seeding documents.
    pub fn add_text_frame(
        &mut self,
        page: PageId,
        bounds: Bounds,
        contents: &str,
    ) -> Result<FrameId> {
        self.create_text_frame(page, self.default_layer(), bounds, contents)
    }

    /// Records a placed image link on the given page.
    pub fn add_link(
        &mut self,
        name: &str,
        link_type: &str,
        page: PageId,
        frame_bounds: Bounds,
    ) -> Result<()> {
        self.check_page(page)?;
        self.links.push(Link {
            name: name.to_string(),
            link_type: link_type.to_string(),
            page,
            frame_bounds,
        });
        Ok(())
    }

    pub fn layer_name(&self, layer: LayerId) -> Result<&str> {
        self.layer_names
            .get(layer)
            .map(String::as_str)
            .ok_or(ComposeError::UnknownLayer(layer))
    }

    /// Live frames on a page, in placement order.
    pub fn frames_on_page(&self, page: PageId) -> Result<Vec<FrameId>> {
        self.check_page(page)?;
        Ok(self.pages[page].frames.clone())
    }

    pub fn frame_contents(&self, frame: FrameId) -> Result<&str> {
        Ok(&self.frame(frame)?.contents)
    }

    pub fn frame_layer(&self, frame: FrameId) -> Result<LayerId> {
        Ok(self.frame(frame)?.layer)
    }

    pub fn frame_page(&self, frame: FrameId) -> Result<PageId> {
        Ok(self.frame(frame)?.page)
    }

    pub fn frame_style(&self, frame: FrameId) -> Result<Option<&str>> {
        Ok(self.frame(frame)?.style.as_deref())
    }

    pub fn frame_font(&self, frame: FrameId) -> Result<Option<(&str, f64)>> {
        Ok(self
            .frame(frame)?
            .font
            .as_ref()
            .map(|(name, size)| (name.as_str(), *size)))
    }

    /// The frame this one threads into, if any.
    pub fn next_frame(&self, frame: FrameId) -> Result<Option<FrameId>> {
        Ok(self.frame(frame)?.next)
    }

    fn frame(&self, id: FrameId) -> Result<&Frame> {
        match self.frames.get(id) {
            Some(frame) if !frame.removed => Ok(frame),
            _ => Err(ComposeError::UnknownFrame(id)),
        }
    }

    fn frame_mut(&mut self, id: FrameId) -> Result<&mut Frame> {
        match self.frames.get_mut(id) {
            Some(frame) if !frame.removed => Ok(frame),
            _ => Err(ComposeError::UnknownFrame(id)),
        }
    }

    fn check_page(&self, page: PageId) -> Result<()> {
        if page < self.pages.len() {
            Ok(())
        } else {
            Err(ComposeError::UnknownPage(page))
        }
    }

    fn check_layer(&self, layer: LayerId) -> Result<()> {
        if layer < self.layer_names.len() {
            Ok(())
        } else {
            Err(ComposeError::UnknownLayer(layer))
        }
    }

    fn remove(&mut self, id: FrameId) {
        let page = self.frames[id].page;
        self.frames[id].removed = true;
        self.pages[page].frames.retain(|&f| f != id);
        for frame in &mut self.frames {
            if frame.next == Some(id) {
                frame.next = None;
            }
        }
    }

    /// Lines the wrap model produces for contents laid into `bounds`.
    ///
    /// Paragraph breaks on `\r` or `\n` (one trailing empty segment is
    /// dropped), then greedy wrapping at `width * chars_per_unit`
    /// characters. Baselines descend from `bounds.top` by `leading`.
    fn layout_lines(&self, contents: &str, bounds: Bounds) -> Vec<LineMetrics> {
        if contents.is_empty() {
            return Vec::new();
        }
        let m = self.metrics;
        let columns = ((bounds.width() * m.chars_per_unit).floor() as usize).max(1);

        let mut paragraphs: Vec<&str> = contents.split(['\r', '\n']).collect();
        if paragraphs.len() > 1 && paragraphs.last().is_some_and(|p| p.is_empty()) {
            paragraphs.pop();
        }

        let mut count = 0;
        for paragraph in paragraphs {
            count += if paragraph.is_empty() {
                1
            } else {
                paragraph.chars().count().div_ceil(columns)
            };
        }

        (0..count)
            .map(|i| LineMetrics {
                baseline: bounds.top + m.ascent + i as f64 * m.leading,
                ascent: m.ascent,
                descent: m.descent,
            })
            .collect()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentModel for MemoryDocument {
    fn find_layer(&self, name: &str) -> Option<LayerId> {
        self.layer_names.iter().position(|n| n == name)
    }

    fn create_layer(&mut self, name: &str) -> Result<LayerId> {
        self.layer_names.push(name.to_string());
        Ok(self.layer_names.len() - 1)
    }

    fn clear_layer(&mut self, layer: LayerId) -> Result<()> {
        self.check_layer(layer)?;
        let doomed: Vec<FrameId> = (0..self.frames.len())
            .filter(|&id| !self.frames[id].removed && self.frames[id].layer == layer)
            .collect();
        for id in doomed {
            self.remove(id);
        }
        Ok(())
    }

    fn clear_layer_on_page(&mut self, page: PageId, layer: LayerId) -> Result<()> {
        self.check_page(page)?;
        self.check_layer(layer)?;
        let doomed: Vec<FrameId> = self.pages[page]
            .frames
            .iter()
            .copied()
            .filter(|&id| self.frames[id].layer == layer)
            .collect();
        for id in doomed {
            self.remove(id);
        }
        Ok(())
    }

    fn pages(&self) -> Vec<PageId> {
        (0..self.pages.len()).collect()
    }

    fn frame_texts(&self, page: PageId) -> Result<Vec<String>> {
        self.check_page(page)?;
        Ok(self.pages[page]
            .frames
            .iter()
            .map(|&id| self.frames[id].contents.clone())
            .collect())
    }

    fn links(&self) -> Vec<Link> {
        self.links.clone()
    }

    fn create_text_frame(
        &mut self,
        page: PageId,
        layer: LayerId,
        bounds: Bounds,
        contents: &str,
    ) -> Result<FrameId> {
        self.check_page(page)?;
        self.check_layer(layer)?;
        let id = self.frames.len();
        self.frames.push(Frame {
            page,
            layer,
            bounds,
            contents: contents.to_string(),
            style: None,
            font: None,
            next: None,
            removed: false,
        });
        self.pages[page].frames.push(id);
        Ok(id)
    }

    fn frame_bounds(&self, frame: FrameId) -> Result<Bounds> {
        Ok(self.frame(frame)?.bounds)
    }

    fn set_frame_bounds(&mut self, frame: FrameId, bounds: Bounds) -> Result<()> {
        self.frame_mut(frame)?.bounds = bounds;
        Ok(())
    }

    fn apply_paragraph_style(&mut self, frame: FrameId, style_name: &str) -> Result<bool> {
        self.frame(frame)?;
        if !self.styles.iter().any(|s| s == style_name) {
            return Ok(false);
        }
        self.frame_mut(frame)?.style = Some(style_name.to_string());
        Ok(true)
    }

    fn apply_font(&mut self, frame: FrameId, font_name: &str, point_size: f64) -> Result<()> {
        self.frame_mut(frame)?.font = Some((font_name.to_string(), point_size));
        Ok(())
    }

    fn fit_to_content(&mut self, frame: FrameId) -> Result<()> {
        let (contents, bounds) = {
            let f = self.frame(frame)?;
            (f.contents.clone(), f.bounds)
        };
        let lines = self.layout_lines(&contents, bounds);
        if let Some(last) = lines.last() {
            self.frame_mut(frame)?.bounds.bottom = last.baseline + last.descent;
        }
        Ok(())
    }

    fn thread_frames(&mut self, from: FrameId, to: FrameId) -> Result<()> {
        self.frame(to)?;
        self.frame_mut(from)?.next = Some(to);
        Ok(())
    }

    fn measure(&self, contents: &str, bounds: Bounds) -> Result<Vec<LineMetrics>> {
        Ok(self.layout_lines(contents, bounds))
    }
}
