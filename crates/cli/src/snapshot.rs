//! JSON document snapshots.
//!
//! A snapshot is the serialized form of a [`MemoryDocument`]: pages of text
//! frames, placed image links, the paragraph-style list, and optional text
//! metrics. The bins load one, run a pipeline against it, and write the
//! mutated document back out.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use folio_core::document::{DocumentModel, FrameId, MemoryDocument, TextMetrics};
use folio_core::geometry::Bounds;

/// A whole document, serialized.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Text-measurement constants; the document defaults apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSnapshot>,

    /// Paragraph style names the document defines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,

    #[serde(default)]
    pub pages: Vec<PageSnapshot>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkSnapshot>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub ascent: f64,
    pub descent: f64,
    pub leading: f64,
    pub chars_per_unit: f64,
}

impl From<MetricsSnapshot> for TextMetrics {
    fn from(m: MetricsSnapshot) -> Self {
        Self {
            ascent: m.ascent,
            descent: m.descent,
            leading: m.leading,
            chars_per_unit: m.chars_per_unit,
        }
    }
}

impl From<TextMetrics> for MetricsSnapshot {
    fn from(m: TextMetrics) -> Self {
        Self {
            ascent: m.ascent,
            descent: m.descent,
            leading: m.leading,
            chars_per_unit: m.chars_per_unit,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub frames: Vec<FrameSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Frame bounds as `[top, left, bottom, right]`.
    pub bounds: [f64; 4],

    #[serde(default)]
    pub contents: String,

    /// Layer name; the document's default layer when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f64>,

    /// Index into the flattened, page-ordered frame list this frame
    /// threads its overset text into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkSnapshot {
    pub name: String,
    pub link_type: String,
    pub page: usize,
    /// Bounds of the frame containing the image.
    pub bounds: [f64; 4],
}

/// Reads a snapshot from a JSON file.
pub fn load(path: &Path) -> Result<DocumentSnapshot> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

/// Writes a snapshot as pretty JSON to the given path, or to stdout.
pub fn save(snapshot: &DocumentSnapshot, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, snapshot)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, snapshot)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

impl DocumentSnapshot {
    /// Realizes the snapshot as an in-memory document.
    pub fn into_document(self) -> Result<MemoryDocument> {
        let mut doc = match self.metrics {
            Some(metrics) => MemoryDocument::with_metrics(metrics.into()),
            None => MemoryDocument::new(),
        };
        for style in &self.styles {
            doc.define_style(style);
        }

        let mut ids: Vec<FrameId> = Vec::new();
        let mut threads: Vec<(usize, usize)> = Vec::new();
        for page_snapshot in self.pages {
            let page = doc.add_page();
            for frame in page_snapshot.frames {
                let layer = match frame.layer.as_deref() {
                    None => doc.default_layer(),
                    Some(name) => match doc.find_layer(name) {
                        Some(layer) => layer,
                        None => doc.create_layer(name)?,
                    },
                };
                let id = doc.create_text_frame(
                    page,
                    layer,
                    Bounds::from_array(frame.bounds),
                    &frame.contents,
                )?;
                if let Some(style) = frame.style.as_deref() {
                    doc.apply_paragraph_style(id, style)?;
                }
                if let Some(font) = frame.font.as_deref() {
                    doc.apply_font(id, font, frame.point_size.unwrap_or(12.0))?;
                }
                if let Some(next) = frame.next {
                    threads.push((ids.len(), next));
                }
                ids.push(id);
            }
        }
        for (from, to) in threads {
            let to_id = *ids.get(to).context("thread target out of range")?;
            doc.thread_frames(ids[from], to_id)?;
        }

        for link in self.links {
            doc.add_link(&link.name, &link.link_type, link.page, Bounds::from_array(link.bounds))?;
        }
        Ok(doc)
    }

    /// Serializes a document back into snapshot form.
    pub fn from_document(doc: &MemoryDocument) -> Result<Self> {
        let mut flat: Vec<FrameId> = Vec::new();
        for page in doc.pages() {
            flat.extend(doc.frames_on_page(page)?);
        }

        let mut pages = Vec::new();
        for page in doc.pages() {
            let mut frames = Vec::new();
            for id in doc.frames_on_page(page)? {
                let font = doc.frame_font(id)?;
                frames.push(FrameSnapshot {
                    bounds: doc.frame_bounds(id)?.to_array(),
                    contents: doc.frame_contents(id)?.to_string(),
                    layer: Some(doc.layer_name(doc.frame_layer(id)?)?.to_string()),
                    style: doc.frame_style(id)?.map(str::to_string),
                    font: font.map(|(name, _)| name.to_string()),
                    point_size: font.map(|(_, size)| size),
                    next: doc
                        .next_frame(id)?
                        .and_then(|next| flat.iter().position(|&f| f == next)),
                });
            }
            pages.push(PageSnapshot { frames });
        }

        Ok(Self {
            metrics: Some(doc.metrics().into()),
            styles: doc.styles().to_vec(),
            pages,
            links: doc
                .links()
                .into_iter()
                .map(|link| LinkSnapshot {
                    name: link.name,
                    link_type: link.link_type,
                    page: link.page,
                    bounds: link.frame_bounds.to_array(),
                })
                .collect(),
        })
    }
}
