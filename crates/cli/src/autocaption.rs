//! autocaption - place caption frames under a document's placed images.
//!
//! Loads a JSON document snapshot, derives a caption from each valid image
//! link's file name, places a styled caption frame under the image, and
//! writes the mutated snapshot back out.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use folio_cli::snapshot::{self, DocumentSnapshot};
use folio_core::compose::{CaptionParams, generate_captions};

/// Generate caption frames under every placed image in a document snapshot.
#[derive(Parser, Debug)]
#[command(name = "autocaption")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the document snapshot (JSON)
    snapshot: PathBuf,

    /// Write the mutated snapshot here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Layer the captions are placed on
    #[arg(long, default_value = "figure_titles")]
    layer: String,

    /// Paragraph style applied to captions when the document defines it
    #[arg(long, default_value = "FigureDescription")]
    style: String,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut doc = snapshot::load(&args.snapshot)?.into_document()?;
    let params = CaptionParams {
        layer_name: args.layer,
        style_name: args.style,
        ..CaptionParams::default()
    };
    let report = generate_captions(&mut doc, &params)?;
    eprintln!(
        "{} captions placed, {} links skipped",
        report.placed, report.skipped
    );

    let out = DocumentSnapshot::from_document(&doc)?;
    snapshot::save(&out, args.output.as_deref())
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
