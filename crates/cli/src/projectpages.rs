//! projectpages - build project layouts from a CSV and description files.
//!
//! Loads a JSON document snapshot, matches each CSV record to the page
//! carrying its title, rebuilds that page's generated frames (title,
//! attribute table, threaded description columns), and writes the mutated
//! snapshot back out.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use folio_cli::snapshot::{self, DocumentSnapshot};
use folio_core::compose::{ProjectParams, build_from_csv};

/// Build titled, two-column project pages from a CSV of records.
#[derive(Parser, Debug)]
#[command(name = "projectpages")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the document snapshot (JSON)
    snapshot: PathBuf,

    /// CSV of project records; first line is the header row
    #[arg(long, default_value = "projects.csv")]
    csv: PathBuf,

    /// Directory holding one <title>/description.md per project
    #[arg(long = "content-root", default_value = "original_content")]
    content_root: PathBuf,

    /// Description file name inside each project directory
    #[arg(long = "description-file", default_value = "description.md")]
    description_file: String,

    /// Write the mutated snapshot here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut doc = snapshot::load(&args.snapshot)?.into_document()?;
    let params = ProjectParams {
        content_root: args.content_root,
        description_file: args.description_file,
        ..ProjectParams::default()
    };
    let report = build_from_csv(&mut doc, &args.csv, &params)?;
    eprintln!(
        "{} pages built, {} records skipped",
        report.built, report.skipped
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
