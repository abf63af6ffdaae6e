//! Error types for the folio composition library.

use thiserror::Error;

/// Primary error type for composition runs.
///
/// The pipelines skip recoverable conditions (missing styles, unmatched
/// titles, absent description files) without erroring; what surfaces here is
/// the fatal remainder: file I/O and document-host failures.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown page id: {0}")]
    UnknownPage(usize),

    #[error("unknown layer id: {0}")]
    UnknownLayer(usize),

    #[error("unknown frame id: {0}")]
    UnknownFrame(usize),
}

/// Convenience Result type alias for ComposeError.
pub type Result<T> = std::result::Result<T, ComposeError>;
