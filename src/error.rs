//! Library error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by index construction.
///
/// The query path is pure and operates on already-validated in-memory data,
/// so it has no error conditions; everything here is fatal at startup.
#[derive(Debug, Error)]
pub enum WordscanError {
    /// The word source could not be opened or read.
    #[error("couldn't open word source {path}: {source}")]
    SourceUnavailable {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The background build task terminated without publishing an index.
    #[error("index build task terminated without publishing an index")]
    BuildInterrupted,
}
