//! Error types for tree construction

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a node (or, for `NothingProcessed`, every requested root).
///
/// Failures below a root are reported and skipped by the builder. Only a
/// failure on the root itself is returned to the caller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot resolve '{}': {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot stat '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read entry in '{}': {source}", .path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path too long: {}", .path.display())]
    PathTooLong { path: PathBuf },

    #[error("out of memory while adding '{}': {source}", .path.display())]
    OutOfMemory {
        path: PathBuf,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no files processed")]
    NothingProcessed,
}
