//! Typed errors for the editing core

use std::path::PathBuf;
use thiserror::Error;

/// Failure at the file store boundary.
///
/// Always carries the path involved and the underlying cause so callers can
/// report exactly which file could not be touched. The on-disk file is left
/// as it was whenever one of these is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a regular file: {path}")]
    NotAFile { path: PathBuf },
}

impl StoreError {
    /// The path the failed operation was addressing.
    pub fn path(&self) -> &std::path::Path {
        match self {
            StoreError::Read { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::NotAFile { path } => path,
        }
    }
}

/// Contract violation in a modification batch.
///
/// Validation runs before any line is touched, so a rejected batch leaves
/// the buffer exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MutationError {
    #[error("line index {index} is out of bounds (buffer has {len} lines)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("batch contains two operations targeting line {index}")]
    OverlappingEdits { index: usize },
}
