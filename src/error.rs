//! Error types for roster loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a roster from being read at all.
///
/// Per-token problems are not errors; they are collected as
/// [`MalformedScore`](crate::record::MalformedScore) warnings instead.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The input file could not be opened.
    #[error("File {} not found: {source}", .path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
