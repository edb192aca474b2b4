//! Enrichment error types.

use std::path::PathBuf;
use thiserror::Error;

/// A post source could not be turned into a reading-time entry.
///
/// Any one of these fails the whole enrichment batch.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter in `{path}`: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Front-matter of `{path}` has no `{field}`")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("Source load task failed: {0}")]
    Task(String),
}

impl LoadError {
    /// Path of the offending source, when known
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            LoadError::Io { path, .. }
            | LoadError::FrontMatter { path, .. }
            | LoadError::MissingField { path, .. } => Some(path),
            LoadError::Task(_) => None,
        }
    }
}
