//! Error types for the catalog module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
///
/// `NotFound` is reported on its own; every other variant is a generic load
/// failure. Neither is retried.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input file does not exist.
    #[error("Catalog file not found: {path}")]
    NotFound { path: PathBuf },

    /// Header row lacks a column the analyses need.
    #[error("Catalog is missing required column: {column}")]
    MissingColumn { column: String },

    /// Malformed CSV.
    #[error("Failed to parse catalog: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while reading.
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Whether this error means the input path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
