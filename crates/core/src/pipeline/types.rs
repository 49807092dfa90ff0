//! Types for the pipeline module.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::analysis::{
    ColumnSummary, ContentTypeBreakdown, DirectorActorOverlap, DirectorRanking, Insights,
};
use crate::catalog::CatalogError;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Report output could not be written.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Every analysis result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub source: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub column_summary: ColumnSummary,
    pub content_types: ContentTypeBreakdown,
    pub directors: DirectorRanking,
    pub director_actors: DirectorActorOverlap,
    pub insights: Insights,
    /// Charts written during the run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charts: Vec<PathBuf>,
}
