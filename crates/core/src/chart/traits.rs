//! Trait definitions for chart rendering.

use std::path::PathBuf;

use super::error::ChartError;
use super::types::Chart;

/// Something that can turn a chart description into an artifact.
pub trait ChartRenderer: Send + Sync {
    /// Returns the name of this renderer implementation.
    fn name(&self) -> &str;

    /// Renders a chart, returning where it was written.
    fn render(&self, chart: &Chart) -> Result<PathBuf, ChartError>;
}
