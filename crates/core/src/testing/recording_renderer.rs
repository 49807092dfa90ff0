//! Chart renderer that records charts instead of drawing them.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::chart::{Chart, ChartError, ChartRenderer};

/// Records every chart it is asked to render.
///
/// Clones share the same record, so a test can hand one clone to the
/// pipeline and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    charts: Arc<Mutex<Vec<Chart>>>,
    /// If set, every render fails with this message.
    failure: Arc<Mutex<Option<String>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent renders fail.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// All charts rendered so far.
    pub fn recorded(&self) -> Vec<Chart> {
        self.charts.lock().unwrap().clone()
    }

    /// File stems of the charts rendered so far, in order.
    pub fn rendered_stems(&self) -> Vec<String> {
        self.charts
            .lock()
            .unwrap()
            .iter()
            .map(|chart| chart.stem().to_string())
            .collect()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn name(&self) -> &str {
        "recording"
    }

    fn render(&self, chart: &Chart) -> Result<PathBuf, ChartError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ChartError::Drawing(message));
        }
        self.charts.lock().unwrap().push(chart.clone());
        Ok(PathBuf::from(format!("{}.png", chart.stem())))
    }
}
