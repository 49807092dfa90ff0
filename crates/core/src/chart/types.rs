//! Chart descriptions produced by the analyses.

use serde::Serialize;

use crate::analysis::BoxStats;

/// Output file stem, caption and axis labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLabels {
    /// File name without extension.
    pub stem: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn new(
        stem: impl Into<String>,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            stem: stem.into(),
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Categories along the x axis.
    Vertical,
    /// Categories along the y axis, first category on top.
    Horizontal,
}

/// Categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub labels: ChartLabels,
    pub orientation: Orientation,
    pub bars: Vec<(String, f64)>,
}

/// Line with point markers over years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub labels: ChartLabels,
    pub points: Vec<(i32, f64)>,
}

/// Per-year counts stacked by series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedHistogram {
    pub labels: ChartLabels,
    /// Series names, bottom of the stack first.
    pub series: Vec<String>,
    /// `(year, counts)` with `counts` aligned to `series`.
    pub bins: Vec<(i32, Vec<usize>)>,
}

/// One box per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotChart {
    pub labels: ChartLabels,
    pub groups: Vec<(String, BoxStats)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Bar(BarChart),
    Line(LineChart),
    StackedHistogram(StackedHistogram),
    BoxPlot(BoxPlotChart),
}

impl Chart {
    pub fn labels(&self) -> &ChartLabels {
        match self {
            Self::Bar(chart) => &chart.labels,
            Self::Line(chart) => &chart.labels,
            Self::StackedHistogram(chart) => &chart.labels,
            Self::BoxPlot(chart) => &chart.labels,
        }
    }

    pub fn stem(&self) -> &str {
        &self.labels().stem
    }

    /// Whether the chart has nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bar(chart) => chart.bars.is_empty(),
            Self::Line(chart) => chart.points.is_empty(),
            Self::StackedHistogram(chart) => chart.bins.is_empty(),
            Self::BoxPlot(chart) => chart.groups.is_empty(),
        }
    }
}
