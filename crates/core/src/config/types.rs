use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::chart::ChartStyle;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub chart: ChartStyle,
}

/// Catalog input configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Path to the comma-separated catalog file
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("netflix_titles.csv")
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory charts are written into
    #[serde(default = "default_chart_dir")]
    pub chart_dir: PathBuf,
    /// Whether charts are rendered at all
    #[serde(default = "default_true")]
    pub render_charts: bool,
    /// Optional path for a JSON dump of every analysis result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_report: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart_dir: default_chart_dir(),
            render_charts: true,
            json_report: None,
        }
    }
}

fn default_chart_dir() -> PathBuf {
    PathBuf::from("charts")
}

fn default_true() -> bool {
    true
}

/// How a director name is matched against a row when listing sample titles.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DirectorMatch {
    /// The raw director field contains the name anywhere.
    /// "Jan Suter" also matches a row directed by "Jan Suterland".
    #[default]
    Substring,
    /// The name is one of the row's comma-separated directors.
    Exact,
}

/// Analysis tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Directors kept in the ranking (and chart)
    #[serde(default = "default_top_directors")]
    pub top_directors: usize,
    /// Directors printed with sample titles
    #[serde(default = "default_detail_directors")]
    pub detail_directors: usize,
    /// Sample titles listed per detailed director
    #[serde(default = "default_titles_per_director")]
    pub titles_per_director: usize,
    /// Director-actor rows printed as examples
    #[serde(default = "default_overlap_examples")]
    pub overlap_examples: usize,
    /// Rating categories kept in the ratings view
    #[serde(default = "default_top_ratings")]
    pub top_ratings: usize,
    #[serde(default)]
    pub director_match: DirectorMatch,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_directors: default_top_directors(),
            detail_directors: default_detail_directors(),
            titles_per_director: default_titles_per_director(),
            overlap_examples: default_overlap_examples(),
            top_ratings: default_top_ratings(),
            director_match: DirectorMatch::default(),
        }
    }
}

fn default_top_directors() -> usize {
    10
}

fn default_detail_directors() -> usize {
    5
}

fn default_titles_per_director() -> usize {
    3
}

fn default_overlap_examples() -> usize {
    5
}

fn default_top_ratings() -> usize {
    10
}
