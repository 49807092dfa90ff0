//! End-to-end run: load, analyze, render, report.
//!
//! ```text
//! load_catalog ─► summarize_columns ─► count_content_types ─► rank_directors
//!              ─► find_director_actors ─► find_insights ─► (json report)
//! ```
//!
//! A load failure aborts before any analysis. Chart failures are logged and
//! skipped.

mod runner;
mod types;

pub use runner::{analyze_catalog, run_pipeline, write_json_report};
pub use types::{PipelineError, PipelineReport};
