//! Pipeline runner.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::types::{PipelineError, PipelineReport};
use crate::analysis::{
    count_content_types, find_director_actors, find_insights, rank_directors, summarize_columns,
};
use crate::catalog::{load_catalog, Catalog};
use crate::chart::{Chart, ChartRenderer};
use crate::config::Config;
use crate::report;

/// Renders charts when enabled and remembers where they went.
struct ChartSink<'a> {
    renderer: &'a dyn ChartRenderer,
    enabled: bool,
    rendered: Vec<PathBuf>,
}

impl<'a> ChartSink<'a> {
    fn new(renderer: &'a dyn ChartRenderer, enabled: bool) -> Self {
        Self {
            renderer,
            enabled,
            rendered: Vec::new(),
        }
    }

    fn render(&mut self, chart: Option<Chart>) {
        let Some(chart) = chart else {
            return;
        };
        if !self.enabled {
            return;
        }

        match self.renderer.render(&chart) {
            Ok(path) => {
                info!("Chart '{}' written to {:?}", chart.stem(), path);
                self.rendered.push(path);
            }
            Err(e) => warn!("Failed to render chart '{}': {}", chart.stem(), e),
        }
    }
}

/// Load the configured catalog and run every analysis on it.
pub fn run_pipeline<W: Write>(
    config: &Config,
    renderer: &dyn ChartRenderer,
    out: &mut W,
) -> Result<PipelineReport, PipelineError> {
    let mut catalog = load_catalog(&config.input.path)?;
    let report = analyze_catalog(&mut catalog, config, renderer, out)?;

    if let Some(path) = &config.output.json_report {
        write_json_report(&report, path)?;
        info!("JSON report written to {:?}", path);
    }

    Ok(report)
}

/// Run every analysis on an already loaded catalog, in display order.
///
/// Adds the `director_actor` column to `catalog`.
pub fn analyze_catalog<W: Write>(
    catalog: &mut Catalog,
    config: &Config,
    renderer: &dyn ChartRenderer,
    out: &mut W,
) -> Result<PipelineReport, PipelineError> {
    let analysis = &config.analysis;
    let mut charts = ChartSink::new(renderer, config.output.render_charts);

    let column_summary = summarize_columns(catalog);
    writeln!(out, "{}", report::column_summary_section(&column_summary))?;

    let content_types = count_content_types(catalog);
    charts.render(content_types.chart());
    writeln!(out, "{}", report::content_types_section(&content_types))?;

    let directors = rank_directors(catalog, analysis);
    charts.render(directors.chart());
    writeln!(out, "{}", report::directors_section(&directors))?;

    let director_actors = find_director_actors(catalog, analysis.overlap_examples);
    charts.render(director_actors.chart());
    writeln!(out, "{}", report::director_actors_section(&director_actors))?;

    let insights = find_insights(catalog, analysis.top_ratings);
    for chart in insights.charts() {
        charts.render(Some(chart));
    }
    writeln!(out, "{}", report::insights_section(&insights))?;

    let (rows, columns) = catalog.shape();
    Ok(PipelineReport {
        source: catalog.source.clone(),
        rows,
        columns,
        column_summary,
        content_types,
        directors,
        director_actors,
        insights,
        charts: charts.rendered,
    })
}

/// Serialize a report as pretty JSON, creating parent directories.
pub fn write_json_report(report: &PipelineReport, path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}
