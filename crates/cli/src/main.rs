use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelstats_core::{
    load_config_or_default, run_pipeline, validate_config, BitmapRenderer, ChartRenderer,
    PipelineError,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("reelstats {}", VERSION);

    // Determine config path
    let config_path = std::env::var("REELSTATS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("reelstats.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let mut config = load_config_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Positional argument overrides the configured catalog path
    if let Some(input) = std::env::args_os().nth(1) {
        config.input.path = PathBuf::from(input);
    }

    validate_config(&config).context("Configuration validation failed")?;

    info!("Input: {:?}", config.input.path);
    info!("Chart directory: {:?}", config.output.chart_dir);

    let renderer = BitmapRenderer::new(config.output.chart_dir.clone(), config.chart.clone());
    info!("Using chart renderer: {}", renderer.name());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_pipeline(&config, &renderer, &mut out) {
        Ok(report) => {
            out.flush()?;
            info!(
                "Analysis complete: {} rows, {} charts written",
                report.rows,
                report.charts.len()
            );
            Ok(())
        }
        Err(PipelineError::Catalog(e)) if e.is_not_found() => {
            error!("Catalog file not found: {:?}", config.input.path);
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Analysis failed"),
    }
}
