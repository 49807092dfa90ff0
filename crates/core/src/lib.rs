pub mod analysis;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod testing;

pub use analysis::{
    count_content_types, director_actor_names, enrich_director_actor, find_director_actors,
    find_insights, parse_duration_minutes, rank_directors, summarize_columns, ColumnSummary,
    ContentTypeBreakdown, DirectorActorOverlap, DirectorRanking, Insights,
};
pub use catalog::{load_catalog, load_catalog_from_reader, Catalog, CatalogError, CatalogRow};
pub use chart::{BitmapRenderer, Chart, ChartError, ChartRenderer, ChartStyle, Palette};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, AnalysisConfig,
    Config, ConfigError, DirectorMatch,
};
pub use pipeline::{analyze_catalog, run_pipeline, PipelineError, PipelineReport};
