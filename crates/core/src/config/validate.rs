use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Chart dimensions are not 0
/// - Ranking sizes are not 0
/// - Detailed directors fit inside the ranking
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.chart.width == 0 || config.chart.height == 0 {
        return Err(ConfigError::ValidationError(
            "chart.width and chart.height cannot be 0".to_string(),
        ));
    }

    let analysis = &config.analysis;
    if analysis.top_directors == 0 {
        return Err(ConfigError::ValidationError(
            "analysis.top_directors cannot be 0".to_string(),
        ));
    }
    if analysis.top_ratings == 0 {
        return Err(ConfigError::ValidationError(
            "analysis.top_ratings cannot be 0".to_string(),
        ));
    }
    if analysis.detail_directors > analysis.top_directors {
        return Err(ConfigError::ValidationError(format!(
            "analysis.detail_directors ({}) cannot exceed analysis.top_directors ({})",
            analysis.detail_directors, analysis.top_directors
        )));
    }

    Ok(())
}
