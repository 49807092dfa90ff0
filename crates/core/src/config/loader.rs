use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment variable overrides (e.g. `REELSTATS_INPUT__PATH`).
const ENV_PREFIX: &str = "REELSTATS_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from file if present, otherwise from defaults.
///
/// Environment overrides apply in both cases.
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        return load_config(path);
    }

    tracing::info!("No config file at {:?}, using defaults", path);
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectorMatch;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[input]
path = "data/titles.csv"

[analysis]
top_directors = 15
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.input.path.to_str().unwrap(), "data/titles.csv");
        assert_eq!(config.analysis.top_directors, 15);
        // untouched fields keep their defaults
        assert_eq!(config.analysis.detail_directors, 5);
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let toml = r#"
[analysis]
top_directors = "ten"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/reelstats.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let config = load_config_or_default(Path::new("/nonexistent/reelstats.toml")).unwrap();
        assert_eq!(config.chart.width, 1200);
        assert_eq!(config.analysis.director_match, DirectorMatch::Substring);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[output]
chart_dir = "/tmp/reelstats-charts"
render_charts = false

[analysis]
director_match = "exact"
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert!(!config.output.render_charts);
        assert_eq!(
            config.output.chart_dir.to_str().unwrap(),
            "/tmp/reelstats-charts"
        );
        assert_eq!(config.analysis.director_match, DirectorMatch::Exact);
        assert_eq!(config.input.path.to_str().unwrap(), "netflix_titles.csv");
    }
}
