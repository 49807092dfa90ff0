//! End-to-end pipeline tests.
//!
//! These tests run the full pipeline against a literal three-row catalog:
//! - Loading from disk, sentinel filling and date coercion
//! - Exact content-type counts and director-actor overlap lists
//! - Chart rendering through the recording renderer
//! - JSON report output and load failures

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

use reelstats_core::{
    analysis::YearCount,
    catalog::{NOT_RATED, NO_DIRECTOR},
    run_pipeline,
    testing::{fixtures, RecordingRenderer},
    BitmapRenderer, CatalogError, Config, DirectorMatch, PipelineError,
};

/// Test helper holding a catalog file on disk and a config pointing at it.
struct TestHarness {
    config: Config,
    renderer: RecordingRenderer,
    temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        Self::with_csv(fixtures::THREE_ROW_CSV)
    }

    fn with_csv(csv: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("titles.csv");
        let mut file = fs::File::create(&input).expect("Failed to create catalog file");
        file.write_all(csv.as_bytes())
            .expect("Failed to write catalog file");

        let mut config = Config::default();
        config.input.path = input;
        config.output.chart_dir = temp_dir.path().join("charts");

        Self {
            config,
            renderer: RecordingRenderer::new(),
            temp_dir,
        }
    }

    fn run(&self) -> (Result<reelstats_core::PipelineReport, PipelineError>, String) {
        let mut out = Vec::new();
        let result = run_pipeline(&self.config, &self.renderer, &mut out);
        (result, String::from_utf8(out).expect("report is utf-8"))
    }
}

#[test]
fn test_three_row_catalog_end_to_end() {
    let harness = TestHarness::new();
    let (result, text) = harness.run();
    let report = result.expect("pipeline should succeed");

    assert_eq!((report.rows, report.columns), (3, 11));

    // Content types
    assert_eq!(report.content_types.total, 3);
    assert_eq!(report.content_types.count_of("Movie"), 2);
    assert_eq!(report.content_types.count_of("TV Show"), 1);
    let sum: f64 = report
        .content_types
        .entries
        .iter()
        .map(|e| e.percentage)
        .sum();
    assert!((sum - 100.0).abs() < 0.05);

    // Directors
    let names: Vec<&str> = report
        .directors
        .ranked
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ann Lee", "Bo Chen", "Cy Dunn"]);
    assert!(report.directors.ranked.iter().all(|d| d.count == 1));

    // Director-actors
    let overlap = &report.director_actors;
    assert_eq!(overlap.total, 2);
    assert_eq!(
        overlap.by_year,
        vec![
            YearCount {
                year: 2019,
                count: 1
            },
            YearCount {
                year: 2020,
                count: 1
            },
        ]
    );
    let examples: Vec<(&str, Vec<String>)> = overlap
        .examples
        .iter()
        .map(|e| (e.title.as_str(), e.names.clone()))
        .collect();
    assert_eq!(
        examples,
        vec![
            ("Hidden Figures Too", vec!["Ann Lee".to_string()]),
            ("Mirror Work", vec!["Cy Dunn".to_string()]),
        ]
    );

    // Insights
    let ratings: Vec<&str> = report
        .insights
        .top_ratings
        .iter()
        .map(|r| r.rating.as_str())
        .collect();
    assert!(ratings.contains(&NOT_RATED));
    assert_eq!(report.insights.movie_durations.len(), 2);

    assert!(text.contains("Movie: 2 titles (66.7%)"));
    assert!(text.contains("Found 2 titles where the director also acted."));
    assert_eq!(harness.renderer.recorded().len(), 6);
}

#[test]
fn test_loader_fills_sentinels_and_coerces_dates() {
    let catalog = reelstats_core::load_catalog_from_reader(fixtures::THREE_ROW_CSV.as_bytes())
        .expect("fixture should load");

    assert_eq!(catalog.rows[1].director, NO_DIRECTOR);
    assert_eq!(catalog.rows[1].country, "Country Not Listed");
    assert_eq!(catalog.rows[2].rating, NOT_RATED);
    assert!(catalog.rows[0].date_added.is_some());
    assert!(catalog.rows[2].date_added.is_none());
}

#[test]
fn test_missing_input_halts_before_analysis() {
    let mut harness = TestHarness::new();
    harness.config.input.path = PathBuf::from("/nonexistent/titles.csv");

    let (result, text) = harness.run();
    match result {
        Err(PipelineError::Catalog(err)) => assert!(err.is_not_found()),
        other => panic!("expected not-found error, got {:?}", other.map(|_| ())),
    }
    assert!(text.is_empty());
    assert!(harness.renderer.recorded().is_empty());
}

#[test]
fn test_malformed_header_is_generic_load_error() {
    let harness = TestHarness::with_csv("name,kind\nA,Movie\n");
    let (result, text) = harness.run();
    match result {
        Err(PipelineError::Catalog(CatalogError::MissingColumn { column })) => {
            assert_eq!(column, "title")
        }
        other => panic!("expected missing column error, got {:?}", other.map(|_| ())),
    }
    assert!(text.is_empty());
}

#[test]
fn test_json_report_is_written() {
    let mut harness = TestHarness::new();
    let json_path = harness.temp_dir.path().join("out").join("report.json");
    harness.config.output.json_report = Some(json_path.clone());

    let (result, _) = harness.run();
    result.expect("pipeline should succeed");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("report written"))
            .expect("valid json");
    assert_eq!(json["rows"], 3);
    assert_eq!(json["content_types"]["total"], 3);
    assert_eq!(json["director_actors"]["total"], 2);
}

#[test]
fn test_exact_director_match_from_config() {
    let csv = "title,type,director,cast,country,rating,release_year,date_added,duration\n\
               Short,Movie,Jan Suter,A,,,2020,,90 min\n\
               Long,Movie,Jan Suterland,B,,,2020,,90 min\n";
    let mut harness = TestHarness::with_csv(csv);
    harness.config.analysis.director_match = DirectorMatch::Exact;

    let (result, _) = harness.run();
    let report = result.expect("pipeline should succeed");
    let jan = report
        .directors
        .details
        .iter()
        .find(|d| d.name == "Jan Suter")
        .expect("Jan Suter ranked");
    assert_eq!(jan.sample_titles, vec!["Short"]);
}

#[test]
fn test_out_of_range_year_skips_only_its_charts() {
    let csv = "title,type,director,cast,country,rating,release_year,date_added,duration\n\
               Far Future,Movie,Ann Lee,Ann Lee,,,2147483647,,90 min\n\
               Now,TV Show,,,,,2020,,1 Season\n";
    let harness = TestHarness::with_csv(csv);
    let renderer = BitmapRenderer::new(&harness.config.output.chart_dir, Default::default());

    let report = run_pipeline(&harness.config, &renderer, &mut Vec::<u8>::new())
        .expect("pipeline should succeed");

    assert_eq!(report.director_actors.total, 1);
    let chart_dir = &harness.config.output.chart_dir;
    assert!(chart_dir.join("content_types.png").exists());
    assert!(!chart_dir.join("director_actors_by_year.png").exists());
    assert!(!chart_dir.join("releases_by_year.png").exists());
    assert!(report
        .charts
        .iter()
        .all(|path| !path.ends_with("releases_by_year.png")));
}
