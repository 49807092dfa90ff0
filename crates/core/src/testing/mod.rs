//! Testing utilities: a recording chart renderer and catalog fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use reelstats_core::testing::{fixtures, RecordingRenderer};
//!
//! let renderer = RecordingRenderer::new();
//! let catalog = Catalog::from_rows(vec![fixtures::movie("Title", 2020)]);
//! // run the pipeline with &renderer...
//! assert_eq!(renderer.rendered_stems(), vec!["content_types"]);
//! ```

mod recording_renderer;

pub use recording_renderer::RecordingRenderer;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{
        CatalogRow, COUNTRY_NOT_LISTED, MOVIE, NOT_RATED, NO_CAST, NO_DIRECTOR, TV_SHOW,
    };

    /// A row with the given people and year; other fields hold sentinels.
    pub fn row(
        title: &str,
        content_type: &str,
        director: &str,
        cast: &str,
        release_year: Option<i32>,
    ) -> CatalogRow {
        CatalogRow {
            title: title.to_string(),
            content_type: content_type.to_string(),
            director: director.to_string(),
            cast: cast.to_string(),
            country: COUNTRY_NOT_LISTED.to_string(),
            rating: NOT_RATED.to_string(),
            release_year,
            ..Default::default()
        }
    }

    /// A movie with no director or cast listed.
    pub fn movie(title: &str, year: i32) -> CatalogRow {
        row(title, MOVIE, NO_DIRECTOR, NO_CAST, Some(year))
    }

    /// A TV show with no director or cast listed.
    pub fn tv_show(title: &str, year: i32) -> CatalogRow {
        row(title, TV_SHOW, NO_DIRECTOR, NO_CAST, Some(year))
    }

    /// Header plus three rows in the catalog CSV layout.
    ///
    /// - "Hidden Figures Too": movie, 2019, directed by and starring Ann Lee
    /// - "Quiet Streets": TV show, 2020, no director
    /// - "Mirror Work": movie, 2020, Bo Chen and Cy Dunn direct, Cy Dunn acts
    pub const THREE_ROW_CSV: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration
s1,Movie,Hidden Figures Too,Ann Lee,\"Ann Lee, Max Ray\",United States,\"March 1, 2021\",2019,PG-13,95 min
s2,TV Show,Quiet Streets,,\"Ann Lee, Zoe Park\",,\"April 10, 2021\",2020,TV-MA,2 Seasons
s3,Movie,Mirror Work,\"Bo Chen, Cy Dunn\",\"Cy Dunn, Eve Fox\",India,not a date,2020,,110 min
";
}
