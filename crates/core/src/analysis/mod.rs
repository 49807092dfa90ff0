//! Catalog analyses.
//!
//! Each analysis reads a [`Catalog`](crate::catalog::Catalog) and returns a
//! plain result structure. Charts are described by the results themselves and
//! rendered separately, so none of this module touches a drawing backend.
//!
//! | analysis | entry point | result |
//! |----------|-------------|--------|
//! | column summary | [`summarize_columns`] | [`ColumnSummary`] |
//! | content types | [`count_content_types`] | [`ContentTypeBreakdown`] |
//! | top directors | [`rank_directors`] | [`DirectorRanking`] |
//! | director-actors | [`find_director_actors`] | [`DirectorActorOverlap`] |
//! | additional insights | [`find_insights`] | [`Insights`] |

mod content_types;
mod directors;
mod insights;
mod overlap;
mod stats;
mod summary;

pub use content_types::{count_content_types, ContentTypeBreakdown, TypeShare};
pub use directors::{explode_directors, rank_directors, DirectorCount, DirectorDetail, DirectorRanking};
pub use insights::{
    find_insights, parse_duration_minutes, Insights, RatingCount, YearDurations, YearTypeCounts,
};
pub use overlap::{
    director_actor_names, enrich_director_actor, find_director_actors, DirectorActorOverlap,
    OverlapExample, YearCount,
};
pub use stats::{mean, quantile, sample_std, value_counts, BoxStats};
pub use summary::{summarize_columns, ColumnKind, ColumnReport, ColumnStats, ColumnSummary};
