//! Release-year, rating and movie-duration views.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::Serialize;

use super::stats::{value_counts, BoxStats};
use crate::catalog::Catalog;
use crate::chart::{BarChart, BoxPlotChart, Chart, ChartLabels, Orientation, StackedHistogram};

/// Leading minute count of a movie duration ("90 min").
static MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*min").unwrap());

/// Titles released in one year, per content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearTypeCounts {
    pub year: i32,
    /// `(content type, count)`, ordered by content type.
    pub counts: Vec<(String, usize)>,
}

impl YearTypeCounts {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingCount {
    pub rating: String,
    pub count: usize,
}

/// Movie duration distribution for one release year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearDurations {
    pub year: i32,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    /// Ascending by year.
    pub releases_by_year: Vec<YearTypeCounts>,
    /// Most common first.
    pub top_ratings: Vec<RatingCount>,
    /// Ascending by year; years without a parsable duration are left out.
    pub movie_durations: Vec<YearDurations>,
    /// Configured number of ratings, used in the chart title.
    pub rating_limit: usize,
}

impl Insights {
    /// Content types present in `releases_by_year`, in stacking order.
    pub fn content_types(&self) -> Vec<String> {
        self.releases_by_year
            .iter()
            .flat_map(|year| year.counts.iter().map(|(content_type, _)| content_type.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Charts for the non-empty views, in display order.
    pub fn charts(&self) -> Vec<Chart> {
        let mut charts = Vec::new();

        if !self.releases_by_year.is_empty() {
            let series = self.content_types();
            let bins = self
                .releases_by_year
                .iter()
                .map(|year| {
                    let counts = series
                        .iter()
                        .map(|content_type| {
                            year.counts
                                .iter()
                                .find(|(name, _)| name == content_type)
                                .map(|(_, count)| *count)
                                .unwrap_or(0)
                        })
                        .collect();
                    (year.year, counts)
                })
                .collect();

            charts.push(Chart::StackedHistogram(StackedHistogram {
                labels: ChartLabels::new(
                    "releases_by_year",
                    "Content by Release Year",
                    "Year",
                    "Number of Titles",
                ),
                series,
                bins,
            }));
        }

        if !self.top_ratings.is_empty() {
            charts.push(Chart::Bar(BarChart {
                labels: ChartLabels::new(
                    "top_ratings",
                    format!("Top {} Most Common Ratings", self.rating_limit),
                    "Number of Titles",
                    "Rating",
                ),
                orientation: Orientation::Horizontal,
                bars: self
                    .top_ratings
                    .iter()
                    .map(|rating| (rating.rating.clone(), rating.count as f64))
                    .collect(),
            }));
        }

        if !self.movie_durations.is_empty() {
            charts.push(Chart::BoxPlot(BoxPlotChart {
                labels: ChartLabels::new(
                    "movie_durations",
                    "Movie Duration by Year",
                    "Year",
                    "Duration (minutes)",
                ),
                groups: self
                    .movie_durations
                    .iter()
                    .map(|year| (year.year.to_string(), year.stats))
                    .collect(),
            }));
        }

        charts
    }
}

/// Minutes of a movie duration such as `"90 min"`.
///
/// Season counts (`"3 Seasons"`), free text and missing values yield `None`.
pub fn parse_duration_minutes(duration: Option<&str>) -> Option<f64> {
    let captures = MINUTES.captures(duration?.trim())?;
    captures.get(1)?.as_str().parse().ok()
}

/// Compute the three additional views.
pub fn find_insights(catalog: &Catalog, top_ratings: usize) -> Insights {
    let rating_limit = top_ratings;
    let mut releases: BTreeMap<i32, BTreeMap<&str, usize>> = BTreeMap::new();
    for row in &catalog.rows {
        let Some(year) = row.release_year else {
            continue;
        };
        if row.content_type.is_empty() {
            continue;
        }
        *releases
            .entry(year)
            .or_default()
            .entry(row.content_type.as_str())
            .or_insert(0) += 1;
    }

    let top_ratings = value_counts(catalog.rows.iter().map(|row| row.rating.as_str()))
        .into_iter()
        .take(top_ratings)
        .map(|(rating, count)| RatingCount { rating, count })
        .collect();

    let mut durations: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for row in catalog.rows.iter().filter(|row| row.is_movie()) {
        let (Some(year), Some(minutes)) = (
            row.release_year,
            parse_duration_minutes(row.duration.as_deref()),
        ) else {
            continue;
        };
        durations.entry(year).or_default().push(minutes);
    }

    Insights {
        releases_by_year: releases
            .into_iter()
            .map(|(year, counts)| YearTypeCounts {
                year,
                counts: counts
                    .into_iter()
                    .map(|(content_type, count)| (content_type.to_string(), count))
                    .collect(),
            })
            .collect(),
        top_ratings,
        movie_durations: durations
            .into_iter()
            .filter_map(|(year, minutes)| {
                BoxStats::from_values(&minutes).map(|stats| YearDurations { year, stats })
            })
            .collect(),
        rating_limit,
    }
}
