//! Director ranking.

use serde::Serialize;

use super::stats::value_counts;
use crate::catalog::{split_names, Catalog, CatalogRow};
use crate::chart::{BarChart, Chart, ChartLabels, Orientation};
use crate::config::{AnalysisConfig, DirectorMatch};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorCount {
    pub name: String,
    pub count: usize,
}

/// A top director with a few of their titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorDetail {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    pub count: usize,
    pub sample_titles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectorRanking {
    /// Most prolific first.
    pub ranked: Vec<DirectorCount>,
    pub details: Vec<DirectorDetail>,
    /// Configured ranking size, used in the chart title.
    pub limit: usize,
}

impl DirectorRanking {
    pub fn chart(&self) -> Option<Chart> {
        if self.ranked.is_empty() {
            return None;
        }

        Some(Chart::Bar(BarChart {
            labels: ChartLabels::new(
                "top_directors",
                format!("Top {} Directors by Titles", self.limit),
                "Number of Titles",
                "Director",
            ),
            orientation: Orientation::Horizontal,
            bars: self
                .ranked
                .iter()
                .map(|director| (director.name.clone(), director.count as f64))
                .collect(),
        }))
    }
}

/// One entry per listed director, skipping rows without a director.
pub fn explode_directors(catalog: &Catalog) -> impl Iterator<Item = &str> {
    catalog
        .rows
        .iter()
        .filter(|row| row.has_director())
        .flat_map(|row| split_names(&row.director))
}

fn credits_director(row: &CatalogRow, name: &str, mode: DirectorMatch) -> bool {
    match mode {
        DirectorMatch::Substring => row.director.contains(name),
        DirectorMatch::Exact => row.directors().contains(&name),
    }
}

/// Rank directors by number of titles.
pub fn rank_directors(catalog: &Catalog, config: &AnalysisConfig) -> DirectorRanking {
    let ranked: Vec<DirectorCount> = value_counts(explode_directors(catalog))
        .into_iter()
        .take(config.top_directors)
        .map(|(name, count)| DirectorCount { name, count })
        .collect();

    let details = ranked
        .iter()
        .take(config.detail_directors)
        .enumerate()
        .map(|(index, director)| DirectorDetail {
            rank: index + 1,
            name: director.name.clone(),
            count: director.count,
            sample_titles: catalog
                .rows
                .iter()
                .filter(|row| credits_director(row, &director.name, config.director_match))
                .take(config.titles_per_director)
                .map(|row| row.title.clone())
                .collect(),
        })
        .collect();

    DirectorRanking {
        ranked,
        details,
        limit: config.top_directors,
    }
}
