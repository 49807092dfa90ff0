//! Directors who also appear in the cast of their own titles.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CatalogRow};
use crate::chart::{Chart, ChartLabels, LineChart};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// A title whose director also acted in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapExample {
    pub title: String,
    pub names: Vec<String>,
    pub release_year: Option<i32>,
}

impl OverlapExample {
    pub fn joined_names(&self) -> String {
        self.names.join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectorActorOverlap {
    /// Flagged rows, including those without a release year.
    pub total: usize,
    /// Flagged rows per release year, ascending.
    pub by_year: Vec<YearCount>,
    pub examples: Vec<OverlapExample>,
}

impl DirectorActorOverlap {
    pub fn chart(&self) -> Option<Chart> {
        if self.by_year.is_empty() {
            return None;
        }

        Some(Chart::Line(LineChart {
            labels: ChartLabels::new(
                "director_actors_by_year",
                "Director-Actors Over the Years",
                "Year",
                "Number of Titles",
            ),
            points: self
                .by_year
                .iter()
                .map(|entry| (entry.year, entry.count as f64))
                .collect(),
        }))
    }
}

/// Names listed both as director and as cast member of `row`.
///
/// Empty when either field holds its sentinel. Names keep the order they have
/// in the director field.
pub fn director_actor_names(row: &CatalogRow) -> Vec<String> {
    if !row.has_director() || !row.has_cast() {
        return Vec::new();
    }

    let cast: HashSet<&str> = row.cast_members().into_iter().collect();
    let mut seen = HashSet::new();
    row.directors()
        .into_iter()
        .filter(|name| cast.contains(name) && seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Fill the derived `director_actor` column for every row.
pub fn enrich_director_actor(catalog: &mut Catalog) {
    for row in &mut catalog.rows {
        row.director_actor = director_actor_names(row);
    }
    catalog.director_actor_enriched = true;
}

/// Enrich the catalog, then aggregate the flagged rows.
pub fn find_director_actors(catalog: &mut Catalog, max_examples: usize) -> DirectorActorOverlap {
    enrich_director_actor(catalog);

    let flagged: Vec<&CatalogRow> = catalog
        .rows
        .iter()
        .filter(|row| !row.director_actor.is_empty())
        .collect();

    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    for year in flagged.iter().filter_map(|row| row.release_year) {
        *by_year.entry(year).or_insert(0) += 1;
    }

    debug!(
        "{} director-actor titles across {} release years",
        flagged.len(),
        by_year.len()
    );

    DirectorActorOverlap {
        total: flagged.len(),
        by_year: by_year
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
        examples: flagged
            .iter()
            .take(max_examples)
            .map(|row| OverlapExample {
                title: row.title.clone(),
                names: row.director_actor.clone(),
                release_year: row.release_year,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NO_CAST, NO_DIRECTOR};
    use crate::testing::fixtures;

    #[test]
    fn test_intersection_of_director_and_cast() {
        let row = fixtures::row("T", "Movie", "X, Y", "Y, Z", Some(2019));
        assert_eq!(director_actor_names(&row), vec!["Y".to_string()]);
    }

    #[test]
    fn test_sentinels_yield_no_overlap() {
        let no_director = fixtures::row("T", "Movie", NO_DIRECTOR, "A, B", Some(2019));
        let no_cast = fixtures::row("T", "Movie", "A", NO_CAST, Some(2019));
        assert!(director_actor_names(&no_director).is_empty());
        assert!(director_actor_names(&no_cast).is_empty());
    }

    #[test]
    fn test_duplicate_director_listed_once() {
        let row = fixtures::row("T", "Movie", "A, A, B", "B, A", Some(2019));
        assert_eq!(
            director_actor_names(&row),
            vec!["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_enrich_sets_column_and_shape() {
        let mut catalog = Catalog::from_rows(vec![fixtures::row(
            "T",
            "Movie",
            "X, Y",
            "Y, Z",
            Some(2019),
        )]);
        let (_, before) = catalog.shape();
        enrich_director_actor(&mut catalog);
        assert_eq!(catalog.rows[0].director_actor, vec!["Y".to_string()]);
        assert_eq!(catalog.shape().1, before + 1);
    }

    #[test]
    fn test_aggregate_by_year() {
        let mut catalog = Catalog::from_rows(vec![
            fixtures::row("Late", "Movie", "A", "A", Some(2021)),
            fixtures::row("Early", "Movie", "B", "B, C", Some(2018)),
            fixtures::row("Early Too", "TV Show", "C", "C", Some(2018)),
            fixtures::row("Unknown Year", "Movie", "D", "D", None),
            fixtures::row("No Overlap", "Movie", "E", "F", Some(2018)),
        ]);

        let overlap = find_director_actors(&mut catalog, 5);
        assert_eq!(overlap.total, 4);
        assert_eq!(
            overlap.by_year,
            vec![
                YearCount { year: 2018, count: 2 },
                YearCount { year: 2021, count: 1 },
            ]
        );
        assert_eq!(overlap.examples.len(), 4);
        assert_eq!(overlap.examples[0].title, "Late");
        assert_eq!(overlap.examples[3].release_year, None);
    }

    #[test]
    fn test_examples_are_capped() {
        let rows = (0..8)
            .map(|i| fixtures::row(&format!("T{}", i), "Movie", "A", "A", Some(2000 + i)))
            .collect();
        let mut catalog = Catalog::from_rows(rows);
        let overlap = find_director_actors(&mut catalog, 5);
        assert_eq!(overlap.total, 8);
        assert_eq!(overlap.examples.len(), 5);
        assert!(overlap.chart().is_some());
    }

    #[test]
    fn test_joined_names() {
        let example = OverlapExample {
            title: "T".to_string(),
            names: vec!["A".to_string(), "B".to_string()],
            release_year: Some(2020),
        };
        assert_eq!(example.joined_names(), "A, B");
    }
}
