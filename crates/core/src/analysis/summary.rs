//! Per-column shape, type and descriptive statistics.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::stats::{mean, sample_std, value_counts, BoxStats};
use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Integer,
    Date,
    List,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stats", rename_all = "snake_case")]
pub enum ColumnStats {
    Categorical {
        count: usize,
        unique: usize,
        top: Option<String>,
        freq: usize,
    },
    Numeric {
        count: usize,
        mean: Option<f64>,
        std: Option<f64>,
        /// min / 25% / 50% / 75% / max
        spread: Option<BoxStats>,
    },
    Temporal {
        count: usize,
        unique: usize,
        first: Option<NaiveDate>,
        last: Option<NaiveDate>,
    },
    List {
        non_empty: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub kind: ColumnKind,
    pub non_null: usize,
    pub nulls: usize,
    pub stats: ColumnStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub rows: usize,
    pub columns: usize,
    pub entries: Vec<ColumnReport>,
}

impl ColumnSummary {
    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

fn categorical<'a>(
    name: &str,
    rows: usize,
    values: impl Iterator<Item = Option<&'a str>>,
) -> ColumnReport {
    let present: Vec<&str> = values.flatten().collect();
    let counts = value_counts(present.iter().copied());
    let (top, freq) = counts
        .first()
        .map(|(value, count)| (Some(value.clone()), *count))
        .unwrap_or((None, 0));

    ColumnReport {
        name: name.to_string(),
        kind: ColumnKind::Text,
        non_null: present.len(),
        nulls: rows - present.len(),
        stats: ColumnStats::Categorical {
            count: present.len(),
            unique: counts.len(),
            top,
            freq,
        },
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

/// Describe every column of the catalog.
pub fn summarize_columns(catalog: &Catalog) -> ColumnSummary {
    let rows = catalog.len();
    let table = &catalog.rows;
    let mut entries = vec![
        categorical("title", rows, table.iter().map(|r| non_empty(&r.title))),
        categorical("type", rows, table.iter().map(|r| non_empty(&r.content_type))),
        categorical("director", rows, table.iter().map(|r| Some(r.director.as_str()))),
        categorical("cast", rows, table.iter().map(|r| Some(r.cast.as_str()))),
        categorical("country", rows, table.iter().map(|r| Some(r.country.as_str()))),
        categorical("rating", rows, table.iter().map(|r| Some(r.rating.as_str()))),
    ];

    let years: Vec<f64> = table
        .iter()
        .filter_map(|r| r.release_year)
        .map(f64::from)
        .collect();
    entries.push(ColumnReport {
        name: "release_year".to_string(),
        kind: ColumnKind::Integer,
        non_null: years.len(),
        nulls: rows - years.len(),
        stats: ColumnStats::Numeric {
            count: years.len(),
            mean: mean(&years),
            std: sample_std(&years),
            spread: BoxStats::from_values(&years),
        },
    });

    let dates: Vec<NaiveDate> = table.iter().filter_map(|r| r.date_added).collect();
    entries.push(ColumnReport {
        name: "date_added".to_string(),
        kind: ColumnKind::Date,
        non_null: dates.len(),
        nulls: rows - dates.len(),
        stats: ColumnStats::Temporal {
            count: dates.len(),
            unique: dates.iter().collect::<HashSet<_>>().len(),
            first: dates.iter().min().copied(),
            last: dates.iter().max().copied(),
        },
    });

    entries.push(categorical(
        "duration",
        rows,
        table.iter().map(|r| r.duration.as_deref()),
    ));

    for (index, name) in catalog.extra_columns.iter().enumerate() {
        entries.push(categorical(
            name,
            rows,
            table
                .iter()
                .map(move |r| r.extra.get(index).and_then(|value| value.as_deref())),
        ));
    }

    if catalog.director_actor_enriched {
        let non_empty = table.iter().filter(|r| !r.director_actor.is_empty()).count();
        entries.push(ColumnReport {
            name: "director_actor".to_string(),
            kind: ColumnKind::List,
            non_null: rows,
            nulls: 0,
            stats: ColumnStats::List { non_empty },
        });
    }

    let (rows, columns) = catalog.shape();
    ColumnSummary {
        rows,
        columns,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::enrich_director_actor;
    use crate::catalog::{load_catalog_from_reader, NO_DIRECTOR};
    use crate::testing::fixtures;

    #[test]
    fn test_summary_covers_every_column() {
        let csv = "show_id,type,title,director,cast,country,date_added,release_year,rating,duration\n\
                   s1,Movie,A,,X,US,\"September 25, 2021\",2020,PG,90 min\n\
                   s2,TV Show,B,Dir,Y,,bad date,2018,PG,2 Seasons\n";
        let catalog = load_catalog_from_reader(csv.as_bytes()).unwrap();
        let summary = summarize_columns(&catalog);

        assert_eq!((summary.rows, summary.columns), (2, 10));
        assert_eq!(summary.entries.len(), 10);
        assert!(summary.column("show_id").is_some());

        let director = summary.column("director").unwrap();
        assert_eq!(director.nulls, 0);
        assert_eq!(
            director.stats,
            ColumnStats::Categorical {
                count: 2,
                unique: 2,
                top: Some("Dir".to_string()),
                freq: 1
            }
        );

        let rating = summary.column("rating").unwrap();
        match &rating.stats {
            ColumnStats::Categorical { top, freq, .. } => {
                assert_eq!(top.as_deref(), Some("PG"));
                assert_eq!(*freq, 2);
            }
            other => panic!("unexpected stats: {:?}", other),
        }

        let date = summary.column("date_added").unwrap();
        assert_eq!((date.non_null, date.nulls), (1, 1));
    }

    #[test]
    fn test_numeric_release_year_stats() {
        let catalog = Catalog::from_rows(vec![
            fixtures::movie("A", 2000),
            fixtures::movie("B", 2010),
            fixtures::movie("C", 2020),
        ]);
        let summary = summarize_columns(&catalog);
        let years = summary.column("release_year").unwrap();
        assert_eq!(years.kind, ColumnKind::Integer);
        match &years.stats {
            ColumnStats::Numeric {
                count,
                mean,
                std,
                spread,
            } => {
                assert_eq!(*count, 3);
                assert_eq!(*mean, Some(2010.0));
                assert_eq!(*std, Some(10.0));
                let spread = spread.unwrap();
                assert_eq!((spread.min, spread.q1, spread.median), (2000.0, 2005.0, 2010.0));
                assert_eq!((spread.q3, spread.max), (2015.0, 2020.0));
            }
            other => panic!("unexpected stats: {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_summary() {
        let summary = summarize_columns(&Catalog::default());
        assert_eq!(summary.rows, 0);
        let title = summary.column("title").unwrap();
        assert_eq!(
            title.stats,
            ColumnStats::Categorical {
                count: 0,
                unique: 0,
                top: None,
                freq: 0
            }
        );
    }

    #[test]
    fn test_director_actor_column_after_enrichment() {
        let mut catalog = Catalog::from_rows(vec![
            fixtures::row("A", "Movie", "X", "X", Some(2020)),
            fixtures::row("B", "Movie", NO_DIRECTOR, "X", Some(2020)),
        ]);
        assert!(summarize_columns(&catalog).column("director_actor").is_none());

        enrich_director_actor(&mut catalog);
        let summary = summarize_columns(&catalog);
        let column = summary.column("director_actor").unwrap();
        assert_eq!(column.stats, ColumnStats::List { non_empty: 1 });
        assert_eq!(summary.columns, 10);
    }
}
