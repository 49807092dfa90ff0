//! Movies vs TV shows breakdown.

use serde::Serialize;

use super::stats::value_counts;
use crate::catalog::Catalog;
use crate::chart::{BarChart, Chart, ChartLabels, Orientation};

/// Share of one content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    pub content_type: String,
    pub count: usize,
    /// Share of all rows, 0-100. Not rounded.
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentTypeBreakdown {
    /// Rows in the catalog, including rows with no type.
    pub total: usize,
    /// Most frequent type first.
    pub entries: Vec<TypeShare>,
}

impl ContentTypeBreakdown {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a given type, 0 if absent.
    pub fn count_of(&self, content_type: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.content_type == content_type)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Bar chart of counts per type; `None` when there is nothing to plot.
    pub fn chart(&self) -> Option<Chart> {
        if self.is_empty() {
            return None;
        }

        Some(Chart::Bar(BarChart {
            labels: ChartLabels::new(
                "content_types",
                "Content Distribution",
                "Content Type",
                "Count",
            ),
            orientation: Orientation::Vertical,
            bars: self
                .entries
                .iter()
                .map(|entry| (entry.content_type.clone(), entry.count as f64))
                .collect(),
        }))
    }
}

/// Count rows per content type.
///
/// An empty catalog yields a zero total and no entries instead of dividing
/// by zero.
pub fn count_content_types(catalog: &Catalog) -> ContentTypeBreakdown {
    let total = catalog.len();
    if total == 0 {
        return ContentTypeBreakdown::default();
    }

    let counts = value_counts(
        catalog
            .rows
            .iter()
            .map(|row| row.content_type.as_str())
            .filter(|content_type| !content_type.is_empty()),
    );

    ContentTypeBreakdown {
        total,
        entries: counts
            .into_iter()
            .map(|(content_type, count)| TypeShare {
                content_type,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_counts_and_percentages() {
        let catalog = Catalog::from_rows(vec![
            fixtures::movie("A", 2020),
            fixtures::movie("B", 2020),
            fixtures::tv_show("C", 2021),
        ]);

        let breakdown = count_content_types(&catalog);
        assert_eq!(breakdown.total, 3);
        assert_eq!(breakdown.entries[0].content_type, "Movie");
        assert_eq!(breakdown.count_of("Movie"), 2);
        assert_eq!(breakdown.count_of("TV Show"), 1);
        assert_eq!(breakdown.count_of("Special"), 0);

        let sum: f64 = breakdown.entries.iter().map(|e| e.percentage).sum();
        assert!((sum - 100.0).abs() < 0.05);
        assert_eq!(format!("{:.1}", breakdown.entries[0].percentage), "66.7");
        assert_eq!(format!("{:.1}", breakdown.entries[1].percentage), "33.3");
    }

    #[test]
    fn test_empty_catalog_has_no_entries_and_no_chart() {
        let breakdown = count_content_types(&Catalog::default());
        assert_eq!(breakdown.total, 0);
        assert!(breakdown.is_empty());
        assert!(breakdown.chart().is_none());
    }

    #[test]
    fn test_rows_without_type_count_toward_total_only() {
        let mut untyped = fixtures::movie("X", 2020);
        untyped.content_type = String::new();
        let catalog = Catalog::from_rows(vec![fixtures::movie("A", 2020), untyped]);

        let breakdown = count_content_types(&catalog);
        assert_eq!(breakdown.total, 2);
        assert_eq!(breakdown.entries.len(), 1);
        assert_eq!(breakdown.entries[0].percentage, 50.0);
    }

    #[test]
    fn test_chart_has_one_bar_per_type() {
        let catalog = Catalog::from_rows(vec![
            fixtures::movie("A", 2020),
            fixtures::tv_show("B", 2021),
        ]);
        let chart = count_content_types(&catalog).chart().unwrap();
        match chart {
            Chart::Bar(bar) => {
                assert_eq!(bar.orientation, Orientation::Vertical);
                assert_eq!(bar.bars.len(), 2);
                assert_eq!(bar.labels.title, "Content Distribution");
            }
            other => panic!("unexpected chart: {:?}", other),
        }
    }
}
