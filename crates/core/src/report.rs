//! Console narrative for each analysis.
//!
//! Every function returns the full text of one section, heading included, so
//! callers decide where it goes.

use crate::analysis::{
    ColumnStats, ColumnSummary, ContentTypeBreakdown, DirectorActorOverlap, DirectorRanking,
    Insights,
};

fn heading(number: usize, title: &str) -> String {
    format!("\n=== {}. {} ===", number, title)
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

/// Section 1: shape, column types and descriptive statistics.
pub fn column_summary_section(summary: &ColumnSummary) -> String {
    let mut lines = vec![heading(1, "COLUMN ANALYSIS")];

    lines.push("\nDataset information:".to_string());
    lines.push(format!(
        "Rows: {}, Columns: {}",
        summary.rows, summary.columns
    ));
    lines.push(format!(
        "{:>3}  {:<16} {:<8} {:>9} {:>6}",
        "#", "Column", "Kind", "Non-null", "Null"
    ));
    for (index, entry) in summary.entries.iter().enumerate() {
        lines.push(format!(
            "{:>3}  {:<16} {:<8} {:>9} {:>6}",
            index,
            entry.name,
            entry.kind.as_str(),
            entry.non_null,
            entry.nulls
        ));
    }

    lines.push("\nDescriptive statistics:".to_string());
    for entry in &summary.entries {
        let stats = match &entry.stats {
            ColumnStats::Categorical {
                count,
                unique,
                top,
                freq,
            } => format!(
                "count={} unique={} top={} freq={}",
                count,
                unique,
                top.as_deref().unwrap_or("-"),
                freq
            ),
            ColumnStats::Numeric {
                count,
                mean,
                std,
                spread,
            } => format!(
                "count={} mean={} std={} min={} 25%={} 50%={} 75%={} max={}",
                count,
                fmt_opt(*mean),
                fmt_opt(*std),
                fmt_opt(spread.map(|s| s.min)),
                fmt_opt(spread.map(|s| s.q1)),
                fmt_opt(spread.map(|s| s.median)),
                fmt_opt(spread.map(|s| s.q3)),
                fmt_opt(spread.map(|s| s.max)),
            ),
            ColumnStats::Temporal {
                count,
                unique,
                first,
                last,
            } => format!(
                "count={} unique={} first={} last={}",
                count,
                unique,
                first.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
                last.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            ),
            ColumnStats::List { non_empty } => format!("non_empty={}", non_empty),
        };
        lines.push(format!("{}: {}", entry.name, stats));
    }

    lines.join("\n")
}

/// Section 2: titles per content type with their share.
pub fn content_types_section(breakdown: &ContentTypeBreakdown) -> String {
    let mut lines = vec![heading(2, "MOVIES AND TV SHOWS")];

    if breakdown.is_empty() {
        lines.push("\nNo titles to count.".to_string());
        return lines.join("\n");
    }

    lines.push("\nTitles per content type:".to_string());
    for entry in &breakdown.entries {
        lines.push(format!(
            "{}: {} titles ({:.1}%)",
            entry.content_type, entry.count, entry.percentage
        ));
    }

    lines.join("\n")
}

/// Section 3: most prolific directors with sample titles.
pub fn directors_section(ranking: &DirectorRanking) -> String {
    let mut lines = vec![heading(3, "DIRECTORS")];

    if ranking.details.is_empty() {
        lines.push("\nNo directors listed.".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "\nTop {} directors by number of titles:",
        ranking.details.len()
    ));
    for detail in &ranking.details {
        lines.push(format!("{}. {}: {} titles", detail.rank, detail.name, detail.count));
        lines.push(format!("   Some titles: {}", detail.sample_titles.join(", ")));
    }

    lines.join("\n")
}

/// Section 4: titles whose director also acted in them.
pub fn director_actors_section(overlap: &DirectorActorOverlap) -> String {
    let mut lines = vec![heading(4, "DIRECTORS WHO ALSO ACTED")];

    lines.push(format!(
        "\nFound {} titles where the director also acted.",
        overlap.total
    ));

    if !overlap.examples.is_empty() {
        lines.push("\nSome examples:".to_string());
        for example in &overlap.examples {
            lines.push(format!("Title: {}", example.title));
            lines.push(format!("Director(s)/Actor(s): {}", example.joined_names()));
            lines.push(format!(
                "Year: {}",
                example
                    .release_year
                    .map(|year| year.to_string())
                    .unwrap_or_else(|| "unknown".to_string())
            ));
            lines.push("---".to_string());
        }
    }

    lines.join("\n")
}

/// Section 5: release years, ratings and movie durations.
pub fn insights_section(insights: &Insights) -> String {
    let mut lines = vec![heading(5, "ADDITIONAL INSIGHTS")];

    match (
        insights.releases_by_year.first(),
        insights.releases_by_year.last(),
    ) {
        (Some(first), Some(last)) => lines.push(format!(
            "\nRelease years: {}-{} ({} distinct years)",
            first.year,
            last.year,
            insights.releases_by_year.len()
        )),
        _ => lines.push("\nNo release years listed.".to_string()),
    }

    if !insights.top_ratings.is_empty() {
        lines.push("\nMost common ratings:".to_string());
        for rating in &insights.top_ratings {
            lines.push(format!("  {}: {}", rating.rating, rating.count));
        }
    }

    if !insights.movie_durations.is_empty() {
        lines.push("\nMovie duration (minutes) by year:".to_string());
        for year in &insights.movie_durations {
            lines.push(format!(
                "  {}: median {:.1} (min {:.1}, max {:.1}, n={})",
                year.year, year.stats.median, year.stats.min, year.stats.max, year.stats.count
            ));
        }
    }

    lines.join("\n")
}
