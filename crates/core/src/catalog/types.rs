//! Catalog row and table types.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel stored in `director` when the cell is empty.
pub const NO_DIRECTOR: &str = "No Director";
/// Sentinel stored in `cast` when the cell is empty.
pub const NO_CAST: &str = "No Cast";
/// Sentinel stored in `country` when the cell is empty.
pub const COUNTRY_NOT_LISTED: &str = "Country Not Listed";
/// Sentinel stored in `rating` when the cell is empty.
pub const NOT_RATED: &str = "Not Rated";

pub const MOVIE: &str = "Movie";
pub const TV_SHOW: &str = "TV Show";

/// Number of columns every catalog carries.
const KNOWN_COLUMNS: usize = 9;

/// Split a multi-value field ("A, B, C") into trimmed, non-empty names.
pub fn split_names(field: &str) -> impl Iterator<Item = &str> {
    field.split(", ").map(str::trim).filter(|name| !name.is_empty())
}

/// One title in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub title: String,
    /// Value of the `type` column ("Movie", "TV Show", ...).
    pub content_type: String,
    /// Comma-separated names or [`NO_DIRECTOR`].
    pub director: String,
    /// Comma-separated names or [`NO_CAST`].
    pub cast: String,
    /// Country list or [`COUNTRY_NOT_LISTED`].
    pub country: String,
    /// Rating or [`NOT_RATED`].
    pub rating: String,
    pub release_year: Option<i32>,
    pub date_added: Option<NaiveDate>,
    /// Raw duration text ("90 min", "3 Seasons").
    pub duration: Option<String>,
    /// Names present in both `director` and `cast`. Empty until the catalog
    /// is enriched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub director_actor: Vec<String>,
    /// Values of columns outside the known layout, aligned with
    /// [`Catalog::extra_columns`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Option<String>>,
}

impl CatalogRow {
    /// Whether the director field holds real names.
    pub fn has_director(&self) -> bool {
        self.director != NO_DIRECTOR
    }

    /// Whether the cast field holds real names.
    pub fn has_cast(&self) -> bool {
        self.cast != NO_CAST
    }

    /// Directors listed for this row (empty for the sentinel).
    pub fn directors(&self) -> Vec<&str> {
        if self.has_director() {
            split_names(&self.director).collect()
        } else {
            Vec::new()
        }
    }

    /// Cast members listed for this row (empty for the sentinel).
    pub fn cast_members(&self) -> Vec<&str> {
        if self.has_cast() {
            split_names(&self.cast).collect()
        } else {
            Vec::new()
        }
    }

    pub fn is_movie(&self) -> bool {
        self.content_type == MOVIE
    }
}

/// The loaded catalog table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// File the catalog was read from (empty for in-memory catalogs).
    pub source: PathBuf,
    /// Names of columns outside the known layout, in file order.
    pub extra_columns: Vec<String>,
    pub rows: Vec<CatalogRow>,
    /// Set once the `director_actor` column has been derived.
    pub director_actor_enriched: bool,
}

impl Catalog {
    pub fn new(source: PathBuf, extra_columns: Vec<String>, rows: Vec<CatalogRow>) -> Self {
        Self {
            source,
            extra_columns,
            rows,
            director_actor_enriched: false,
        }
    }

    /// Build an in-memory catalog with no extra columns.
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        Self::new(PathBuf::new(), Vec::new(), rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`, counting the derived column once present.
    pub fn shape(&self) -> (usize, usize) {
        let derived = usize::from(self.director_actor_enriched);
        (
            self.rows.len(),
            KNOWN_COLUMNS + self.extra_columns.len() + derived,
        )
    }
}
