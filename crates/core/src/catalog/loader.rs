//! CSV loader for catalog files.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, info};

use super::error::CatalogError;
use super::types::{Catalog, CatalogRow, COUNTRY_NOT_LISTED, NOT_RATED, NO_CAST, NO_DIRECTOR};

/// Header columns a catalog file must provide.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "title",
    "type",
    "director",
    "cast",
    "country",
    "rating",
    "release_year",
    "date_added",
    "duration",
];

/// Formats accepted for `date_added`, tried in order.
const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

/// Load a catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    info!("Loading catalog from {:?}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io(e),
    })?;

    let mut catalog = load_catalog_from_reader(file)?;
    catalog.source = path.to_path_buf();

    let (rows, columns) = catalog.shape();
    info!("Catalog loaded: {} rows x {} columns", rows, columns);
    Ok(catalog)
}

/// Load a catalog from any reader producing CSV with a header row.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        rows.push(layout.parse_row(&record?));
    }

    let extra_columns = layout.extra.into_iter().map(|(_, name)| name).collect();
    Ok(Catalog::new(Default::default(), extra_columns, rows))
}

/// Parse a `date_added` value. Unparseable input yields `None`.
pub fn parse_date_added(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok());
    if parsed.is_none() {
        debug!("Unparseable date_added value: {:?}", value);
    }
    parsed
}

/// Parse a `release_year` value. Non-numeric input yields `None`.
pub fn parse_release_year(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Positions of the known columns within a header row.
struct ColumnLayout {
    title: usize,
    content_type: usize,
    director: usize,
    cast: usize,
    country: usize,
    rating: usize,
    release_year: usize,
    date_added: usize,
    duration: usize,
    extra: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut extra = Vec::new();

        for (index, name) in headers.iter().enumerate() {
            if REQUIRED_COLUMNS.contains(&name) && !positions.contains_key(name) {
                positions.insert(name, index);
            } else {
                extra.push((index, name.to_string()));
            }
        }

        let position = |column: &str| {
            positions
                .get(column)
                .copied()
                .ok_or_else(|| CatalogError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            title: position("title")?,
            content_type: position("type")?,
            director: position("director")?,
            cast: position("cast")?,
            country: position("country")?,
            rating: position("rating")?,
            release_year: position("release_year")?,
            date_added: position("date_added")?,
            duration: position("duration")?,
            extra,
        })
    }

    fn parse_row(&self, record: &StringRecord) -> CatalogRow {
        let cell = |index: usize| {
            record
                .get(index)
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };
        let filled = |index: usize, sentinel: &str| cell(index).unwrap_or(sentinel).to_string();

        CatalogRow {
            title: filled(self.title, ""),
            content_type: filled(self.content_type, ""),
            director: filled(self.director, NO_DIRECTOR),
            cast: filled(self.cast, NO_CAST),
            country: filled(self.country, COUNTRY_NOT_LISTED),
            rating: filled(self.rating, NOT_RATED),
            release_year: cell(self.release_year).and_then(parse_release_year),
            date_added: cell(self.date_added).and_then(parse_date_added),
            duration: cell(self.duration).map(str::to_string),
            director_actor: Vec::new(),
            extra: self
                .extra
                .iter()
                .map(|(index, _)| cell(*index).map(str::to_string))
                .collect(),
        }
    }
}
