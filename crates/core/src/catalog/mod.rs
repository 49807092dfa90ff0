//! Catalog model and loader.
//!
//! A catalog is a table of titles read from a comma-separated file in the
//! "Netflix titles" layout. Loading fills the nullable text columns with
//! sentinel strings and coerces unparseable dates and years to `None`.
//!
//! # Example
//!
//! ```ignore
//! use reelstats_core::catalog::load_catalog;
//!
//! let catalog = load_catalog(Path::new("netflix_titles.csv"))?;
//! let (rows, columns) = catalog.shape();
//! println!("{} rows x {} columns", rows, columns);
//! ```

mod error;
mod loader;
mod types;

pub use error::CatalogError;
pub use loader::{
    load_catalog, load_catalog_from_reader, parse_date_added, parse_release_year,
    REQUIRED_COLUMNS,
};
pub use types::{
    split_names, Catalog, CatalogRow, COUNTRY_NOT_LISTED, MOVIE, NOT_RATED, NO_CAST,
    NO_DIRECTOR, TV_SHOW,
};
