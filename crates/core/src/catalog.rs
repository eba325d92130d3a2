//! Catalog loading from files and standard input.
//!
//! A catalog is a JSON document with two lists, `movies` and `series`:
//!
//! ```json
//! {
//!   "movies": [{ "id": 1, "original_title": "Inception", "release_date": "2010-07-16" }],
//!   "series": []
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Movie, Series};
use crate::{FilmwikiError, Result};

/// Every entity rendered in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl Catalog {
    /// Parses a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        debug!(movies = catalog.movies.len(), series = catalog.series.len(), "parsed catalog");
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&read_file(path)?)
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.series.is_empty()
    }
}

/// Reads a UTF-8 file.
///
/// Returns [`FilmwikiError::FileNotFound`] when the path does not exist.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(FilmwikiError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(FilmwikiError::from)
    }
}

/// Reads a catalog document from standard input until EOF.
pub fn read_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(FilmwikiError::from)?;

    Ok(buffer)
}
