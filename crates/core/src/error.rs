//! Error types for filmwiki operations.
//!
//! This module defines the main error type [`FilmwikiError`] which represents
//! all possible errors that can occur while loading a catalog, rendering
//! wiki markup and writing pages.
//!
//! # Example
//!
//! ```rust
//! use filmwiki_core::{FilmwikiError, Result};
//!
//! fn page_title(title: &str) -> Result<String> {
//!     if title.is_empty() {
//!         return Err(FilmwikiError::invalid_argument("title", "must not be empty"));
//!     }
//!     Ok(title.to_string())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog rendering operations.
///
/// Formatter and content creator failures are always reported as
/// [`FilmwikiError::InvalidArgument`]; there is no partial output mode, a
/// failing call aborts the page it was rendering.
///
/// # Example
///
/// ```rust
/// use filmwiki_core::{DokuWikiFormatter, FilmwikiError, Formatter};
///
/// match DokuWikiFormatter.as_heading1("") {
///     Ok(heading) => println!("{}", heading),
///     Err(FilmwikiError::InvalidArgument { name, reason }) => {
///         println!("bad argument {}: {}", name, reason);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FilmwikiError {
    /// A required parameter was empty, or a numeric parameter used zero.
    ///
    /// Zero is the "unset" sentinel for widths, heights and sizes, so it is
    /// never accepted as a literal dimension.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: &'static str },

    /// Catalog documents that are not valid JSON or do not match the model.
    #[error("Failed to read catalog: {0}")]
    CatalogError(#[from] serde_json::Error),

    /// File not found.
    ///
    /// Returned when a catalog or configuration file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read and write errors.
    ///
    /// Wraps standard I/O errors for page output.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),

    /// Generator configuration errors.
    ///
    /// Returned when a configuration file is invalid or names an unknown
    /// dialect.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl FilmwikiError {
    /// Shorthand for building an [`FilmwikiError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        FilmwikiError::InvalidArgument { name, reason }
    }
}

/// Result type alias for FilmwikiError.
///
/// This is a convenience alias for `std::result::Result<T, FilmwikiError>`.
pub type Result<T> = std::result::Result<T, FilmwikiError>;

/// Fails with invalid-argument when `value` is empty.
pub(crate) fn require_text<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(FilmwikiError::invalid_argument(name, "must not be empty"));
    }
    Ok(value)
}

/// Fails with invalid-argument when `value` is present but empty.
pub(crate) fn require_optional_text<'a>(name: &'static str, value: Option<&'a str>) -> Result<Option<&'a str>> {
    value.map(|v| require_text(name, v)).transpose()
}

/// Fails with invalid-argument when `value` is the zero sentinel.
pub(crate) fn require_size(name: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(FilmwikiError::invalid_argument(name, "zero means unset and is not a valid size"));
    }
    Ok(value)
}
