//! Generator configuration.
//!
//! Settings can be built in code with [`GeneratorConfig::builder`] or read
//! from a JSON file. Without an explicit path the file is looked up at
//! `<config dir>/filmwiki/config.json` (for example
//! `~/.config/filmwiki/config.json` on Linux). Missing keys keep their
//! defaults.
//!
//! # Example
//!
//! ```rust
//! use filmwiki_core::{Dialect, GeneratorConfig, Language};
//!
//! let config = GeneratorConfig::builder()
//!     .dialect(Dialect::Obsidian)
//!     .language(Language::English)
//!     .infobox_width(360)
//!     .build();
//! assert_eq!(config.layout.infobox_width, 360);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::read_file;
use crate::formatters::Dialect;
use crate::language::Language;
use crate::{FilmwikiError, Result};

const CONFIG_DIR_NAME: &str = "filmwiki";
const CONFIG_FILE_NAME: &str = "config.json";

/// Page layout settings shared by all content creators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Infobox width in pixels (default: 400).
    pub infobox_width: u32,

    /// Infobox column widths in percent (default: 35, 65).
    pub column_widths: Vec<u32>,

    /// Poster width in pixels inside the infobox (default: 250).
    pub poster_width: u32,

    /// Transclude the navigation page at the end of each article (default: true).
    pub include_navigation: bool,

    /// Name of the navigation page inside `<language>/navigation` (default: "footer").
    pub navigation_page: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            infobox_width: 400,
            column_widths: vec![35, 65],
            poster_width: 250,
            include_navigation: true,
            navigation_page: "footer".to_string(),
        }
    }
}

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Wiki dialect (default: DokuWiki).
    pub dialect: Dialect,

    /// Wiki language (default: German).
    pub language: Language,

    /// Directory pages are written to (default: current directory).
    pub output_dir: PathBuf,

    pub layout: LayoutConfig,
}

impl GeneratorConfig {
    /// Creates a new builder for GeneratorConfig.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Standard location of the configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FilmwikiError::ConfigError(e.to_string()))
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        Self::from_json(&read_file(path)?)
    }

    /// Reads the standard configuration file, or returns defaults when there is none.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Builder for GeneratorConfig.
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: GeneratorConfig::default() }
    }

    /// Starts from an existing configuration, e.g. one read from a file.
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn infobox_width(mut self, width: u32) -> Self {
        self.config.layout.infobox_width = width;
        self
    }

    pub fn column_widths(mut self, widths: Vec<u32>) -> Self {
        self.config.layout.column_widths = widths;
        self
    }

    pub fn poster_width(mut self, width: u32) -> Self {
        self.config.layout.poster_width = width;
        self
    }

    pub fn include_navigation(mut self, value: bool) -> Self {
        self.config.layout.include_navigation = value;
        self
    }

    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
