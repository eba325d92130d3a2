use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{FilmwikiError, Result};
use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::content::{MovieArticle, Page, RenderContext, SeriesArticle, collect_attribute_indexes};
use crate::formatters::Formatter;

/// Renders a catalog into wiki pages.
///
/// The generator owns the formatter selected by the configured dialect and
/// runs every content creator against it.
///
/// # Example
///
/// ```rust
/// use filmwiki_core::{Catalog, Dialect, GeneratorConfig, WikiGenerator};
///
/// let json = r#"{ "movies": [{ "id": 1, "original_title": "Inception", "release_date": "2010-07-16" }] }"#;
/// let catalog = Catalog::from_json(json).unwrap();
///
/// let config = GeneratorConfig::builder().dialect(Dialect::Markdown).build();
/// let pages = WikiGenerator::new(config).render(&catalog).unwrap();
/// assert_eq!(pages[0].file_name, "inception_2010.md");
/// ```
pub struct WikiGenerator {
    config: GeneratorConfig,
    formatter: Box<dyn Formatter>,
}

impl WikiGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let formatter = config.dialect.formatter();
        Self { config, formatter }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// Context handed to the content creators.
    pub fn context(&self) -> RenderContext<'_> {
        RenderContext::new(self.formatter.as_ref(), self.config.language, &self.config.layout)
    }

    /// Renders movie articles, series articles and attribute index pages, in that order.
    ///
    /// # Errors
    ///
    /// Fails on the first entity whose data cannot be rendered, e.g. a release
    /// date without a year or an empty attribute name. Also fails when two
    /// pages map to the same file, e.g. `Amélie (2001)` and `Amelie (2001)`.
    pub fn render(&self, catalog: &Catalog) -> Result<Vec<Page>> {
        let ctx = self.context();
        let mut pages = Vec::new();

        for movie in &catalog.movies {
            debug!(id = movie.production.id, title = %movie.production.original_title, "rendering movie");
            pages.push(MovieArticle::new(movie).create_page(&ctx)?);
        }
        for series in &catalog.series {
            debug!(id = series.production.id, title = %series.production.original_title, "rendering series");
            pages.push(SeriesArticle::new(series).create_page(&ctx)?);
        }

        let indexes = collect_attribute_indexes(catalog);
        for index in &indexes {
            pages.push(index.create_page(&ctx)?);
        }

        check_unique_paths(&pages)?;

        info!(
            dialect = %self.config.dialect,
            language = %self.config.language,
            movies = catalog.movies.len(),
            series = catalog.series.len(),
            indexes = indexes.len(),
            "rendered catalog"
        );
        Ok(pages)
    }

    /// Writes pages below the configured output directory.
    pub fn write(&self, pages: &[Page]) -> Result<Vec<PathBuf>> {
        write_pages(&self.config.output_dir, pages)
    }
}

fn check_unique_paths(pages: &[Page]) -> Result<()> {
    let mut seen = HashSet::with_capacity(pages.len());
    for page in pages {
        let path = page.relative_path();
        if !seen.insert(path.clone()) {
            warn!(path = %path.display(), "two pages map to the same file");
            return Err(FilmwikiError::invalid_argument("page", "two pages map to the same file name"));
        }
    }
    Ok(())
}

/// Writes each page to `out_dir/<path>/<file name>`, creating folders as needed.
///
/// Existing files are overwritten. Returns the written paths in page order.
pub fn write_pages(out_dir: impl AsRef<Path>, pages: &[Page]) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let mut written = Vec::with_capacity(pages.len());

    for page in pages {
        let target = out_dir.join(page.relative_path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, page.content())?;
        debug!(path = %target.display(), "wrote page");
        written.push(target);
    }

    info!(count = written.len(), dir = %out_dir.display(), "wrote pages");
    Ok(written)
}
