//! Content creators.
//!
//! Each creator takes entity data plus a [`RenderContext`] and returns the
//! markup lines of its part of a page. Articles compose the smaller creators
//! in a fixed order: header, infobox, chapters, sections, footer.

pub mod article;
pub mod entries;
pub mod index;
pub mod sections;

pub use article::{MovieArticle, SeriesArticle};
pub use entries::{AttributeEntries, AttributeKind, ReleaseEntries, RuntimeEntries};
pub use index::{AttributeIndex, collect_attribute_indexes};
pub use sections::{CastSection, DescriptionChapter, LinksSection, SeasonsChapter};

use std::path::PathBuf;

use crate::Result;
use crate::config::LayoutConfig;
use crate::formatters::Formatter;
use crate::language::{Bilingual, Language};
use crate::model::{Attribute, Production};

/// Namespace of movie articles.
pub const MOVIE_NAMESPACE: Bilingual = Bilingual::new("movie", "film");
/// Namespace of series articles.
pub const SERIES_NAMESPACE: Bilingual = Bilingual::new("series", "serie");
/// Namespace of transcluded navigation pages.
pub const NAVIGATION_NAMESPACE: &str = "navigation";
/// Namespace of poster images.
pub const POSTER_NAMESPACE: &str = "poster";

/// Kind of article a production is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProductionKind {
    Movie,
    Series,
}

impl ProductionKind {
    pub fn namespace(self) -> Bilingual {
        match self {
            ProductionKind::Movie => MOVIE_NAMESPACE,
            ProductionKind::Series => SERIES_NAMESPACE,
        }
    }
}

/// Everything a content creator needs besides the entity itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub formatter: &'a dyn Formatter,
    pub language: Language,
    pub layout: &'a LayoutConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(formatter: &'a dyn Formatter, language: Language, layout: &'a LayoutConfig) -> Self {
        Self { formatter, language, layout }
    }

    pub fn code(&self) -> &'static str {
        self.language.code()
    }

    pub fn text(&self, text: Bilingual) -> &'static str {
        text.get(self.language)
    }

    /// Page id of a page name: its file name without extension.
    pub fn page_id(&self, page: &str) -> Result<String> {
        let file_name = self.formatter.as_filename(page)?;
        let extension = self.formatter.file_extension();
        Ok(file_name.strip_suffix(extension).unwrap_or(&file_name).to_string())
    }

    /// Link to the article of a movie or series, labelled with its localized title.
    pub fn production_link(&self, kind: ProductionKind, production: &Production) -> Result<String> {
        let page_id = self.page_id(&production.page_title(self.language)?)?;
        self.formatter.internal_link(
            &[self.code(), self.text(kind.namespace())],
            &page_id,
            None,
            Some(production.title_for(self.language)),
        )
    }

    /// Link to the index page of an attribute, labelled with its localized name.
    pub fn attribute_link(&self, kind: AttributeKind, attribute: &Attribute) -> Result<String> {
        self.formatter.internal_link(
            &[self.code(), self.text(kind.namespace())],
            &attribute.id.to_string(),
            None,
            Some(attribute.name(self.language)),
        )
    }

    /// `value`, followed by a forced line break and `details` when present.
    pub fn with_details(&self, value: String, details: &str) -> String {
        let details = self.single_line(details);
        if details.is_empty() { value } else { format!("{}{}{}", value, self.formatter.force_new_line(), details) }
    }

    /// Non-blank lines of `text` joined with forced line breaks, so the
    /// result fits in one table cell.
    pub fn single_line(&self, text: &str) -> String {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(self.formatter.force_new_line())
    }
}

/// One rendered wiki page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Namespace/folder segments, e.g. `["de", "film"]`.
    pub path: Vec<String>,
    pub file_name: String,
    pub lines: Vec<String>,
}

impl Page {
    pub fn new(path: Vec<String>, file_name: String, lines: Vec<String>) -> Self {
        Self { path, file_name, lines }
    }

    /// Page text, newline-joined and terminated.
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// Location relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.path.iter().collect();
        path.push(&self.file_name);
        path
    }
}
