//! Wiki markup formatters.
//!
//! The [`Formatter`] trait turns semantic document operations (headings,
//! links, images, tables, boxes) into markup fragments for one wiki dialect.
//! Formatters are stateless: the same arguments always produce the same
//! fragment, so a single instance is shared by every content creator.
//!
//! # Example
//!
//! ```rust
//! use filmwiki_core::{Dialect, Formatter};
//!
//! let formatter = Dialect::DokuWiki.formatter();
//! assert_eq!(formatter.as_heading1("Inception").unwrap(), "====== Inception ======");
//! assert_eq!(formatter.as_table_row(&["Genre", ""]).unwrap(), "| Genre |");
//! ```

pub mod dokuwiki;
pub mod markdown;
pub mod obsidian;

pub use dokuwiki::DokuWikiFormatter;
pub use markdown::MarkdownFormatter;
pub use obsidian::ObsidianFormatter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{require_optional_text, require_size, require_text};
use crate::{FilmwikiError, Result};

/// Horizontal placement of images and boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Centered,
    Right,
}

impl Alignment {
    /// CSS/WRAP keyword for the alignment.
    pub fn keyword(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Centered => "center",
            Alignment::Right => "right",
        }
    }
}

/// Wiki dialect selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    DokuWiki,
    Markdown,
    Obsidian,
}

impl Dialect {
    /// Builds the formatter backend for this dialect.
    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            Dialect::DokuWiki => Box::new(DokuWikiFormatter),
            Dialect::Markdown => Box::new(MarkdownFormatter),
            Dialect::Obsidian => Box::new(ObsidianFormatter::new()),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dokuwiki" | "doku" => Ok(Self::DokuWiki),
            "markdown" | "md" => Ok(Self::Markdown),
            "obsidian" => Ok(Self::Obsidian),
            _ => Err(format!("Invalid dialect: {}. Valid options: dokuwiki, markdown, obsidian", s)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::DokuWiki => "dokuwiki",
            Dialect::Markdown => "markdown",
            Dialect::Obsidian => "obsidian",
        };
        f.write_str(name)
    }
}

/// An image request.
///
/// Width is optional, height is only meaningful together with a width.
/// A dimension of zero is the "unset" sentinel and is rejected when the
/// image is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub path: Vec<String>,
    pub filename: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub caption: Option<String>,
}

impl Image {
    pub fn new(filename: impl Into<String>) -> Self {
        Self { filename: filename.into(), ..Default::default() }
    }

    /// Places the image under a namespace/folder path.
    pub fn in_path<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = segments.into_iter().map(Into::into).collect();
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Checks the request and returns its borrowed parts.
    pub(crate) fn parts(&self) -> Result<ImageParts<'_>> {
        let filename = require_text("filename", &self.filename)?;
        let width = self.width.map(|w| require_size("width", w)).transpose()?;
        let height = self.height.map(|h| require_size("height", h)).transpose()?;
        if height.is_some() && width.is_none() {
            return Err(FilmwikiError::invalid_argument("height", "requires a width"));
        }
        let caption = require_optional_text("caption", self.caption.as_deref())?;
        let path = self.path.iter().map(String::as_str).collect();

        Ok(ImageParts { path, filename, width, height, caption })
    }
}

/// Validated view of an [`Image`].
pub(crate) struct ImageParts<'a> {
    pub path: Vec<&'a str>,
    pub filename: &'a str,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub caption: Option<&'a str>,
}

impl ImageParts<'_> {
    /// `W` or `WxH`, when a width is set.
    pub fn dimensions(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            (Some(w), None) => Some(w.to_string()),
            _ => None,
        }
    }

    /// `filename[?width[xheight]][|caption]`
    pub fn canonical(&self) -> String {
        let mut out = self.filename.to_string();
        if let Some(dimensions) = self.dimensions() {
            out.push('?');
            out.push_str(&dimensions);
        }
        if let Some(caption) = self.caption {
            out.push('|');
            out.push_str(caption);
        }
        out
    }
}

/// Semantic document operations rendered as dialect-specific markup.
///
/// Every fallible operation fails with [`FilmwikiError::InvalidArgument`]
/// when a required string is empty or a size is zero. Path segments that are
/// empty are skipped without error.
pub trait Formatter {
    /// Short dialect name, used in logs.
    fn name(&self) -> &'static str;

    fn as_bold(&self, text: &str) -> Result<String>;
    fn as_italic(&self, text: &str) -> Result<String>;
    fn as_underline(&self, text: &str) -> Result<String>;
    fn as_subscript(&self, text: &str) -> Result<String>;
    fn as_superscript(&self, text: &str) -> Result<String>;
    fn as_deleted(&self, text: &str) -> Result<String>;

    /// Link to a page inside the wiki.
    ///
    /// `path` segments are joined with the dialect separator, `section`
    /// targets an anchor and `text` replaces the page name as label.
    fn internal_link(&self, path: &[&str], page: &str, section: Option<&str>, text: Option<&str>) -> Result<String>;

    fn external_link(&self, url: &str, text: Option<&str>) -> Result<String>;

    fn email_link(&self, address: &str, text: Option<&str>) -> Result<String>;

    /// Heading of `level` 1 (largest) to 5.
    fn as_heading(&self, level: u8, text: &str) -> Result<String>;

    fn as_heading1(&self, text: &str) -> Result<String> {
        self.as_heading(1, text)
    }

    fn as_heading2(&self, text: &str) -> Result<String> {
        self.as_heading(2, text)
    }

    fn as_heading3(&self, text: &str) -> Result<String> {
        self.as_heading(3, text)
    }

    fn as_heading4(&self, text: &str) -> Result<String> {
        self.as_heading(4, text)
    }

    fn as_heading5(&self, text: &str) -> Result<String> {
        self.as_heading(5, text)
    }

    fn as_image(&self, image: &Image) -> Result<String>;

    /// Repositions already rendered image markup.
    fn align_image(&self, image: &str, alignment: Alignment) -> Result<String>;

    /// Image wrapped into a floating box.
    fn as_image_box(&self, image: &Image, width: u32, alignment: Alignment) -> Result<String> {
        let rendered = self.as_image(image)?;
        Ok([
            self.begin_box(width, alignment)?,
            self.align_image(&rendered, alignment)?,
            self.end_box().to_string(),
        ]
        .join("\n"))
    }

    fn force_new_line(&self) -> &'static str;
    fn list_item_unsorted(&self) -> &'static str;
    fn list_item_sorted(&self) -> &'static str;
    fn list_item_indent(&self) -> &'static str;

    /// Transcludes another page.
    fn as_insert_page(&self, path: &[&str], page: &str) -> Result<String>;

    fn disable_toc(&self) -> &'static str;
    fn disable_cache(&self) -> &'static str;

    fn begin_comment(&self) -> &'static str;
    fn end_comment(&self) -> &'static str;

    /// Declares table width in pixels and column widths in percent.
    fn define_table(&self, total_width: u32, columns: &[u32]) -> Result<String>;

    /// Header row. Empty cells are dropped so they merge with their neighbour.
    fn as_table_title(&self, cells: &[&str]) -> Result<String>;

    /// Marker placed in a cell to merge it with the cell above.
    fn cell_span_vertically(&self) -> &'static str;

    /// Data row. Empty cells are dropped so they merge with their neighbour.
    fn as_table_row(&self, cells: &[&str]) -> Result<String>;

    fn begin_box(&self, width: u32, alignment: Alignment) -> Result<String>;
    fn end_box(&self) -> &'static str;

    /// Extension appended by [`Formatter::as_filename`].
    fn file_extension(&self) -> &'static str;

    /// Page name turned into a file name for this dialect.
    fn as_filename(&self, page: &str) -> Result<String> {
        sanitize_filename(page, self.file_extension())
    }
}

/// Joins non-empty segments, each followed by `separator`.
pub(crate) fn join_path(segments: &[&str], separator: char) -> String {
    let mut prefix = String::new();
    for segment in segments.iter().filter(|s| !s.is_empty()) {
        prefix.push_str(segment);
        prefix.push(separator);
    }
    prefix
}

/// Validates and wraps `text` with a pair of delimiters.
pub(crate) fn wrap(name: &'static str, text: &str, open: &str, close: &str) -> Result<String> {
    let text = require_text(name, text)?;
    Ok(format!("{}{}{}", open, text, close))
}

/// Renders `delimiter cell delimiter cell delimiter`, skipping empty cells.
pub(crate) fn table_cells(cells: &[&str], delimiter: char) -> Result<String> {
    if cells.is_empty() {
        return Err(FilmwikiError::invalid_argument("cells", "must contain at least one cell"));
    }
    let mut row = delimiter.to_string();
    for cell in cells.iter().filter(|c| !c.is_empty()) {
        row.push(' ');
        row.push_str(cell);
        row.push(' ');
        row.push(delimiter);
    }
    Ok(row)
}

/// Like [`table_cells`], with every cell passed through `escape` first.
pub(crate) fn escaped_table_cells(cells: &[&str], delimiter: char, escape: fn(&str) -> String) -> Result<String> {
    let escaped: Vec<String> = cells.iter().map(|cell| escape(cell)).collect();
    let escaped: Vec<&str> = escaped.iter().map(String::as_str).collect();
    table_cells(&escaped, delimiter)
}

/// Checks table and column widths, none of which may be zero.
pub(crate) fn check_table_widths(total_width: u32, columns: &[u32]) -> Result<()> {
    require_size("total_width", total_width)?;
    for column in columns {
        require_size("columns", *column)?;
    }
    Ok(())
}

fn transliterate(c: char) -> Option<&'static str> {
    let replacement = match c {
        ' ' | '+' | '/' | '%' | '\'' | '!' | '&' | '?' | '=' | '*' | '#' | '<' | '>' => "_",
        ',' | ':' | '(' | ')' => "",
        'ä' | 'á' | 'à' | 'â' => "a",
        'ö' | 'ó' | 'ò' | 'ô' => "o",
        'ü' | 'ú' | 'ù' | 'û' => "u",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ç' => "c",
        'ñ' => "n",
        'ß' => "s",
        _ => return None,
    };
    Some(replacement)
}

/// Lowercases, transliterates and strips `page`, then appends `extension`.
pub(crate) fn sanitize_filename(page: &str, extension: &str) -> Result<String> {
    let page = require_text("page", page)?;
    let mut name = String::with_capacity(page.len() + extension.len());
    for c in page.to_lowercase().chars() {
        match transliterate(c) {
            Some(replacement) => name.push_str(replacement),
            None => name.push(c),
        }
    }
    name.push_str(extension);
    Ok(name)
}
