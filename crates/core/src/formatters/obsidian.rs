//! Obsidian flavoured Markdown.
//!
//! Obsidian reads plain Markdown, so [`ObsidianFormatter`] wraps a
//! [`MarkdownFormatter`] and forwards every operation to it except wikilinks,
//! embeds, comments, some text styles and list markers. Markdown table cells
//! escape `|`, which also keeps wikilink aliases inside their cell.

use crate::Result;
use crate::error::{require_optional_text, require_text};
use crate::formatters::markdown::folder_target;
use crate::formatters::{Alignment, Formatter, Image, MarkdownFormatter, wrap};

#[derive(Debug, Clone, Copy, Default)]
pub struct ObsidianFormatter {
    markdown: MarkdownFormatter,
}

impl ObsidianFormatter {
    pub fn new() -> Self {
        Self { markdown: MarkdownFormatter::new() }
    }
}

impl Formatter for ObsidianFormatter {
    fn name(&self) -> &'static str {
        "obsidian"
    }

    fn as_bold(&self, text: &str) -> Result<String> {
        self.markdown.as_bold(text)
    }

    fn as_italic(&self, text: &str) -> Result<String> {
        self.markdown.as_italic(text)
    }

    fn as_underline(&self, text: &str) -> Result<String> {
        self.markdown.as_underline(text)
    }

    fn as_subscript(&self, text: &str) -> Result<String> {
        wrap("text", text, "<sub>", "</sub>")
    }

    fn as_superscript(&self, text: &str) -> Result<String> {
        wrap("text", text, "<sup>", "</sup>")
    }

    fn as_deleted(&self, text: &str) -> Result<String> {
        wrap("text", text, "~~", "~~")
    }

    fn internal_link(&self, path: &[&str], page: &str, section: Option<&str>, text: Option<&str>) -> Result<String> {
        let page = require_text("page", page)?;
        let section = require_optional_text("section", section)?;
        let text = require_optional_text("text", text)?;

        let target = folder_target(path, page, section);
        let link = match text {
            Some(text) => format!("[[{}|{}]]", target, text),
            None => format!("[[{}]]", target),
        };
        Ok(link)
    }

    fn external_link(&self, url: &str, text: Option<&str>) -> Result<String> {
        self.markdown.external_link(url, text)
    }

    fn email_link(&self, address: &str, text: Option<&str>) -> Result<String> {
        self.markdown.email_link(address, text)
    }

    fn as_heading(&self, level: u8, text: &str) -> Result<String> {
        self.markdown.as_heading(level, text)
    }

    fn as_image(&self, image: &Image) -> Result<String> {
        let parts = image.parts()?;
        let mut embed = folder_target(&parts.path, parts.filename, None);
        if let Some(caption) = parts.caption {
            embed.push('|');
            embed.push_str(caption);
        }
        if let Some(dimensions) = parts.dimensions() {
            embed.push('|');
            embed.push_str(&dimensions);
        }
        Ok(format!("![[{}]]", embed))
    }

    fn align_image(&self, image: &str, _alignment: Alignment) -> Result<String> {
        Ok(require_text("image", image)?.to_string())
    }

    fn force_new_line(&self) -> &'static str {
        "<br>"
    }

    fn list_item_unsorted(&self) -> &'static str {
        self.markdown.list_item_unsorted()
    }

    fn list_item_sorted(&self) -> &'static str {
        self.markdown.list_item_sorted()
    }

    fn list_item_indent(&self) -> &'static str {
        "\t"
    }

    fn as_insert_page(&self, path: &[&str], page: &str) -> Result<String> {
        let page = require_text("page", page)?;
        Ok(format!("![[{}]]", folder_target(path, page, None)))
    }

    fn disable_toc(&self) -> &'static str {
        self.markdown.disable_toc()
    }

    fn disable_cache(&self) -> &'static str {
        self.markdown.disable_cache()
    }

    fn begin_comment(&self) -> &'static str {
        "%%"
    }

    fn end_comment(&self) -> &'static str {
        "%%"
    }

    fn define_table(&self, total_width: u32, columns: &[u32]) -> Result<String> {
        self.markdown.define_table(total_width, columns)
    }

    fn as_table_title(&self, cells: &[&str]) -> Result<String> {
        self.markdown.as_table_title(cells)
    }

    fn cell_span_vertically(&self) -> &'static str {
        self.markdown.cell_span_vertically()
    }

    fn as_table_row(&self, cells: &[&str]) -> Result<String> {
        self.markdown.as_table_row(cells)
    }

    fn begin_box(&self, width: u32, alignment: Alignment) -> Result<String> {
        self.markdown.begin_box(width, alignment)
    }

    fn end_box(&self) -> &'static str {
        self.markdown.end_box()
    }

    fn file_extension(&self) -> &'static str {
        self.markdown.file_extension()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_page() {
        let f = ObsidianFormatter::new();
        assert_eq!(f.as_insert_page(&[], "en:navigation:42").unwrap(), "![[en:navigation:42]]");
        assert_eq!(f.as_insert_page(&["en", "", "navigation"], "42").unwrap(), "![[en/navigation/42]]");
        assert!(f.as_insert_page(&[], "").is_err());
    }

    #[test]
    fn test_wikilinks() {
        let f = ObsidianFormatter::new();
        assert_eq!(
            f.internal_link(&["en", "genre"], "7", Some("Movies"), Some("Drama")).unwrap(),
            "[[en/genre/7#Movies|Drama]]"
        );
        assert_eq!(f.internal_link(&["en", "genre"], "7", None, Some("Drama")).unwrap(), "[[en/genre/7|Drama]]");
        assert_eq!(f.internal_link(&["en", "genre"], "7", Some("Movies"), None).unwrap(), "[[en/genre/7#Movies]]");
        assert_eq!(f.internal_link(&[], "start", None, None).unwrap(), "[[start]]");
    }

    #[test]
    fn test_external_links_use_markdown() {
        let f = ObsidianFormatter::new();
        assert_eq!(f.external_link("https://example.org", Some("Site")).unwrap(), "[Site](https://example.org)");
        assert_eq!(f.email_link("a@example.org", Some("Mail")).unwrap(), "[Mail](mailto:a@example.org)");
    }

    #[test]
    fn test_overridden_styles() {
        let f = ObsidianFormatter::new();
        assert_eq!(f.as_subscript("2").unwrap(), "<sub>2</sub>");
        assert_eq!(f.as_superscript("2").unwrap(), "<sup>2</sup>");
        assert_eq!(f.as_deleted("old").unwrap(), "~~old~~");
        assert_eq!(f.as_bold("new").unwrap(), "**new**");
    }

    #[test]
    fn test_images_and_alignment() {
        let f = ObsidianFormatter::new();
        assert_eq!(f.as_image(&Image::new("a.jpg")).unwrap(), "![[a.jpg]]");
        assert_eq!(
            f.as_image(&Image::new("a.jpg").in_path(["poster"]).size(200, 300).caption("Poster")).unwrap(),
            "![[poster/a.jpg|Poster|200x300]]"
        );
        assert_eq!(f.align_image("![[a.jpg]]", Alignment::Right).unwrap(), "![[a.jpg]]");
        assert!(f.as_image(&Image::new("a.jpg").width(0)).is_err());
    }

    #[test]
    fn test_table_cells_escape_wikilink_pipes() {
        let f = ObsidianFormatter::new();
        assert_eq!(
            f.as_table_row(&["**Genre**", "[[en/genre/7|Drama]]"]).unwrap(),
            "| **Genre** | [[en/genre/7\\|Drama]] |"
        );
        assert_eq!(f.as_table_row(&["a | b"]).unwrap(), "| a \\| b |");
        assert_eq!(f.as_table_title(&["![[a.jpg|Poster|200]]"]).unwrap(), "| ![[a.jpg\\|Poster\\|200]] |\n| --- |");
    }

    #[test]
    fn test_markers() {
        let f = ObsidianFormatter::new();
        assert_eq!((f.begin_comment(), f.end_comment()), ("%%", "%%"));
        assert_eq!(f.force_new_line(), "<br>");
        assert_eq!(f.list_item_indent(), "\t");
        assert_eq!(f.list_item_unsorted(), "- ");
        assert_eq!(f.as_heading2("Cast").unwrap(), "## Cast");
        assert_eq!(f.as_table_row(&["Genre", ""]).unwrap(), "| Genre |");
        assert_eq!(f.as_filename("Inception (2010)").unwrap(), "inception_2010.md");
    }
}
