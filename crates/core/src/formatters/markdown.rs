use crate::error::{require_optional_text, require_size, require_text};
use crate::formatters::{
    Alignment, Formatter, Image, check_table_widths, escaped_table_cells, join_path, table_cells, wrap,
};
use crate::{FilmwikiError, Result};

pub(crate) const FOLDER_SEPARATOR: char = '/';

/// CommonMark markup with inline HTML where Markdown has no syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// `[label](target)`
    fn link(&self, target: &str, label: &str) -> String {
        format!("[{}]({})", label, target)
    }
}

/// `a/b/page#section` with empty segments skipped.
pub(crate) fn folder_target(path: &[&str], page: &str, section: Option<&str>) -> String {
    let mut target = join_path(path, FOLDER_SEPARATOR);
    target.push_str(page);
    if let Some(section) = section {
        target.push('#');
        target.push_str(section);
    }
    target
}

/// Escapes every `|` not already escaped so it does not split the cell.
fn escape_cell(cell: &str) -> String {
    let mut escaped = String::with_capacity(cell.len());
    let mut previous = None;
    for c in cell.chars() {
        if c == '|' && previous != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(c);
        previous = Some(c);
    }
    escaped
}

impl Formatter for MarkdownFormatter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn as_bold(&self, text: &str) -> Result<String> {
        wrap("text", text, "**", "**")
    }

    fn as_italic(&self, text: &str) -> Result<String> {
        wrap("text", text, "*", "*")
    }

    fn as_underline(&self, text: &str) -> Result<String> {
        wrap("text", text, "<u>", "</u>")
    }

    fn as_subscript(&self, text: &str) -> Result<String> {
        wrap("text", text, "~", "~")
    }

    fn as_superscript(&self, text: &str) -> Result<String> {
        wrap("text", text, "^", "^")
    }

    fn as_deleted(&self, text: &str) -> Result<String> {
        wrap("text", text, "<del>", "</del>")
    }

    fn internal_link(&self, path: &[&str], page: &str, section: Option<&str>, text: Option<&str>) -> Result<String> {
        let page = require_text("page", page)?;
        let section = require_optional_text("section", section)?;
        let text = require_optional_text("text", text)?;

        let target = folder_target(path, page, section);
        Ok(self.link(&target, text.unwrap_or(page)))
    }

    fn external_link(&self, url: &str, text: Option<&str>) -> Result<String> {
        let url = require_text("url", url)?;
        self.internal_link(&[], url, None, text)
    }

    fn email_link(&self, address: &str, text: Option<&str>) -> Result<String> {
        let address = require_text("address", address)?;
        let text = require_optional_text("text", text)?;
        Ok(self.link(&format!("mailto:{}", address), text.unwrap_or(address)))
    }

    fn as_heading(&self, level: u8, text: &str) -> Result<String> {
        if !(1..=5).contains(&level) {
            return Err(FilmwikiError::invalid_argument("level", "must be between 1 and 5"));
        }
        let text = require_text("text", text)?;
        Ok(format!("{} {}", "#".repeat(level as usize), text))
    }

    fn as_image(&self, image: &Image) -> Result<String> {
        let parts = image.parts()?;
        let mut target = folder_target(&parts.path, parts.filename, None);
        if let Some(dimensions) = parts.dimensions() {
            target.push_str(" =");
            target.push_str(&dimensions);
        }
        Ok(format!("![{}]({})", parts.caption.unwrap_or_default(), target))
    }

    fn align_image(&self, image: &str, alignment: Alignment) -> Result<String> {
        let image = require_text("image", image)?;
        Ok(format!("<div align=\"{}\">\n\n{}\n\n</div>", alignment.keyword(), image))
    }

    fn force_new_line(&self) -> &'static str {
        "<br />"
    }

    fn list_item_unsorted(&self) -> &'static str {
        "- "
    }

    fn list_item_sorted(&self) -> &'static str {
        "1. "
    }

    fn list_item_indent(&self) -> &'static str {
        "    "
    }

    fn as_insert_page(&self, path: &[&str], page: &str) -> Result<String> {
        let page = require_text("page", page)?;
        Ok(format!("<!-- include: {}{} -->", folder_target(path, page, None), self.file_extension()))
    }

    fn disable_toc(&self) -> &'static str {
        ""
    }

    fn disable_cache(&self) -> &'static str {
        ""
    }

    fn begin_comment(&self) -> &'static str {
        "<!--"
    }

    fn end_comment(&self) -> &'static str {
        "-->"
    }

    fn define_table(&self, total_width: u32, columns: &[u32]) -> Result<String> {
        check_table_widths(total_width, columns)?;
        Ok(String::new())
    }

    fn as_table_title(&self, cells: &[&str]) -> Result<String> {
        let title = escaped_table_cells(cells, '|', escape_cell)?;
        let columns = cells.iter().filter(|c| !c.is_empty()).count();
        let separator = table_cells(&vec!["---"; columns.max(1)], '|')?;
        Ok(format!("{}\n{}", title, separator))
    }

    fn cell_span_vertically(&self) -> &'static str {
        "〃"
    }

    fn as_table_row(&self, cells: &[&str]) -> Result<String> {
        escaped_table_cells(cells, '|', escape_cell)
    }

    fn begin_box(&self, width: u32, alignment: Alignment) -> Result<String> {
        let width = require_size("width", width)?;
        let placement = match alignment {
            Alignment::Centered => "margin: 0 auto".to_string(),
            other => format!("float: {}", other.keyword()),
        };
        Ok(format!("<div style=\"{}; width: {}px;\">", placement, width))
    }

    fn end_box(&self) -> &'static str {
        "</div>"
    }

    fn file_extension(&self) -> &'static str {
        ".md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "# Inception")]
    #[case(2, "## Inception")]
    #[case(3, "### Inception")]
    #[case(4, "#### Inception")]
    #[case(5, "##### Inception")]
    fn test_headings(#[case] level: u8, #[case] expected: &str) {
        assert_eq!(MarkdownFormatter.as_heading(level, "Inception").unwrap(), expected);
    }

    #[test]
    fn test_text_styles() {
        let f = MarkdownFormatter;
        assert_eq!(f.as_bold("a").unwrap(), "**a**");
        assert_eq!(f.as_italic("a").unwrap(), "*a*");
        assert_eq!(f.as_underline("a").unwrap(), "<u>a</u>");
        assert_eq!(f.as_subscript("a").unwrap(), "~a~");
        assert_eq!(f.as_superscript("a").unwrap(), "^a^");
        assert_eq!(f.as_deleted("a").unwrap(), "<del>a</del>");
        assert!(f.as_deleted("").is_err());
    }

    #[test]
    fn test_internal_link_shapes() {
        let f = MarkdownFormatter;
        assert_eq!(
            f.internal_link(&["en", "genre"], "7", Some("movies"), Some("Drama")).unwrap(),
            "[Drama](en/genre/7#movies)"
        );
        assert_eq!(f.internal_link(&["en", "genre"], "7", None, Some("Drama")).unwrap(), "[Drama](en/genre/7)");
        assert_eq!(f.internal_link(&["en", "genre"], "7", Some("movies"), None).unwrap(), "[7](en/genre/7#movies)");
        assert_eq!(f.internal_link(&["", "en"], "start", None, None).unwrap(), "[start](en/start)");
    }

    #[test]
    fn test_external_and_email_links() {
        let f = MarkdownFormatter;
        assert_eq!(f.external_link("https://example.org", Some("Site")).unwrap(), "[Site](https://example.org)");
        assert_eq!(f.external_link("https://example.org", None).unwrap(), "[https://example.org](https://example.org)");
        assert_eq!(f.email_link("a@example.org", None).unwrap(), "[a@example.org](mailto:a@example.org)");
        assert!(f.email_link("a@example.org", Some("")).is_err());
    }

    #[test]
    fn test_images() {
        let f = MarkdownFormatter;
        assert_eq!(f.as_image(&Image::new("a.jpg")).unwrap(), "![](a.jpg)");
        assert_eq!(
            f.as_image(&Image::new("a.jpg").in_path(["en", "poster"]).size(200, 300).caption("Poster")).unwrap(),
            "![Poster](en/poster/a.jpg =200x300)"
        );
        assert_eq!(f.as_image(&Image::new("a.jpg").width(200)).unwrap(), "![](a.jpg =200)");
        assert!(f.as_image(&Image::new("a.jpg").size(0, 10)).is_err());
    }

    #[test]
    fn test_align_image_and_box() {
        let f = MarkdownFormatter;
        assert_eq!(
            f.align_image("![](a.jpg)", Alignment::Right).unwrap(),
            "<div align=\"right\">\n\n![](a.jpg)\n\n</div>"
        );
        assert_eq!(f.begin_box(300, Alignment::Right).unwrap(), "<div style=\"float: right; width: 300px;\">");
        assert_eq!(f.begin_box(300, Alignment::Centered).unwrap(), "<div style=\"margin: 0 auto; width: 300px;\">");
        assert!(f.begin_box(0, Alignment::Left).is_err());
        assert_eq!(f.end_box(), "</div>");
    }

    #[test]
    fn test_tables() {
        let f = MarkdownFormatter;
        assert_eq!(f.define_table(600, &[30, 70]).unwrap(), "");
        assert!(f.define_table(600, &[0]).is_err());
        assert_eq!(f.as_table_title(&["Role", "Actor"]).unwrap(), "| Role | Actor |\n| --- | --- |");
        assert_eq!(f.as_table_row(&["Genre", ""]).unwrap(), "| Genre |");
        assert_eq!(f.cell_span_vertically(), "〃");
    }

    #[test]
    fn test_table_cells_escape_pipes() {
        let f = MarkdownFormatter;
        assert_eq!(f.as_table_row(&["Cobb | Dom", "Leo"]).unwrap(), "| Cobb \\| Dom | Leo |");
        assert_eq!(f.as_table_title(&["a|b", ""]).unwrap(), "| a\\|b |\n| --- |");
        assert_eq!(escape_cell("a \\| b"), "a \\| b");
    }

    #[test]
    fn test_insert_page_and_markers() {
        let f = MarkdownFormatter;
        assert_eq!(f.as_insert_page(&["en", "navigation"], "42").unwrap(), "<!-- include: en/navigation/42.md -->");
        assert_eq!(f.disable_toc(), "");
        assert_eq!(f.disable_cache(), "");
        assert_eq!((f.begin_comment(), f.end_comment()), ("<!--", "-->"));
        assert_eq!(f.list_item_sorted(), "1. ");
        assert_eq!(f.as_filename("Amélie (2001)").unwrap(), "amelie_2001.md");
    }
}
