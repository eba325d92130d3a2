use crate::error::{require_optional_text, require_size, require_text};
use crate::formatters::{Alignment, Formatter, Image, check_table_widths, escaped_table_cells, join_path, wrap};
use crate::{FilmwikiError, Result};

const NAMESPACE_SEPARATOR: char = ':';

/// DokuWiki markup, including the WRAP and tablewidth plugin syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct DokuWikiFormatter;

impl DokuWikiFormatter {
    pub fn new() -> Self {
        Self
    }

    /// `[[target|text]]` or `[[target]]`
    fn link(&self, target: &str, text: Option<&str>) -> String {
        match text {
            Some(text) => format!("[[{}|{}]]", target, text),
            None => format!("[[{}]]", target),
        }
    }
}

/// Wraps cell delimiters outside `[[...]]` and `{{...}}` in `%%` so they stay literal.
fn escape_cell(cell: &str) -> String {
    let mut escaped = String::with_capacity(cell.len());
    let mut depth = 0usize;
    let mut chars = cell.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '[' | '{' if chars.peek() == Some(&c) => {
                chars.next();
                depth += 1;
                escaped.push(c);
            }
            ']' | '}' if depth > 0 && chars.peek() == Some(&c) => {
                chars.next();
                depth -= 1;
                escaped.push(c);
            }
            '|' | '^' if depth == 0 => {
                escaped.push_str("%%");
                escaped.push(c);
                escaped.push_str("%%");
                continue;
            }
            _ => {}
        }
        escaped.push(c);
    }
    escaped
}

impl Formatter for DokuWikiFormatter {
    fn name(&self) -> &'static str {
        "dokuwiki"
    }

    fn as_bold(&self, text: &str) -> Result<String> {
        wrap("text", text, "**", "**")
    }

    fn as_italic(&self, text: &str) -> Result<String> {
        wrap("text", text, "//", "//")
    }

    fn as_underline(&self, text: &str) -> Result<String> {
        wrap("text", text, "__", "__")
    }

    fn as_subscript(&self, text: &str) -> Result<String> {
        wrap("text", text, "<sub>", "</sub>")
    }

    fn as_superscript(&self, text: &str) -> Result<String> {
        wrap("text", text, "<sup>", "</sup>")
    }

    fn as_deleted(&self, text: &str) -> Result<String> {
        wrap("text", text, "<del>", "</del>")
    }

    fn internal_link(&self, path: &[&str], page: &str, section: Option<&str>, text: Option<&str>) -> Result<String> {
        let page = require_text("page", page)?;
        let section = require_optional_text("section", section)?;
        let text = require_optional_text("text", text)?;

        let mut target = join_path(path, NAMESPACE_SEPARATOR);
        target.push_str(page);
        if let Some(section) = section {
            target.push('#');
            target.push_str(section);
        }

        Ok(self.link(&target, text))
    }

    fn external_link(&self, url: &str, text: Option<&str>) -> Result<String> {
        let url = require_text("url", url)?;
        self.internal_link(&[], url, None, text)
    }

    fn email_link(&self, address: &str, text: Option<&str>) -> Result<String> {
        let address = require_text("address", address)?;
        self.internal_link(&[], &format!("mailto:{}", address), None, text)
    }

    fn as_heading(&self, level: u8, text: &str) -> Result<String> {
        if !(1..=5).contains(&level) {
            return Err(FilmwikiError::invalid_argument("level", "must be between 1 and 5"));
        }
        let marker = "=".repeat(7 - level as usize);
        let text = require_text("text", text)?;
        Ok(format!("{} {} {}", marker, text, marker))
    }

    fn as_image(&self, image: &Image) -> Result<String> {
        let parts = image.parts()?;
        Ok(format!("{{{{{}{}}}}}", join_path(&parts.path, NAMESPACE_SEPARATOR), parts.canonical()))
    }

    fn align_image(&self, image: &str, alignment: Alignment) -> Result<String> {
        let image = require_text("image", image)?;
        let inner = image
            .strip_prefix("{{")
            .and_then(|rest| rest.strip_suffix("}}"))
            .ok_or_else(|| FilmwikiError::invalid_argument("image", "is not an image token"))?
            .trim();

        let aligned = match alignment {
            Alignment::Left => format!("{{{{{} }}}}", inner),
            Alignment::Centered => format!("{{{{ {} }}}}", inner),
            Alignment::Right => format!("{{{{ {}}}}}", inner),
        };
        Ok(aligned)
    }

    fn force_new_line(&self) -> &'static str {
        "\\\\ "
    }

    fn list_item_unsorted(&self) -> &'static str {
        "  * "
    }

    fn list_item_sorted(&self) -> &'static str {
        "  - "
    }

    fn list_item_indent(&self) -> &'static str {
        "  "
    }

    fn as_insert_page(&self, path: &[&str], page: &str) -> Result<String> {
        let page = require_text("page", page)?;
        Ok(format!("{{{{page>{}{}}}}}", join_path(path, NAMESPACE_SEPARATOR), page))
    }

    fn disable_toc(&self) -> &'static str {
        "~~NOTOC~~"
    }

    fn disable_cache(&self) -> &'static str {
        "~~NOCACHE~~"
    }

    fn begin_comment(&self) -> &'static str {
        "/*"
    }

    fn end_comment(&self) -> &'static str {
        "*/"
    }

    fn define_table(&self, total_width: u32, columns: &[u32]) -> Result<String> {
        check_table_widths(total_width, columns)?;
        let mut declaration = format!("|< {}px", total_width);
        for column in columns {
            declaration.push_str(&format!(" {}%", column));
        }
        declaration.push_str(" >|");
        Ok(declaration)
    }

    fn as_table_title(&self, cells: &[&str]) -> Result<String> {
        escaped_table_cells(cells, '^', escape_cell)
    }

    fn cell_span_vertically(&self) -> &'static str {
        ":::"
    }

    fn as_table_row(&self, cells: &[&str]) -> Result<String> {
        escaped_table_cells(cells, '|', escape_cell)
    }

    fn begin_box(&self, width: u32, alignment: Alignment) -> Result<String> {
        let width = require_size("width", width)?;
        Ok(format!("<WRAP box {}px {}>", width, alignment.keyword()))
    }

    fn end_box(&self) -> &'static str {
        "</WRAP>"
    }

    fn file_extension(&self) -> &'static str {
        ".txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "====== Inception ======")]
    #[case(2, "===== Inception =====")]
    #[case(3, "==== Inception ====")]
    #[case(4, "=== Inception ===")]
    #[case(5, "== Inception ==")]
    fn test_headings(#[case] level: u8, #[case] expected: &str) {
        assert_eq!(DokuWikiFormatter.as_heading(level, "Inception").unwrap(), expected);
    }

    #[test]
    fn test_heading_helpers_and_failures() {
        let f = DokuWikiFormatter;
        assert_eq!(f.as_heading1("Inception").unwrap(), "====== Inception ======");
        assert_eq!(f.as_heading5("Cast").unwrap(), "== Cast ==");
        assert!(f.as_heading1("").is_err());
        assert!(f.as_heading(0, "Inception").is_err());
        assert!(f.as_heading(6, "Inception").is_err());
    }

    #[test]
    fn test_text_styles() {
        let f = DokuWikiFormatter;
        assert_eq!(f.as_bold("a").unwrap(), "**a**");
        assert_eq!(f.as_italic("a").unwrap(), "//a//");
        assert_eq!(f.as_underline("a").unwrap(), "__a__");
        assert_eq!(f.as_subscript("a").unwrap(), "<sub>a</sub>");
        assert_eq!(f.as_superscript("a").unwrap(), "<sup>a</sup>");
        assert_eq!(f.as_deleted("a").unwrap(), "<del>a</del>");
        assert!(f.as_bold("").is_err());
    }

    #[test]
    fn test_internal_link_shapes() {
        let f = DokuWikiFormatter;
        assert_eq!(
            f.internal_link(&["de", "genre"], "7", Some("filme"), Some("Drama")).unwrap(),
            "[[de:genre:7#filme|Drama]]"
        );
        assert_eq!(f.internal_link(&["de", "genre"], "7", None, Some("Drama")).unwrap(), "[[de:genre:7|Drama]]");
        assert_eq!(f.internal_link(&["de", "genre"], "7", Some("filme"), None).unwrap(), "[[de:genre:7#filme]]");
        assert_eq!(f.internal_link(&[], "start", None, None).unwrap(), "[[start]]");
    }

    #[test]
    fn test_internal_link_skips_empty_segments() {
        let f = DokuWikiFormatter;
        assert_eq!(f.internal_link(&["de", "", "genre"], "7", None, None).unwrap(), "[[de:genre:7]]");
        assert_eq!(f.internal_link(&[""], "7", None, None).unwrap(), "[[7]]");
    }

    #[test]
    fn test_internal_link_rejects_empty_strings() {
        let f = DokuWikiFormatter;
        assert!(f.internal_link(&["de"], "", None, None).is_err());
        assert!(f.internal_link(&["de"], "7", Some(""), None).is_err());
        assert!(f.internal_link(&["de"], "7", None, Some("")).is_err());
    }

    #[test]
    fn test_external_and_email_links() {
        let f = DokuWikiFormatter;
        assert_eq!(
            f.external_link("https://www.imdb.com/title/tt1375666", Some("IMDb")).unwrap(),
            "[[https://www.imdb.com/title/tt1375666|IMDb]]"
        );
        assert_eq!(f.external_link("https://example.org", None).unwrap(), "[[https://example.org]]");
        assert_eq!(f.email_link("info@example.org", Some("Mail")).unwrap(), "[[mailto:info@example.org|Mail]]");
        assert!(f.external_link("", None).is_err());
        assert!(f.email_link("", None).is_err());
    }

    #[test]
    fn test_images() {
        let f = DokuWikiFormatter;
        assert_eq!(f.as_image(&Image::new("poster.jpg")).unwrap(), "{{poster.jpg}}");
        assert_eq!(
            f.as_image(&Image::new("poster.jpg").in_path(["de", "poster"]).size(200, 300).caption("Inception"))
                .unwrap(),
            "{{de:poster:poster.jpg?200x300|Inception}}"
        );
        assert_eq!(f.as_image(&Image::new("poster.jpg").width(200)).unwrap(), "{{poster.jpg?200}}");
        assert!(f.as_image(&Image::new("poster.jpg").width(0)).is_err());
        assert!(f.as_image(&Image::new("")).is_err());
    }

    #[test]
    fn test_align_image() {
        let f = DokuWikiFormatter;
        assert_eq!(f.align_image("{{a.jpg}}", Alignment::Left).unwrap(), "{{a.jpg }}");
        assert_eq!(f.align_image("{{a.jpg}}", Alignment::Centered).unwrap(), "{{ a.jpg }}");
        assert_eq!(f.align_image("{{ a.jpg }}", Alignment::Right).unwrap(), "{{ a.jpg}}");
        assert!(f.align_image("a.jpg", Alignment::Right).is_err());
    }

    #[test]
    fn test_image_box() {
        let f = DokuWikiFormatter;
        let boxed = f.as_image_box(&Image::new("a.jpg").width(250), 300, Alignment::Right).unwrap();
        assert_eq!(boxed, "<WRAP box 300px right>\n{{ a.jpg?250}}\n</WRAP>");
        assert!(f.as_image_box(&Image::new("a.jpg"), 0, Alignment::Right).is_err());
    }

    #[test]
    fn test_insert_page() {
        let f = DokuWikiFormatter;
        assert_eq!(f.as_insert_page(&["en", "navigation"], "42").unwrap(), "{{page>en:navigation:42}}");
        assert!(f.as_insert_page(&["en"], "").is_err());
    }

    #[test]
    fn test_tables() {
        let f = DokuWikiFormatter;
        assert_eq!(f.define_table(600, &[30, 70]).unwrap(), "|< 600px 30% 70% >|");
        assert!(f.define_table(0, &[30, 70]).is_err());
        assert!(f.define_table(600, &[30, 0]).is_err());
        assert_eq!(f.as_table_title(&["Role", "Actor"]).unwrap(), "^ Role ^ Actor ^");
        assert_eq!(f.as_table_title(&["Cast", ""]).unwrap(), "^ Cast ^");
        assert_eq!(f.as_table_row(&["Genre", ""]).unwrap(), "| Genre |");
        assert_eq!(f.as_table_row(&[":::", "Drama"]).unwrap(), "| ::: | Drama |");
        assert!(f.as_table_row(&[]).is_err());
    }

    #[test]
    fn test_table_cells_keep_delimiters_literal() {
        let f = DokuWikiFormatter;
        assert_eq!(f.as_table_row(&["Cobb | Dom", "Leo"]).unwrap(), "| Cobb %%|%% Dom | Leo |");
        assert_eq!(f.as_table_title(&["a ^ b"]).unwrap(), "^ a %%^%% b ^");
        assert_eq!(f.as_table_row(&["[[de:genre:7|Drama]]"]).unwrap(), "| [[de:genre:7|Drama]] |");
        assert_eq!(f.as_table_row(&["{{ a.jpg?200|Poster }}"]).unwrap(), "| {{ a.jpg?200|Poster }} |");
        assert_eq!(escape_cell("[x] | [[a|b]]"), "[x] %%|%% [[a|b]]");
    }

    #[test]
    fn test_fixed_markers() {
        let f = DokuWikiFormatter;
        assert_eq!(f.force_new_line(), "\\\\ ");
        assert_eq!(f.list_item_unsorted(), "  * ");
        assert_eq!(f.list_item_sorted(), "  - ");
        assert_eq!(f.disable_toc(), "~~NOTOC~~");
        assert_eq!(f.disable_cache(), "~~NOCACHE~~");
        assert_eq!((f.begin_comment(), f.end_comment()), ("/*", "*/"));
        assert_eq!(f.cell_span_vertically(), ":::");
        assert_eq!(f.begin_box(300, Alignment::Centered).unwrap(), "<WRAP box 300px center>");
        assert_eq!(f.end_box(), "</WRAP>");
    }

    #[test]
    fn test_filename() {
        assert_eq!(DokuWikiFormatter.as_filename("Amélie (2001)").unwrap(), "amelie_2001.txt");
    }
}
