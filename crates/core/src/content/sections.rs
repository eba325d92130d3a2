//! Chapters and sections below the infobox.
//!
//! Sections without data render no lines at all, so articles never carry
//! empty headings.

use crate::Result;
use crate::content::RenderContext;
use crate::language::headings;
use crate::model::{CastItem, Season, WebLink, year_of};

/// Localized plot description (heading 2).
pub struct DescriptionChapter<'a> {
    description: Option<&'a str>,
}

impl<'a> DescriptionChapter<'a> {
    pub fn new(description: Option<&'a str>) -> Self {
        Self { description }
    }

    pub fn chapter_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        let Some(description) = self.description.filter(|d| !d.trim().is_empty()) else {
            return Ok(Vec::new());
        };

        let mut lines = vec![ctx.formatter.as_heading2(ctx.text(headings::DESCRIPTION))?];
        lines.extend(description.trim().lines().map(|line| line.trim_end().to_string()));
        Ok(lines)
    }
}

/// Role and actor table (heading 3).
pub struct CastSection<'a> {
    items: &'a [CastItem],
}

impl<'a> CastSection<'a> {
    pub fn new(items: &'a [CastItem]) -> Self {
        Self { items }
    }

    pub fn section_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        if self.items.is_empty() {
            return Ok(Vec::new());
        }

        let f = ctx.formatter;
        let mut lines = vec![
            f.as_heading3(ctx.text(headings::CAST))?,
            f.as_table_title(&[ctx.text(headings::ROLE), ctx.text(headings::ACTOR)])?,
        ];

        for item in self.items {
            let role = match ctx.single_line(&item.role) {
                role if role.is_empty() => "-".to_string(),
                role => role,
            };
            let actor = ctx.with_details(item.person.name.clone(), &item.details);
            lines.push(f.as_table_row(&[role.as_str(), actor.as_str()])?);
        }

        Ok(lines)
    }
}

/// External links as an unsorted list (heading 3).
pub struct LinksSection<'a> {
    links: &'a [WebLink],
}

impl<'a> LinksSection<'a> {
    pub fn new(links: &'a [WebLink]) -> Self {
        Self { links }
    }

    pub fn section_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        if self.links.is_empty() {
            return Ok(Vec::new());
        }

        let f = ctx.formatter;
        let mut lines = vec![f.as_heading3(ctx.text(headings::LINKS))?];
        for link in self.links {
            lines.push(format!("{}{}", f.list_item_unsorted(), f.external_link(&link.url, link.text.as_deref())?));
        }

        Ok(lines)
    }
}

/// Seasons as a sorted list with indented episode items (heading 2).
pub struct SeasonsChapter<'a> {
    seasons: &'a [Season],
}

impl<'a> SeasonsChapter<'a> {
    pub fn new(seasons: &'a [Season]) -> Self {
        Self { seasons }
    }

    pub fn chapter_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        if self.seasons.is_empty() {
            return Ok(Vec::new());
        }

        let f = ctx.formatter;
        let mut lines = vec![f.as_heading2(ctx.text(headings::SEASONS))?];

        for season in self.seasons {
            lines.push(format!("{}{} {}", f.list_item_sorted(), ctx.text(headings::SEASON), season.number));
            for episode in &season.episodes {
                let mut entry = format!(
                    "{}{}{} {}: {}",
                    f.list_item_indent(),
                    f.list_item_unsorted(),
                    ctx.text(headings::EPISODE),
                    episode.number,
                    f.as_italic(&episode.original_title)?
                );
                if let Some(date) = episode.release_date.as_deref().filter(|d| !d.is_empty()) {
                    entry.push_str(&format!(" ({})", year_of(date)?));
                }
                lines.push(entry);
            }
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::formatters::{DokuWikiFormatter, MarkdownFormatter, ObsidianFormatter};
    use crate::language::Language;
    use crate::model::{Episode, Person};

    fn cast() -> Vec<CastItem> {
        vec![
            CastItem {
                person: Person { id: 1, name: "Leonardo DiCaprio".to_string() },
                role: "Cobb".to_string(),
                details: String::new(),
            },
            CastItem {
                person: Person { id: 2, name: "Elliot Page".to_string() },
                role: String::new(),
                details: "uncredited".to_string(),
            },
        ]
    }

    #[test]
    fn test_description_chapter() {
        let layout = LayoutConfig::default();
        let ctx = RenderContext::new(&DokuWikiFormatter, Language::German, &layout);

        let lines = DescriptionChapter::new(Some("Ein Dieb.\nEr stiehlt Träume.  ")).chapter_content(&ctx).unwrap();
        assert_eq!(lines, vec!["===== Beschreibung =====", "Ein Dieb.", "Er stiehlt Träume."]);

        assert!(DescriptionChapter::new(None).chapter_content(&ctx).unwrap().is_empty());
        assert!(DescriptionChapter::new(Some(" ")).chapter_content(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_cast_section_dokuwiki() {
        let layout = LayoutConfig::default();
        let ctx = RenderContext::new(&DokuWikiFormatter, Language::English, &layout);
        let items = cast();

        let lines = CastSection::new(&items).section_content(&ctx).unwrap();
        assert_eq!(
            lines,
            vec![
                "==== Cast ====",
                "^ Role ^ Actor ^",
                "| Cobb | Leonardo DiCaprio |",
                "| - | Elliot Page\\\\ uncredited |",
            ]
        );
    }

    #[test]
    fn test_cast_section_multi_line_role_and_details() {
        let layout = LayoutConfig::default();
        let ctx = RenderContext::new(&MarkdownFormatter, Language::English, &layout);
        let items = vec![CastItem {
            person: Person { id: 3, name: "Tom Hardy".to_string() },
            role: "Eames\nforger".to_string(),
            details: "voice\n\nuncredited".to_string(),
        }];

        let lines = CastSection::new(&items).section_content(&ctx).unwrap();
        assert_eq!(lines[2], "| Eames<br />forger | Tom Hardy<br />voice<br />uncredited |");
    }

    #[test]
    fn test_cast_section_markdown_title_has_separator() {
        let layout = LayoutConfig::default();
        let ctx = RenderContext::new(&MarkdownFormatter, Language::German, &layout);
        let items = cast();

        let lines = CastSection::new(&items).section_content(&ctx).unwrap();
        assert_eq!(lines[1], "| Rolle | Darsteller |\n| --- | --- |");
        assert!(CastSection::new(&[]).section_content(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_links_section() {
        let layout = LayoutConfig::default();
        let ctx = RenderContext::new(&DokuWikiFormatter, Language::German, &layout);
        let links = vec![
            WebLink { url: "https://www.imdb.com/title/tt1375666".to_string(), text: Some("IMDb".to_string()) },
            WebLink { url: "https://example.org".to_string(), text: None },
        ];

        let lines = LinksSection::new(&links).section_content(&ctx).unwrap();
        assert_eq!(
            lines,
            vec![
                "==== Weblinks ====",
                "  * [[https://www.imdb.com/title/tt1375666|IMDb]]",
                "  * [[https://example.org]]",
            ]
        );
    }

    #[test]
    fn test_links_section_rejects_empty_url() {
        let layout = LayoutConfig::default();
        let ctx = RenderContext::new(&DokuWikiFormatter, Language::German, &layout);
        let links = vec![WebLink { url: String::new(), text: None }];
        assert!(LinksSection::new(&links).section_content(&ctx).is_err());
    }

    #[test]
    fn test_seasons_chapter_obsidian() {
        let layout = LayoutConfig::default();
        let obsidian = ObsidianFormatter::new();
        let ctx = RenderContext::new(&obsidian, Language::English, &layout);
        let seasons = vec![Season {
            number: 1,
            episodes: vec![
                Episode { number: 1, original_title: "Secrets".to_string(), release_date: Some("2017-12-01".into()) },
                Episode { number: 2, original_title: "Lies".to_string(), release_date: None },
            ],
        }];

        let lines = SeasonsChapter::new(&seasons).chapter_content(&ctx).unwrap();
        assert_eq!(
            lines,
            vec!["## Seasons", "1. Season 1", "\t- Episode 1: *Secrets* (2017)", "\t- Episode 2: *Lies*"]
        );
    }
}
