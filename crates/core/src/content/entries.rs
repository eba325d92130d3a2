//! Infobox rows for attribute lists.
//!
//! Every entry list renders one table row per item. The first row carries
//! the bold heading, later rows carry the vertical span marker so the
//! heading cell stretches over the whole group.

use crate::Result;
use crate::content::RenderContext;
use crate::language::{Bilingual, headings};
use crate::model::{AttributeItem, ReleaseItem, RuntimeItem};

/// Attribute entities that have their own index pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKind {
    Genre,
    Country,
    Language,
    FilmFormat,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 4] =
        [AttributeKind::Genre, AttributeKind::Country, AttributeKind::Language, AttributeKind::FilmFormat];

    pub fn heading(self) -> Bilingual {
        match self {
            AttributeKind::Genre => headings::GENRE,
            AttributeKind::Country => headings::COUNTRY,
            AttributeKind::Language => headings::LANGUAGE,
            AttributeKind::FilmFormat => headings::FILM_FORMAT,
        }
    }

    pub fn namespace(self) -> Bilingual {
        match self {
            AttributeKind::Genre => Bilingual::new("genre", "genre"),
            AttributeKind::Country => Bilingual::new("country", "land"),
            AttributeKind::Language => Bilingual::new("language", "sprache"),
            AttributeKind::FilmFormat => Bilingual::new("filmformat", "filmformat"),
        }
    }
}

/// Heading cell on the first row, span marker below, value in the second cell.
pub(crate) fn infobox_rows(ctx: &RenderContext<'_>, heading: Bilingual, values: Vec<String>) -> Result<Vec<String>> {
    let mut rows = Vec::with_capacity(values.len());
    let heading = ctx.formatter.as_bold(ctx.text(heading))?;

    for (index, value) in values.into_iter().enumerate() {
        let first = if index == 0 { heading.as_str() } else { ctx.formatter.cell_span_vertically() };
        rows.push(ctx.formatter.as_table_row(&[first, value.as_str()])?);
    }

    Ok(rows)
}

/// Genre, country, language or film format items of a production.
pub struct AttributeEntries<'a> {
    kind: AttributeKind,
    items: &'a [AttributeItem],
}

impl<'a> AttributeEntries<'a> {
    pub fn new(kind: AttributeKind, items: &'a [AttributeItem]) -> Self {
        Self { kind, items }
    }

    pub fn infobox_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        let values = self
            .items
            .iter()
            .map(|item| -> Result<String> {
                Ok(ctx.with_details(ctx.attribute_link(self.kind, &item.attribute)?, &item.details))
            })
            .collect::<Result<Vec<_>>>()?;

        infobox_rows(ctx, self.kind.heading(), values)
    }
}

/// Running times, optionally per country.
pub struct RuntimeEntries<'a> {
    items: &'a [RuntimeItem],
}

impl<'a> RuntimeEntries<'a> {
    pub fn new(items: &'a [RuntimeItem]) -> Self {
        Self { items }
    }

    pub fn infobox_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        let mut values = Vec::with_capacity(self.items.len());
        for item in self.items {
            let mut value = format!("{} {}", item.minutes, ctx.text(headings::MINUTES));
            if let Some(country) = &item.country {
                value.push_str(&format!(" ({})", ctx.attribute_link(AttributeKind::Country, country)?));
            }
            values.push(ctx.with_details(value, &item.details));
        }

        infobox_rows(ctx, headings::RUNNING_TIME, values)
    }
}

/// Release dates per country.
pub struct ReleaseEntries<'a> {
    items: &'a [ReleaseItem],
}

impl<'a> ReleaseEntries<'a> {
    pub fn new(items: &'a [ReleaseItem]) -> Self {
        Self { items }
    }

    pub fn infobox_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        let values = self
            .items
            .iter()
            .map(|item| -> Result<String> {
                let country = ctx.attribute_link(AttributeKind::Country, &item.country)?;
                Ok(ctx.with_details(format!("{} ({})", item.date, country), &item.details))
            })
            .collect::<Result<Vec<_>>>()?;

        infobox_rows(ctx, headings::RELEASE_DATE, values)
    }
}
