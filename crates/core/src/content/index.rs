//! Attribute index pages.
//!
//! Every genre, country, language and film format referenced by the catalog
//! gets a page listing the movies and series that carry it.

use std::collections::BTreeMap;

use tracing::warn;

use crate::Result;
use crate::catalog::Catalog;
use crate::content::{AttributeKind, Page, ProductionKind, RenderContext};
use crate::language::headings;
use crate::model::{Attribute, AttributeItem, Production};

/// One attribute and the productions referencing it.
pub struct AttributeIndex<'a> {
    pub kind: AttributeKind,
    pub attribute: &'a Attribute,
    pub productions: Vec<(ProductionKind, &'a Production)>,
}

impl<'a> AttributeIndex<'a> {
    pub fn create_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        let f = ctx.formatter;
        let mut productions = self.productions.clone();
        productions.sort_by(|(_, a), (_, b)| a.title_for(ctx.language).cmp(b.title_for(ctx.language)));

        let mut lines = vec![
            f.as_heading1(self.attribute.name(ctx.language))?,
            String::new(),
            f.as_heading2(ctx.text(headings::MOVIES))?,
        ];
        for (kind, production) in productions {
            lines.push(format!("{}{}", f.list_item_unsorted(), ctx.production_link(kind, production)?));
        }
        Ok(lines)
    }

    pub fn create_page(&self, ctx: &RenderContext<'_>) -> Result<Page> {
        let lines = self.create_content(ctx)?;
        let path = vec![ctx.code().to_string(), ctx.text(self.kind.namespace()).to_string()];
        let file_name = ctx.formatter.as_filename(&self.attribute.id.to_string())?;
        Ok(Page::new(path, file_name, lines))
    }
}

fn attribute_items(production: &Production) -> impl Iterator<Item = (AttributeKind, &Attribute)> {
    let lists: [(AttributeKind, &[AttributeItem]); 4] = [
        (AttributeKind::Genre, &production.genres),
        (AttributeKind::Country, &production.countries),
        (AttributeKind::Language, &production.languages),
        (AttributeKind::FilmFormat, &production.film_formats),
    ];
    let runtime_countries = production
        .runtimes
        .iter()
        .filter_map(|runtime| runtime.country.as_ref())
        .map(|country| (AttributeKind::Country, country));
    let release_countries = production.releases.iter().map(|release| (AttributeKind::Country, &release.country));

    lists
        .into_iter()
        .flat_map(|(kind, items)| items.iter().map(move |item| (kind, &item.attribute)))
        .chain(runtime_countries)
        .chain(release_countries)
}

/// Groups the catalog by attribute, ordered by kind and id.
///
/// A production is listed once per attribute even when it references the
/// attribute several times (e.g. as production and release country).
pub fn collect_attribute_indexes(catalog: &Catalog) -> Vec<AttributeIndex<'_>> {
    let movies = catalog.movies.iter().map(|movie| (ProductionKind::Movie, &movie.production));
    let series = catalog.series.iter().map(|series| (ProductionKind::Series, &series.production));

    let mut indexes: BTreeMap<(AttributeKind, u32), AttributeIndex<'_>> = BTreeMap::new();
    for (production_kind, production) in movies.chain(series) {
        for (kind, attribute) in attribute_items(production) {
            let index = indexes.entry((kind, attribute.id)).or_insert_with(|| AttributeIndex {
                kind,
                attribute,
                productions: Vec::new(),
            });

            if index.attribute != attribute {
                warn!(
                    kind = ?kind,
                    id = attribute.id,
                    kept = %index.attribute.english_name,
                    ignored = %attribute.english_name,
                    "attribute id carries different names"
                );
            }
            if !index.productions.iter().any(|(_, p)| std::ptr::eq(*p, production)) {
                index.productions.push((production_kind, production));
            }
        }
    }

    indexes.into_values().collect()
}
