//! Movie and series articles.
//!
//! Both article types share one layout:
//!
//! 1. generated-file comment and page directives
//! 2. level 1 heading with the localized title
//! 3. floating infobox (poster, titles, year, attribute rows)
//! 4. description chapter
//! 5. cast section, seasons chapter (series only), links section
//! 6. navigation transclusion

use tracing::debug;

use crate::Result;
use crate::content::entries::{AttributeEntries, AttributeKind, ReleaseEntries, RuntimeEntries};
use crate::content::sections::{CastSection, DescriptionChapter, LinksSection, SeasonsChapter};
use crate::content::{NAVIGATION_NAMESPACE, POSTER_NAMESPACE, Page, ProductionKind, RenderContext};
use crate::formatters::{Alignment, Image};
use crate::language::headings;
use crate::model::{Movie, Production, Series, year_of};

/// Appends `block` after a blank separator line, unless it is empty.
fn push_block(lines: &mut Vec<String>, block: Vec<String>) {
    if block.is_empty() {
        return;
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.extend(block);
}

fn header(ctx: &RenderContext<'_>, title: &str) -> Result<Vec<String>> {
    let f = ctx.formatter;
    let mut lines = vec![format!("{} {} {}", f.begin_comment(), ctx.text(headings::GENERATED), f.end_comment())];
    lines.extend([f.disable_toc(), f.disable_cache()].into_iter().filter(|d| !d.is_empty()).map(String::from));
    lines.push(f.as_heading1(title)?);
    Ok(lines)
}

fn infobox(ctx: &RenderContext<'_>, production: &Production, years: &str) -> Result<Vec<String>> {
    let f = ctx.formatter;
    let layout = ctx.layout;
    let title = production.title_for(ctx.language);

    let mut lines = vec![f.begin_box(layout.infobox_width, Alignment::Right)?, String::new()];

    if let Some(poster) = production.poster.as_deref().filter(|p| !p.is_empty()) {
        let image = Image::new(poster)
            .in_path([ctx.code(), POSTER_NAMESPACE])
            .width(layout.poster_width)
            .caption(title);
        lines.push(f.align_image(&f.as_image(&image)?, Alignment::Centered)?);
        lines.push(String::new());
    }

    let table = f.define_table(layout.infobox_width, &layout.column_widths)?;
    if !table.is_empty() {
        lines.push(table);
    }
    lines.push(f.as_table_title(&[ctx.text(headings::INFOBOX_TITLE), title])?);

    let label = f.as_bold(ctx.text(headings::ORIGINAL_TITLE))?;
    let original_title = f.as_italic(&production.original_title)?;
    lines.push(f.as_table_row(&[label.as_str(), original_title.as_str()])?);
    if title != production.original_title {
        let label = f.as_bold(ctx.text(headings::TITLE))?;
        lines.push(f.as_table_row(&[label.as_str(), title])?);
    }
    let label = f.as_bold(ctx.text(headings::RELEASE_YEAR))?;
    lines.push(f.as_table_row(&[label.as_str(), years])?);

    lines.extend(AttributeEntries::new(AttributeKind::Genre, &production.genres).infobox_content(ctx)?);
    lines.extend(AttributeEntries::new(AttributeKind::Country, &production.countries).infobox_content(ctx)?);
    lines.extend(AttributeEntries::new(AttributeKind::Language, &production.languages).infobox_content(ctx)?);
    lines.extend(RuntimeEntries::new(&production.runtimes).infobox_content(ctx)?);
    lines.extend(AttributeEntries::new(AttributeKind::FilmFormat, &production.film_formats).infobox_content(ctx)?);
    lines.extend(ReleaseEntries::new(&production.releases).infobox_content(ctx)?);

    lines.push(String::new());
    lines.push(f.end_box().to_string());
    Ok(lines)
}

fn footer(ctx: &RenderContext<'_>) -> Result<Vec<String>> {
    if !ctx.layout.include_navigation {
        return Ok(Vec::new());
    }
    let insert = ctx
        .formatter
        .as_insert_page(&[ctx.code(), NAVIGATION_NAMESPACE], &ctx.layout.navigation_page)?;
    Ok(vec![insert])
}

fn production_page(
    ctx: &RenderContext<'_>, kind: ProductionKind, production: &Production, lines: Vec<String>,
) -> Result<Page> {
    let file_name = ctx.formatter.as_filename(&production.page_title(ctx.language)?)?;
    debug!(file = %file_name, lines = lines.len(), "rendered article");
    let path = vec![ctx.code().to_string(), ctx.text(kind.namespace()).to_string()];
    Ok(Page::new(path, file_name, lines))
}

/// Article page of a movie.
pub struct MovieArticle<'a> {
    movie: &'a Movie,
}

impl<'a> MovieArticle<'a> {
    pub fn new(movie: &'a Movie) -> Self {
        Self { movie }
    }

    pub fn create_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        let production = &self.movie.production;

        let mut lines = header(ctx, production.title_for(ctx.language))?;
        push_block(&mut lines, infobox(ctx, production, production.year()?)?);
        push_block(&mut lines, DescriptionChapter::new(production.description_for(ctx.language)).chapter_content(ctx)?);
        push_block(&mut lines, CastSection::new(&production.cast).section_content(ctx)?);
        push_block(&mut lines, LinksSection::new(&production.links).section_content(ctx)?);
        push_block(&mut lines, footer(ctx)?);
        Ok(lines)
    }

    pub fn create_page(&self, ctx: &RenderContext<'_>) -> Result<Page> {
        let lines = self.create_content(ctx)?;
        production_page(ctx, ProductionKind::Movie, &self.movie.production, lines)
    }
}

/// Article page of a series.
pub struct SeriesArticle<'a> {
    series: &'a Series,
}

impl<'a> SeriesArticle<'a> {
    pub fn new(series: &'a Series) -> Self {
        Self { series }
    }

    /// `2017` for running series, `2017-2020` once an end date is known.
    pub fn years(&self) -> Result<String> {
        let start = self.series.production.year()?;
        match self.series.end_date.as_deref().filter(|d| !d.is_empty()) {
            Some(end) => Ok(format!("{}-{}", start, year_of(end)?)),
            None => Ok(start.to_string()),
        }
    }

    pub fn create_content(&self, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
        let production = &self.series.production;

        let mut lines = header(ctx, production.title_for(ctx.language))?;
        push_block(&mut lines, infobox(ctx, production, &self.years()?)?);
        push_block(&mut lines, DescriptionChapter::new(production.description_for(ctx.language)).chapter_content(ctx)?);
        push_block(&mut lines, CastSection::new(&production.cast).section_content(ctx)?);
        push_block(&mut lines, SeasonsChapter::new(&self.series.seasons).chapter_content(ctx)?);
        push_block(&mut lines, LinksSection::new(&production.links).section_content(ctx)?);
        push_block(&mut lines, footer(ctx)?);
        Ok(lines)
    }

    pub fn create_page(&self, ctx: &RenderContext<'_>) -> Result<Page> {
        let lines = self.create_content(ctx)?;
        production_page(ctx, ProductionKind::Series, &self.series.production, lines)
    }
}
