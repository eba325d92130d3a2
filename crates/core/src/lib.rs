pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod formatters;
pub mod generator;
pub mod language;
pub mod model;

pub use catalog::{Catalog, read_file, read_stdin};
pub use config::{GeneratorConfig, GeneratorConfigBuilder, LayoutConfig};
pub use content::{
    AttributeEntries, AttributeIndex, AttributeKind, CastSection, DescriptionChapter, LinksSection, MovieArticle, Page,
    ProductionKind, ReleaseEntries, RenderContext, RuntimeEntries, SeasonsChapter, SeriesArticle,
    collect_attribute_indexes,
};
pub use error::{FilmwikiError, Result};
pub use formatters::{Alignment, Dialect, DokuWikiFormatter, Formatter, Image, MarkdownFormatter, ObsidianFormatter};
pub use generator::{WikiGenerator, write_pages};
pub use language::{Bilingual, Language};
pub use model::{
    Attribute, AttributeItem, CastItem, Episode, Movie, Person, Production, ReleaseItem, RuntimeItem, Season, Series,
    WebLink,
};
