//! Catalog entities.
//!
//! Movies and series reference attribute entities (genre, country, language,
//! film format) through item records that add free-text details. Content
//! creators only ever read these values.

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::{FilmwikiError, Result};

/// A referenced attribute entity with its names in both wiki languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: u32,
    pub english_name: String,
    pub german_name: String,
}

impl Attribute {
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english_name,
            Language::German => &self.german_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeItem {
    pub attribute: Attribute,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeItem {
    pub minutes: u32,
    #[serde(default)]
    pub country: Option<Attribute>,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseItem {
    pub country: Attribute,
    pub date: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastItem {
    pub person: Person,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebLink {
    pub url: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub number: u32,
    pub original_title: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub number: u32,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// Fields shared by movies and series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub id: u32,
    pub original_title: String,
    #[serde(default)]
    pub english_title: Option<String>,
    #[serde(default)]
    pub german_title: Option<String>,
    /// ISO-like date, at least the year (`2010`, `2010-07-16`).
    pub release_date: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_de: Option<String>,
    #[serde(default)]
    pub genres: Vec<AttributeItem>,
    #[serde(default)]
    pub countries: Vec<AttributeItem>,
    #[serde(default)]
    pub languages: Vec<AttributeItem>,
    #[serde(default)]
    pub runtimes: Vec<RuntimeItem>,
    #[serde(default)]
    pub film_formats: Vec<AttributeItem>,
    #[serde(default)]
    pub releases: Vec<ReleaseItem>,
    #[serde(default)]
    pub cast: Vec<CastItem>,
    #[serde(default)]
    pub links: Vec<WebLink>,
}

impl Production {
    /// Localized title, falling back to the original title.
    pub fn title_for(&self, language: Language) -> &str {
        let localized = match language {
            Language::English => self.english_title.as_deref(),
            Language::German => self.german_title.as_deref(),
        };
        localized.filter(|t| !t.is_empty()).unwrap_or(&self.original_title)
    }

    /// First four characters of the release date.
    pub fn year(&self) -> Result<&str> {
        year_of(&self.release_date)
    }

    pub fn description_for(&self, language: Language) -> Option<&str> {
        let description = match language {
            Language::English => self.description_en.as_deref(),
            Language::German => self.description_de.as_deref(),
        };
        description.filter(|d| !d.trim().is_empty())
    }

    /// Page title used for links and file names: `Title (Year)`.
    pub fn page_title(&self, language: Language) -> Result<String> {
        Ok(format!("{} ({})", self.title_for(language), self.year()?))
    }
}

/// Leading four ASCII digits of a release date. Anything else is rejected
/// rather than leaking into a file name.
pub(crate) fn year_of(date: &str) -> Result<&str> {
    date.get(..4)
        .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
        .ok_or_else(|| FilmwikiError::invalid_argument("release_date", "must start with a four digit year"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(flatten)]
    pub production: Production,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    #[serde(flatten)]
    pub production: Production,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> Production {
        Production {
            id: 1,
            original_title: "Inception".to_string(),
            german_title: Some("Inception - Der Traum".to_string()),
            release_date: "2010-07-16".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_for_falls_back_to_original() {
        let movie = inception();
        assert_eq!(movie.title_for(Language::English), "Inception");
        assert_eq!(movie.title_for(Language::German), "Inception - Der Traum");

        let blank = Production { english_title: Some(String::new()), ..inception() };
        assert_eq!(blank.title_for(Language::English), "Inception");
    }

    #[test]
    fn test_year() {
        assert_eq!(inception().year().unwrap(), "2010");
        assert_eq!(year_of("1999").unwrap(), "1999");
        assert!(year_of("99").is_err());
        assert!(year_of("").is_err());
        assert!(year_of("unknown").is_err());
        assert!(year_of("20x1-05-01").is_err());
        assert!(year_of("äb99").is_err());
    }

    #[test]
    fn test_page_title() {
        assert_eq!(inception().page_title(Language::English).unwrap(), "Inception (2010)");
    }

    #[test]
    fn test_description_for_ignores_blank() {
        let movie = Production { description_en: Some("  ".to_string()), ..inception() };
        assert_eq!(movie.description_for(Language::English), None);
        assert_eq!(movie.description_for(Language::German), None);
    }

    #[test]
    fn test_series_deserializes_flattened_fields() {
        let json = r#"{
            "id": 3,
            "original_title": "Dark",
            "release_date": "2017-12-01",
            "seasons": [{ "number": 1, "episodes": [{ "number": 1, "original_title": "Geheimnisse" }] }]
        }"#;
        let series: Series = serde_json::from_str(json).unwrap();
        assert_eq!(series.production.original_title, "Dark");
        assert_eq!(series.seasons[0].episodes[0].original_title, "Geheimnisse");
        assert!(series.production.genres.is_empty());
    }
}
