use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Target language of the generated wiki.
///
/// Only English and German exist. Every code other than `"en"` selects
/// German, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    English,
    #[default]
    German,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("en") { Language::English } else { Language::German }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code(&code))
    }
}

/// Text available in both wiki languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub english: &'static str,
    pub german: &'static str,
}

impl Bilingual {
    pub const fn new(english: &'static str, german: &'static str) -> Self {
        Self { english, german }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::German => self.german,
        }
    }
}

/// Headings and labels used by the content creators.
pub mod headings {
    use super::Bilingual;

    pub const ORIGINAL_TITLE: Bilingual = Bilingual::new("Original Title", "Originaltitel");
    pub const TITLE: Bilingual = Bilingual::new("English Title", "Deutscher Titel");
    pub const RELEASE_YEAR: Bilingual = Bilingual::new("Release Year", "Erscheinungsjahr");
    pub const RUNNING_TIME: Bilingual = Bilingual::new("Running Time", "Dauer");
    pub const GENRE: Bilingual = Bilingual::new("Genre", "Genre");
    pub const COUNTRY: Bilingual = Bilingual::new("Production Country", "Produktionsland");
    pub const LANGUAGE: Bilingual = Bilingual::new("Language", "Sprache");
    pub const FILM_FORMAT: Bilingual = Bilingual::new("Film Format", "Filmformat");
    pub const RELEASE_DATE: Bilingual = Bilingual::new("Release Date", "Premiere");
    pub const INFOBOX_TITLE: Bilingual = Bilingual::new("Facts", "Fakten");
    pub const DESCRIPTION: Bilingual = Bilingual::new("Description", "Beschreibung");
    pub const CAST: Bilingual = Bilingual::new("Cast", "Besetzung");
    pub const ROLE: Bilingual = Bilingual::new("Role", "Rolle");
    pub const ACTOR: Bilingual = Bilingual::new("Actor", "Darsteller");
    pub const SEASONS: Bilingual = Bilingual::new("Seasons", "Staffeln");
    pub const SEASON: Bilingual = Bilingual::new("Season", "Staffel");
    pub const EPISODE: Bilingual = Bilingual::new("Episode", "Folge");
    pub const LINKS: Bilingual = Bilingual::new("Links", "Weblinks");
    pub const MOVIES: Bilingual = Bilingual::new("Movies and Series", "Filme und Serien");
    pub const MINUTES: Bilingual = Bilingual::new("min", "Min.");
    pub const GENERATED: Bilingual = Bilingual::new(
        "This page is generated from the catalog, changes will be overwritten.",
        "Diese Seite wird aus dem Katalog erzeugt, Änderungen werden überschrieben.",
    );
}
