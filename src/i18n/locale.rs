//! Locale type: a language code with an optional country code.
//!
//! Locales arrive as tags (`de`, `fr-FR`, `pt_br`) and are normalized on parse:
//! language lower case, country upper case. Parsing never fails; a blank language
//! code survives parsing so request validation can report it.

use crate::i18n::CountryRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Build a locale from its parts, normalizing case and whitespace.
    pub fn new(language: &str, country: Option<&str>) -> Self {
        let country = country
            .map(|c| c.trim().to_ascii_uppercase())
            .filter(|c| !c.is_empty());

        Self {
            language: language.trim().to_ascii_lowercase(),
            country,
        }
    }

    /// Parse a tag such as `fr`, `fr-FR`, `fr_FR` or `zh-Hant-TW`.
    ///
    /// A script subtag after the language is skipped. The next subtag becomes the
    /// country only if it is a region (two letters or three digits); anything
    /// else, and everything after it, is dropped.
    pub fn parse(tag: &str) -> Self {
        let mut parts = tag.trim().split(['-', '_']).map(str::trim);
        let language = parts.next().unwrap_or_default();

        let mut subtag = parts.next();
        if subtag.is_some_and(is_script_subtag) {
            subtag = parts.next();
        }
        let country = subtag.filter(|s| is_region_subtag(s));

        Self::new(language, country)
    }

    /// ISO 639 language code (e.g., "fr"). May be empty for unvalidated input.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 3166 country code (e.g., "FR"), if any.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn has_language(&self) -> bool {
        !self.language.is_empty()
    }

    /// English name of the language, falling back to the raw code when unknown.
    pub fn language_name(&self) -> String {
        let language = match self.language.len() {
            2 => isolang::Language::from_639_1(&self.language),
            3 => isolang::Language::from_639_3(&self.language),
            _ => None,
        };

        language
            .map(|lang| lang.to_name().to_string())
            .unwrap_or_else(|| self.language.clone())
    }

    /// Human-readable name used in prompts: "French" or "French (France)".
    pub fn display_name(&self) -> String {
        let language = self.language_name();
        match &self.country {
            Some(code) => {
                let country = CountryRegistry::get().name_of(code).unwrap_or(code.as_str());
                format!("{} ({})", language, country)
            }
            None => language,
        }
    }

    /// Canonical tag form, `fr` or `fr-FR`.
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

/// ISO 15924 script, e.g. `Hant`
fn is_script_subtag(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

/// ISO 3166-1 alpha-2 (`TW`) or UN M.49 numeric (`419`) region
fn is_region_subtag(subtag: &str) -> bool {
    match subtag.len() {
        2 => subtag.chars().all(|c| c.is_ascii_alphabetic()),
        3 => subtag.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::parse(&tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::parse(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
