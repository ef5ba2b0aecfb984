//! Locale handling for translation requests.
//!
//! # Architecture
//!
//! - `locale`: the `Locale` value type (language + optional country) and its
//!   human-readable display name
//! - `registry`: English names for country codes
//!
//! # Example
//!
//! ```rust,ignore
//! use polyglot_api::i18n::Locale;
//!
//! let locale = Locale::parse("fr-FR");
//! assert_eq!(locale.display_name(), "French (France)");
//! ```

mod locale;
mod registry;

pub use locale::Locale;
pub use registry::CountryRegistry;
