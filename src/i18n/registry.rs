//! Country registry: English display names for ISO 3166-1 alpha-2 codes.
//!
//! Language names come from `isolang`; country names have no equivalent crate in
//! our stack, so the common ones are kept here. The registry is a lazily
//! initialized singleton, immutable after first access.

use std::sync::OnceLock;

/// A country known to the registry.
#[derive(Debug, Clone)]
pub struct CountryConfig {
    /// ISO 3166-1 alpha-2 code, upper case (e.g., "FR")
    pub code: &'static str,

    /// English name (e.g., "France")
    pub name: &'static str,
}

/// Global country registry singleton.
pub struct CountryRegistry {
    countries: Vec<CountryConfig>,
}

static REGISTRY: OnceLock<CountryRegistry> = OnceLock::new();

impl CountryRegistry {
    /// Get the global country registry instance.
    pub fn get() -> &'static CountryRegistry {
        REGISTRY.get_or_init(|| CountryRegistry {
            countries: default_countries(),
        })
    }

    /// Look up a country by code. Matching is case-insensitive.
    pub fn get_by_code(&self, code: &str) -> Option<&CountryConfig> {
        self.countries
            .iter()
            .find(|country| country.code.eq_ignore_ascii_case(code))
    }

    /// English name for a code, if the country is known.
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.get_by_code(code).map(|country| country.name)
    }
}

fn default_countries() -> Vec<CountryConfig> {
    const COUNTRIES: &[(&str, &str)] = &[
        ("AE", "United Arab Emirates"),
        ("AR", "Argentina"),
        ("AT", "Austria"),
        ("AU", "Australia"),
        ("BE", "Belgium"),
        ("BG", "Bulgaria"),
        ("BR", "Brazil"),
        ("CA", "Canada"),
        ("CH", "Switzerland"),
        ("CL", "Chile"),
        ("CN", "China"),
        ("CO", "Colombia"),
        ("CZ", "Czechia"),
        ("DE", "Germany"),
        ("DK", "Denmark"),
        ("EG", "Egypt"),
        ("ES", "Spain"),
        ("FI", "Finland"),
        ("FR", "France"),
        ("GB", "United Kingdom"),
        ("GR", "Greece"),
        ("HK", "Hong Kong"),
        ("HR", "Croatia"),
        ("HU", "Hungary"),
        ("ID", "Indonesia"),
        ("IE", "Ireland"),
        ("IL", "Israel"),
        ("IN", "India"),
        ("IR", "Iran"),
        ("IT", "Italy"),
        ("JP", "Japan"),
        ("KR", "South Korea"),
        ("LU", "Luxembourg"),
        ("MX", "Mexico"),
        ("MY", "Malaysia"),
        ("NG", "Nigeria"),
        ("NL", "Netherlands"),
        ("NO", "Norway"),
        ("NZ", "New Zealand"),
        ("PE", "Peru"),
        ("PH", "Philippines"),
        ("PK", "Pakistan"),
        ("PL", "Poland"),
        ("PT", "Portugal"),
        ("RO", "Romania"),
        ("RS", "Serbia"),
        ("RU", "Russia"),
        ("SA", "Saudi Arabia"),
        ("SE", "Sweden"),
        ("SG", "Singapore"),
        ("SK", "Slovakia"),
        ("TH", "Thailand"),
        ("TR", "Turkey"),
        ("TW", "Taiwan"),
        ("UA", "Ukraine"),
        ("US", "United States"),
        ("VE", "Venezuela"),
        ("VN", "Vietnam"),
        ("ZA", "South Africa"),
    ];

    COUNTRIES
        .iter()
        .map(|&(code, name)| CountryConfig { code, name })
        .collect()
}
