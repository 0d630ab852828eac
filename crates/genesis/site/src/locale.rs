//! Supported interface languages

use crate::error::SiteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Polish, the language the site is written in
    #[default]
    Pl,
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Pl, Locale::En, Locale::Ja];

    /// Used when a key is missing in the active locale
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Name of the language in that language, as shown by the switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Pl => "Polski",
            Locale::En => "English",
            Locale::Ja => "日本語",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SiteError;

    /// Accepts bare codes and region-tagged tags (`en-US`, `ja_JP`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == primary)
            .ok_or_else(|| SiteError::UnsupportedLocale(s.to_string()))
    }
}
