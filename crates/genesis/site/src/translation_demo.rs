//! Translation-key lookup tool shown in the i18n phase

use crate::locale::Locale;
use serde::Serialize;

/// One text in all three site languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub pl: &'static str,
    pub en: &'static str,
    pub ja: &'static str,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Pl => self.pl,
            Locale::En => self.en,
            Locale::Ja => self.ja,
        }
    }
}

const SAMPLES: [(&str, LocalizedText); 4] = [
    (
        "hero.title",
        LocalizedText {
            pl: "AI Genesis: Interaktywny Meta-Tutorial",
            en: "AI Genesis: Interactive Meta-Tutorial",
            ja: "AI ジェネシス: インタラクティブメタチュートリアル",
        },
    ),
    (
        "nav.home",
        LocalizedText {
            pl: "Strona główna",
            en: "Home",
            ja: "ホーム",
        },
    ),
    (
        "nav.about",
        LocalizedText {
            pl: "O projekcie",
            en: "About",
            ja: "について",
        },
    ),
    (
        "contact.title",
        LocalizedText {
            pl: "Kontakt",
            en: "Contact",
            ja: "お問い合わせ",
        },
    ),
];

const KEY_NOT_FOUND: LocalizedText = LocalizedText {
    pl: "Klucz nie znaleziony",
    en: "Key not found",
    ja: "キーが見つかりません",
};

pub const DEFAULT_DEMO_KEY: &str = "hero.title";

/// Result of looking a key up in the sample table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoLookup {
    pub key: String,
    pub found: bool,
    pub texts: LocalizedText,
}

/// State of the lookup tool: the key typed into its input box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDemo {
    key: String,
}

impl Default for TranslationDemo {
    fn default() -> Self {
        Self {
            key: DEFAULT_DEMO_KEY.to_string(),
        }
    }
}

impl TranslationDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample keys the tool knows about
    pub fn sample_keys() -> impl Iterator<Item = &'static str> {
        SAMPLES.iter().map(|(key, _)| *key)
    }

    /// Exact-match lookup; unknown keys yield the "key not found" triple
    pub fn lookup(key: &str) -> DemoLookup {
        let found = SAMPLES.iter().find(|(k, _)| *k == key).map(|(_, t)| *t);
        DemoLookup {
            key: key.to_string(),
            found: found.is_some(),
            texts: found.unwrap_or(KEY_NOT_FOUND),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Input-change event
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn current(&self) -> DemoLookup {
        Self::lookup(&self.key)
    }
}
