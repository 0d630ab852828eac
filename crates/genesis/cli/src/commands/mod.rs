//! CLI command implementations

pub mod contact;
pub mod hub;
pub mod i18n;
pub mod nav;
pub mod workshop;

use crate::output::OutputFormat;
use genesis_site::{Locale, TranslationCatalog};

/// What every command gets from the global flags
pub struct Context {
    pub locale: Locale,
    pub format: OutputFormat,
    pub translations: TranslationCatalog,
}

impl Context {
    pub fn t(&self, key: &str) -> String {
        self.translations.translate(self.locale, key)
    }
}
