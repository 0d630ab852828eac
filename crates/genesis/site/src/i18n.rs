//! Translation catalog with dotted-key lookup

use crate::error::{SiteError, SiteResult};
use crate::locale::Locale;
use serde_json::Value;
use std::collections::HashMap;

const BUNDLED_PL: &str = include_str!("../resources/pl.json");
const BUNDLED_EN: &str = include_str!("../resources/en.json");
const BUNDLED_JA: &str = include_str!("../resources/ja.json");

/// Nested translation resources, one tree per locale
///
/// Keys are dotted paths into the tree (`contact.projectTypes.website`).
/// Lookup falls back to [`Locale::FALLBACK`], then to the key itself.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    resources: HashMap<Locale, Value>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the resources shipped in this crate
    pub fn bundled() -> SiteResult<Self> {
        let mut catalog = Self::new();
        catalog.load(Locale::Pl, BUNDLED_PL)?;
        catalog.load(Locale::En, BUNDLED_EN)?;
        catalog.load(Locale::Ja, BUNDLED_JA)?;
        Ok(catalog)
    }

    /// Add or replace the resource tree of one locale
    pub fn load(&mut self, locale: Locale, json: &str) -> SiteResult<()> {
        let value: Value = serde_json::from_str(json).map_err(|source| SiteError::Resource {
            locale: locale.to_string(),
            source,
        })?;
        if !value.is_object() {
            return Err(SiteError::ResourceShape(locale.to_string()));
        }
        self.resources.insert(locale, value);
        Ok(())
    }

    /// Exact lookup in one locale, no fallback
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        let mut node = self.resources.get(&locale)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }

    /// Lookup with fallback locale; returns the key when nothing matches
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        if let Some(text) = self.get(locale, key) {
            return text.to_string();
        }
        if let Some(text) = self.get(Locale::FALLBACK, key) {
            tracing::trace!(%locale, key, "translation missing, using fallback locale");
            return text.to_string();
        }
        tracing::debug!(%locale, key, "translation missing");
        key.to_string()
    }

    pub fn has_key(&self, locale: Locale, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    /// Every leaf key of one locale, sorted
    pub fn keys(&self, locale: Locale) -> Vec<String> {
        fn walk(prefix: &str, node: &Value, out: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    for (k, v) in map {
                        let path = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{}.{}", prefix, k)
                        };
                        walk(&path, v, out);
                    }
                }
                Value::String(_) => out.push(prefix.to_string()),
                _ => {}
            }
        }

        let mut keys = Vec::new();
        if let Some(root) = self.resources.get(&locale) {
            walk("", root, &mut keys);
        }
        keys.sort();
        keys
    }
}
