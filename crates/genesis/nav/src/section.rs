//! Section identifiers and the ordered section catalog

use crate::error::{NavError, NavResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Identifier of a scroll-addressable region of the page (the DOM element id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section id, rejecting blank or whitespace-containing values
    pub fn new(id: impl Into<String>) -> NavResult<Self> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(NavError::InvalidSectionId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment form used in links (`#phase-0`)
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A navigable section with the data the side panel needs to render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Key under `nav.` in the translation catalog
    pub nav_key: String,
    pub icon: String,
}

impl Section {
    pub fn new(id: SectionId, nav_key: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            nav_key: nav_key.into(),
            icon: icon.into(),
        }
    }

    /// Translation key of the navigation label (`nav.iskra`)
    pub fn label_key(&self) -> String {
        format!("nav.{}", self.nav_key)
    }
}

/// Ordered, non-empty, duplicate-free list of sections
///
/// Order matters: the scroll spy breaks ties by catalog position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCatalog {
    sections: Arc<[Section]>,
}

/// The seven sections of the AI Genesis page, top to bottom
const GENESIS_SECTIONS: [(&str, &str, &str); 7] = [
    ("phase-0", "iskra", "💡"),
    ("phase-1", "fundamenty", "🏗️"),
    ("phase-2", "innowacja", "🎨"),
    ("phase-3", "development", "⚙️"),
    ("phase-4", "zasieg", "🌍"),
    ("phase-5", "final", "🚀"),
    ("contact", "contact", "✉️"),
];

impl SectionCatalog {
    pub fn new(sections: Vec<Section>) -> NavResult<Self> {
        if sections.is_empty() {
            return Err(NavError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(NavError::DuplicateSection(section.id.to_string()));
            }
        }

        Ok(Self {
            sections: sections.into(),
        })
    }

    /// Build a catalog from bare ids; nav keys default to the id, no icon
    pub fn from_ids<I, S>(ids: I) -> NavResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = ids
            .into_iter()
            .map(|id| {
                let id = SectionId::new(id)?;
                let key = id.to_string();
                Ok(Section::new(id, key, ""))
            })
            .collect::<NavResult<Vec<_>>>()?;
        Self::new(sections)
    }

    /// The canonical catalog of the site
    pub fn genesis() -> Self {
        let sections = GENESIS_SECTIONS
            .iter()
            .map(|(id, key, icon)| Section::new(SectionId(id.to_string()), *key, *icon))
            .collect::<Vec<_>>();
        Self {
            sections: sections.into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|s| &s.id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn first(&self) -> &Section {
        // Non-empty by construction
        &self.sections[0]
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    /// Look up the section whose nav key matches (`iskra` -> `phase-0`)
    pub fn by_nav_key(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.nav_key == key)
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::genesis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_catalog_has_seven_sections_in_page_order() {
        let catalog = SectionCatalog::genesis();
        let ids: Vec<&str> = catalog.ids().map(SectionId::as_str).collect();
        assert_eq!(
            ids,
            vec!["phase-0", "phase-1", "phase-2", "phase-3", "phase-4", "phase-5", "contact"]
        );
        assert_eq!(catalog.first().id.as_str(), "phase-0");
    }

    #[test]
    fn nav_key_lookup_and_label_key() {
        let catalog = SectionCatalog::genesis();
        let iskra = catalog.by_nav_key("iskra").unwrap();
        assert_eq!(iskra.id.anchor(), "#phase-0");
        assert_eq!(iskra.label_key(), "nav.iskra");
    }

    #[test]
    fn rejects_empty_and_duplicate_catalogs() {
        assert_eq!(SectionCatalog::new(vec![]), Err(NavError::EmptyCatalog));
        assert_eq!(
            SectionCatalog::from_ids(["a", "b", "a"]),
            Err(NavError::DuplicateSection("a".into()))
        );
    }

    #[test]
    fn rejects_blank_ids() {
        assert!(SectionId::new("").is_err());
        assert!(SectionId::new("phase 0").is_err());
        assert!(SectionId::new("phase-0").is_ok());
    }

    #[test]
    fn section_id_serializes_as_plain_string() {
        let id = SectionId::new("contact").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"contact\"");
    }
}
