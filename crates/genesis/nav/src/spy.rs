//! Scroll-spy visibility predicate

use crate::layout::DocumentLayout;
use crate::section::{SectionCatalog, SectionId};
use serde::{Deserialize, Serialize};

/// Default distance of the activation line below the viewport top, in px
pub const DEFAULT_ACTIVATION_OFFSET: f64 = 100.0;

/// Default scroll offset past which the scroll-to-top button is shown, in px
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Result of evaluating the spy against one layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpyReading {
    /// First section in catalog order that straddles the activation line
    pub matched: Option<SectionId>,
    pub show_scroll_top: bool,
    pub scroll_offset: f64,
}

/// Decides which section is "active" for a given scroll position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollSpy {
    pub activation_offset: f64,
    pub scroll_top_threshold: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            activation_offset: DEFAULT_ACTIVATION_OFFSET,
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
        }
    }
}

impl ScrollSpy {
    pub fn new(activation_offset: f64, scroll_top_threshold: f64) -> Self {
        Self {
            activation_offset,
            scroll_top_threshold,
        }
    }

    /// First section (in catalog order) whose rect spans the activation line
    ///
    /// Sections missing from the layout are skipped. The winner is not
    /// necessarily the most visible section.
    pub fn matching_section<L>(&self, catalog: &SectionCatalog, layout: &L) -> Option<SectionId>
    where
        L: DocumentLayout + ?Sized,
    {
        catalog
            .ids()
            .find(|id| {
                layout
                    .section_rect(id)
                    .is_some_and(|rect| rect.spans(self.activation_offset))
            })
            .cloned()
    }

    pub fn show_scroll_top(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.scroll_top_threshold
    }

    pub fn evaluate<L>(&self, catalog: &SectionCatalog, layout: &L) -> SpyReading
    where
        L: DocumentLayout + ?Sized,
    {
        let scroll_offset = layout.scroll_offset();
        SpyReading {
            matched: self.matching_section(catalog, layout),
            show_scroll_top: self.show_scroll_top(scroll_offset),
            scroll_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ScrollBehavior, StaticLayout};

    fn genesis_layout() -> (SectionCatalog, StaticLayout) {
        let catalog = SectionCatalog::genesis();
        let layout = StaticLayout::uniform(catalog.ids(), 900.0, 900.0, 1000.0);
        (catalog, layout)
    }

    #[test]
    fn hero_area_matches_nothing() {
        let (catalog, layout) = genesis_layout();
        let reading = ScrollSpy::default().evaluate(&catalog, &layout);
        assert_eq!(reading.matched, None);
        assert!(!reading.show_scroll_top);
    }

    #[test]
    fn section_under_activation_line_matches() {
        let (catalog, mut layout) = genesis_layout();
        // phase-1 occupies 1900..2900; line at scroll + 100
        layout.scroll_to(2000.0, ScrollBehavior::Instant);
        let reading = ScrollSpy::default().evaluate(&catalog, &layout);
        assert_eq!(reading.matched.as_ref().map(SectionId::as_str), Some("phase-1"));
        assert!(reading.show_scroll_top);
    }

    #[test]
    fn shared_edge_resolves_to_earlier_section() {
        let (catalog, mut layout) = genesis_layout();
        // phase-0 ends and phase-1 starts exactly on the activation line
        layout.scroll_to(1800.0, ScrollBehavior::Instant);
        let matched = ScrollSpy::default().matching_section(&catalog, &layout);
        assert_eq!(matched.as_ref().map(SectionId::as_str), Some("phase-0"));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let (catalog, mut layout) = genesis_layout();
        layout.remove(&SectionId::new("phase-1").unwrap());
        layout.scroll_to(2000.0, ScrollBehavior::Instant);
        assert_eq!(ScrollSpy::default().matching_section(&catalog, &layout), None);
    }

    #[test]
    fn scroll_top_threshold_is_strict() {
        let spy = ScrollSpy::default();
        assert!(!spy.show_scroll_top(300.0));
        assert!(spy.show_scroll_top(300.5));
    }
}
