//! Document layout abstraction consumed by the scroll spy

use crate::section::SectionId;
use serde::{Deserialize, Serialize};

/// Vertical extent of a section, in pixels relative to the viewport top
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Does the rectangle straddle a horizontal line `line` px below the viewport top?
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// How a programmatic scroll should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The page as seen by the navigation controller
///
/// Sections may be missing (not yet mounted); every query tolerates that.
pub trait DocumentLayout {
    /// Bounding rectangle of a section, or `None` if it is not in the document
    fn section_rect(&self, id: &SectionId) -> Option<SectionRect>;

    /// Current vertical scroll offset of the viewport
    fn scroll_offset(&self) -> f64;

    /// Scroll a section into view. Returns `false` if the section is absent.
    fn scroll_into_view(&mut self, id: &SectionId, behavior: ScrollBehavior) -> bool;

    /// Scroll to an absolute vertical offset; non-finite offsets are ignored
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
}

#[derive(Debug, Clone, PartialEq)]
struct PlacedSection {
    id: SectionId,
    offset: f64,
    height: f64,
}

/// In-memory layout: sections stacked top to bottom with fixed heights
///
/// Used by tests and by the terminal scroll simulator. Scrolling is clamped
/// to the scrollable range of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLayout {
    sections: Vec<PlacedSection>,
    viewport_height: f64,
    document_height: f64,
    scroll_y: f64,
    last_behavior: Option<ScrollBehavior>,
}

impl StaticLayout {
    /// Create an empty document with a `header` px tall block above the first section
    pub fn new(viewport_height: f64, header: f64) -> Self {
        Self {
            sections: Vec::new(),
            viewport_height,
            document_height: header.max(0.0),
            scroll_y: 0.0,
            last_behavior: None,
        }
    }

    /// Append a section below the current end of the document
    pub fn push(mut self, id: SectionId, height: f64) -> Self {
        let height = height.max(0.0);
        self.sections.push(PlacedSection {
            id,
            offset: self.document_height,
            height,
        });
        self.document_height += height;
        self
    }

    /// Stack every id with the same height
    pub fn uniform<'a>(
        ids: impl IntoIterator<Item = &'a SectionId>,
        viewport_height: f64,
        header: f64,
        height: f64,
    ) -> Self {
        ids.into_iter().fold(Self::new(viewport_height, header), |layout, id| {
            layout.push(id.clone(), height)
        })
    }

    /// Unmount a section; the space it occupied stays in the document
    pub fn remove(&mut self, id: &SectionId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| &s.id != id);
        before != self.sections.len()
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Absolute document offset of a section's top edge
    pub fn section_offset(&self, id: &SectionId) -> Option<f64> {
        self.find(id).map(|s| s.offset)
    }

    /// Behavior of the most recent programmatic scroll
    pub fn last_behavior(&self) -> Option<ScrollBehavior> {
        self.last_behavior
    }

    fn find(&self, id: &SectionId) -> Option<&PlacedSection> {
        self.sections.iter().find(|s| &s.id == id)
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll())
    }
}

impl DocumentLayout for StaticLayout {
    fn section_rect(&self, id: &SectionId) -> Option<SectionRect> {
        self.find(id).map(|s| {
            let top = s.offset - self.scroll_y;
            SectionRect::new(top, top + s.height)
        })
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_into_view(&mut self, id: &SectionId, behavior: ScrollBehavior) -> bool {
        match self.section_offset(id) {
            Some(offset) => {
                self.scroll_to(offset, behavior);
                true
            }
            None => false,
        }
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        if !offset.is_finite() {
            return;
        }
        self.scroll_y = self.clamp(offset);
        self.last_behavior = Some(behavior);
    }
}
