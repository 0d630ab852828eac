//! Navigation controller: owns navigation state and reacts to UI events

use crate::error::{NavError, NavResult};
use crate::layout::{DocumentLayout, ScrollBehavior};
use crate::section::{SectionCatalog, SectionId};
use crate::spy::{ScrollSpy, SpyReading};
use crate::throttle::Throttle;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tokio::sync::watch;

/// Which navigation surface is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Collapsible side panel, expands on hover
    #[default]
    Desktop,
    /// Toggle-button menu replacing the side panel
    Mobile,
}

/// Mutable navigation state of one page instance
///
/// `active` is always a member of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    catalog: SectionCatalog,
    active: SectionId,
    expanded: bool,
    mobile_menu_open: bool,
    show_scroll_top: bool,
    mode: LayoutMode,
}

impl NavigationState {
    /// Fresh state: first section active, panel collapsed, menu closed
    pub fn new(catalog: SectionCatalog) -> Self {
        let active = catalog.first().id.clone();
        Self {
            catalog,
            active,
            expanded: false,
            mobile_menu_open: false,
            show_scroll_top: false,
            mode: LayoutMode::Desktop,
        }
    }

    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    pub fn active(&self) -> &SectionId {
        &self.active
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Make `id` the active section. Returns whether the active section changed.
    pub fn set_active(&mut self, id: &SectionId) -> NavResult<bool> {
        if !self.catalog.contains(id) {
            return Err(NavError::UnknownSection(id.to_string()));
        }
        if &self.active == id {
            return Ok(false);
        }
        self.active = id.clone();
        Ok(true)
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            active_section: self.active.clone(),
            is_expanded: self.expanded,
            is_mobile_menu_open: self.mobile_menu_open,
            show_scroll_top: self.show_scroll_top,
            layout: self.mode,
        }
    }
}

/// Read-only view of the navigation state handed to subscribed views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub active_section: SectionId,
    pub is_expanded: bool,
    pub is_mobile_menu_open: bool,
    pub show_scroll_top: bool,
    pub layout: LayoutMode,
}

/// What happened to a scroll event
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollOutcome {
    /// The spy ran against the current layout
    Evaluated(SpyReading),
    /// Dropped by the throttle; will be picked up by [`NavigationController::flush`]
    Deferred,
}

/// What happened to a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    Navigated,
    /// Target not in the document (or not a known section); nothing changed
    Ignored,
}

/// Scroll-spy navigation controller
///
/// A single scroll listener feeds [`on_scroll`](Self::on_scroll); derived
/// state is published to every subscriber through a `watch` channel, which
/// only notifies when the snapshot actually changed.
pub struct NavigationController<L> {
    state: NavigationState,
    layout: L,
    spy: ScrollSpy,
    throttle: Throttle,
    behavior: ScrollBehavior,
    tx: watch::Sender<NavigationSnapshot>,
}

impl<L: DocumentLayout> NavigationController<L> {
    pub fn new(catalog: SectionCatalog, layout: L) -> Self {
        let state = NavigationState::new(catalog);
        let (tx, _) = watch::channel(state.snapshot());
        Self {
            state,
            layout,
            spy: ScrollSpy::default(),
            throttle: Throttle::default(),
            behavior: ScrollBehavior::Smooth,
            tx,
        }
    }

    pub fn with_spy(mut self, spy: ScrollSpy) -> Self {
        self.spy = spy;
        self
    }

    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_section(&self) -> &SectionId {
        self.state.active()
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Mutable access for the host to move the viewport (user scrolling)
    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.state.snapshot()
    }

    /// Subscribe a view to navigation snapshots
    pub fn subscribe(&self) -> watch::Receiver<NavigationSnapshot> {
        self.tx.subscribe()
    }

    /// Scroll event handler, rate-limited by the controller's throttle
    pub fn on_scroll(&mut self, now: Instant) -> ScrollOutcome {
        if self.throttle.hit(now) {
            ScrollOutcome::Evaluated(self.refresh())
        } else {
            tracing::trace!("scroll event deferred by throttle");
            ScrollOutcome::Deferred
        }
    }

    /// Evaluate a scroll event the throttle dropped, once it is due
    pub fn flush(&mut self, now: Instant) -> Option<SpyReading> {
        if self.throttle.take_pending(now) {
            Some(self.refresh())
        } else {
            None
        }
    }

    /// Run the spy immediately, bypassing the throttle
    pub fn refresh(&mut self) -> SpyReading {
        let reading = self.spy.evaluate(self.state.catalog(), &self.layout);

        if let Some(matched) = &reading.matched {
            // matched comes from the catalog, so set_active cannot fail
            if let Ok(true) = self.state.set_active(matched) {
                tracing::debug!(section = %matched, offset = reading.scroll_offset, "active section changed");
            }
        }
        self.state.show_scroll_top = reading.show_scroll_top;

        self.publish();
        reading
    }

    /// Smooth-scroll to a section and make it active
    ///
    /// Unknown or unmounted targets are ignored silently.
    pub fn navigate_to(&mut self, id: &str) -> NavigateOutcome {
        let Some(section) = self.state.catalog().get(id).map(|s| s.id.clone()) else {
            tracing::debug!(section = id, "navigation to unknown section ignored");
            return NavigateOutcome::Ignored;
        };

        if !self.layout.scroll_into_view(&section, self.behavior) {
            tracing::debug!(section = %section, "navigation target not mounted, ignored");
            return NavigateOutcome::Ignored;
        }

        if let Ok(true) = self.state.set_active(&section) {
            tracing::debug!(section = %section, "active section changed by navigation");
        }
        self.state.mobile_menu_open = false;
        self.state.show_scroll_top = self.spy.show_scroll_top(self.layout.scroll_offset());

        self.publish();
        NavigateOutcome::Navigated
    }

    /// Pointer enter (`true`) / leave (`false`) on the desktop panel
    pub fn toggle_expanded(&mut self, expanded: bool) {
        if self.state.mode == LayoutMode::Mobile {
            return;
        }
        self.state.expanded = expanded;
        self.publish();
    }

    /// Mobile menu button; ignored on desktop
    pub fn toggle_mobile_menu(&mut self) -> bool {
        if self.state.mode == LayoutMode::Mobile {
            self.state.mobile_menu_open = !self.state.mobile_menu_open;
            self.publish();
        }
        self.state.mobile_menu_open
    }

    /// Switch between the desktop panel and the mobile menu
    ///
    /// The flag owned by the surface being hidden is cleared.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.state.mode == mode {
            return;
        }
        self.state.mode = mode;
        match mode {
            LayoutMode::Desktop => self.state.mobile_menu_open = false,
            LayoutMode::Mobile => self.state.expanded = false,
        }
        tracing::debug!(?mode, "navigation layout changed");
        self.publish();
    }

    /// Scroll-to-top button
    pub fn scroll_to_top(&mut self) -> SpyReading {
        self.layout.scroll_to(0.0, self.behavior);
        self.refresh()
    }

    fn publish(&self) {
        let next = self.state.snapshot();
        self.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
