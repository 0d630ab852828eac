//! Navigation core for the AI Genesis single-page site
//!
//! The page is a fixed, ordered list of scroll-addressable sections. This
//! crate keeps a single "active section" indicator in sync with the scroll
//! position and performs programmatic navigation on demand.
//!
//! # Key Concepts
//!
//! - **SectionCatalog**: the ordered, duplicate-free list of sections.
//! - **DocumentLayout**: whatever answers "where is section X relative to the
//!   viewport" (a browser DOM, or [`StaticLayout`] in tests and simulators).
//! - **ScrollSpy**: the visibility predicate. The first section in catalog
//!   order whose rectangle straddles the activation line wins.
//! - **NavigationController**: owns [`NavigationState`], throttles scroll
//!   events and publishes [`NavigationSnapshot`]s to subscribers.

#![deny(unsafe_code)]

mod controller;
mod error;
mod layout;
mod section;
mod spy;
mod throttle;

pub use controller::*;
pub use error::*;
pub use layout::*;
pub use section::*;
pub use spy::*;
pub use throttle::*;
