//! Site-level state and demos of AI Genesis
//!
//! Language and theme live in an explicit [`SiteStore`] that is created with
//! defaults and handed to whatever needs it; nothing here is global.
//!
//! - [`TranslationCatalog`]: bundled pl/en/ja resources with dotted-key
//!   lookup and fallback.
//! - [`TranslationDemo`]: the translation-key lookup tool.
//! - [`Workshop`]: the simulated bug/fix gallery.
//! - [`ControlHub`]: view model of the collapsible side navigation.

#![deny(unsafe_code)]

mod context;
mod error;
mod hub;
mod i18n;
mod locale;
mod theme;
mod translation_demo;
mod workshop;

pub use context::*;
pub use error::*;
pub use hub::*;
pub use i18n::*;
pub use locale::*;
pub use theme::*;
pub use translation_demo::*;
pub use workshop::*;
