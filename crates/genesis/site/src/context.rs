//! Explicitly passed site context (language + theme)

use crate::locale::Locale;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Language and theme currently in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteContext {
    pub locale: Locale,
    pub theme: Theme,
}

impl SiteContext {
    pub fn new(locale: Locale, theme: Theme) -> Self {
        Self { locale, theme }
    }
}

/// Owner of the [`SiteContext`]
///
/// Created once by the application shell and passed to the components that
/// read or change language and theme. Subscribers are notified on change.
#[derive(Debug)]
pub struct SiteStore {
    tx: watch::Sender<SiteContext>,
}

impl SiteStore {
    pub fn new(initial: SiteContext) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn context(&self) -> SiteContext {
        *self.tx.borrow()
    }

    pub fn locale(&self) -> Locale {
        self.context().locale
    }

    pub fn theme(&self) -> Theme {
        self.context().theme
    }

    pub fn subscribe(&self) -> watch::Receiver<SiteContext> {
        self.tx.subscribe()
    }

    /// Language switcher; returns whether anything changed
    pub fn change_language(&self, locale: Locale) -> bool {
        let changed = self.tx.send_if_modified(|ctx| {
            if ctx.locale == locale {
                return false;
            }
            ctx.locale = locale;
            true
        });
        if changed {
            tracing::debug!(%locale, "language changed");
        }
        changed
    }

    pub fn set_theme(&self, theme: Theme) -> bool {
        let changed = self.tx.send_if_modified(|ctx| {
            if ctx.theme == theme {
                return false;
            }
            ctx.theme = theme;
            true
        });
        if changed {
            tracing::debug!(%theme, "theme changed");
        }
        changed
    }

    /// Hub theme button; returns the new theme
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }
}

impl Default for SiteStore {
    fn default() -> Self {
        Self::new(SiteContext::default())
    }
}
