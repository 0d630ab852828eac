//! View model of the collapsible side navigation ("control hub")

use crate::context::SiteContext;
use crate::i18n::TranslationCatalog;
use crate::locale::Locale;
use genesis_nav::{NavigationSnapshot, SectionCatalog};
use serde::Serialize;

/// One navigation button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubEntry {
    pub section_id: String,
    pub icon: String,
    pub label: String,
    pub test_id: String,
    pub active: bool,
}

/// One option of the language switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

/// Everything the hub renders, derived from navigation and site state
pub struct ControlHub<'a> {
    sections: &'a SectionCatalog,
    translations: &'a TranslationCatalog,
    context: SiteContext,
    nav: &'a NavigationSnapshot,
}

impl<'a> ControlHub<'a> {
    pub fn new(
        sections: &'a SectionCatalog,
        translations: &'a TranslationCatalog,
        context: SiteContext,
        nav: &'a NavigationSnapshot,
    ) -> Self {
        Self {
            sections,
            translations,
            context,
            nav,
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.nav.is_expanded {
            "control-hub-expanded"
        } else {
            "control-hub-collapsed"
        }
    }

    /// Labels are visible only while the panel is expanded; collapsed
    /// entries show the label as a tooltip instead
    pub fn labels_visible(&self) -> bool {
        self.nav.is_expanded
    }

    pub fn entries(&self) -> Vec<HubEntry> {
        self.sections
            .iter()
            .map(|section| HubEntry {
                section_id: section.id.to_string(),
                icon: section.icon.clone(),
                label: self
                    .translations
                    .translate(self.context.locale, &section.label_key()),
                test_id: format!("nav-{}", section.nav_key),
                active: section.id == self.nav.active_section,
            })
            .collect()
    }

    pub fn language_options(&self) -> Vec<LanguageOption> {
        Locale::ALL
            .into_iter()
            .map(|locale| LanguageOption {
                code: locale.code(),
                name: locale.native_name(),
                selected: locale == self.context.locale,
            })
            .collect()
    }

    /// Label of the theme button: offers the opposite of the current theme
    pub fn theme_button_label(&self) -> String {
        let key = if self.context.theme.is_dark() {
            "hub.lightMode"
        } else {
            "hub.darkMode"
        };
        self.translations.translate(self.context.locale, key)
    }

    pub fn theme_icon(&self) -> &'static str {
        if self.context.theme.is_dark() {
            "🌙"
        } else {
            "☀️"
        }
    }
}
