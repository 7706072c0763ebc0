//! Theme preference
//!
//! Resolves the initial theme (stored preference, then system color scheme),
//! mirrors it as a class on the document root and persists toggles.

use std::sync::Arc;

use crate::config::ThemeConfig;
use crate::traits::{Document, PreferenceStore};
use crate::types::{ElementId, Theme};

/// Theme preference service
pub struct ThemeService {
    store: Arc<dyn PreferenceStore>,
    config: ThemeConfig,
    toggle: Option<ElementId>,
    current: Theme,
}

impl ThemeService {
    /// Reads the stored preference and applies it to the document root.
    ///
    /// Any stored value wins: `dark` is dark, anything else is light. Only an
    /// unset or unreadable preference falls back to the system color scheme.
    pub fn attach<D: Document>(doc: &mut D, store: Arc<dyn PreferenceStore>, config: &ThemeConfig) -> Self {
        let stored = match store.get(&config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read theme preference: {e}");
                None
            }
        };
        let current = match stored {
            Some(value) if value == Theme::Dark.as_str() => Theme::Dark,
            Some(_) => Theme::Light,
            None => Theme::from_system(doc.prefers_dark_color_scheme()),
        };

        let toggle = doc.element_by_id(&config.toggle_id);
        if toggle.is_none() {
            log::debug!("No #{}, theme toggle inert", config.toggle_id);
        }

        let service = Self {
            store,
            config: config.clone(),
            toggle,
            current,
        };
        service.apply(doc);
        service
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle_element(&self) -> Option<ElementId> {
        self.toggle
    }

    /// Whether a click on `target` hits the theme toggle
    pub fn is_toggle<D: Document>(&self, doc: &D, target: ElementId) -> bool {
        self.toggle.is_some_and(|toggle| doc.contains(toggle, target))
    }

    /// Flips the theme and persists it. Store failures are logged only.
    pub fn toggle<D: Document>(&mut self, doc: &mut D) -> Theme {
        let root = doc.root();
        let is_dark = doc.toggle_class(root, &self.config.dark_class);
        self.current = if is_dark { Theme::Dark } else { Theme::Light };
        if let Err(e) = self.store.set(&self.config.storage_key, self.current.as_str()) {
            log::warn!("Failed to persist theme preference: {e}");
        }
        log::debug!("Theme switched to {}", self.current);
        self.current
    }

    fn apply<D: Document>(&self, doc: &mut D) {
        let root = doc.root();
        if self.current.is_dark() {
            doc.add_class(root, &self.config.dark_class);
        } else {
            doc.remove_class(root, &self.config.dark_class);
        }
    }
}
