//! Standard page skeleton
//!
//! Mirrors the layout the server templates render:
//!
//! ```text
//! body
//! ├── header   (theme toggle, menu toggle)
//! ├── overlay  (hidden)
//! ├── aside    (panel with nav links)
//! └── main     (flash messages, forms, search inputs)
//! ```

use crate::adapters::MemoryDocument;
use crate::config::ControllerConfig;
use crate::traits::Document;
use crate::types::{ElementId, Viewport};

/// Handles to the elements a built page contains
#[derive(Debug, Clone, Default)]
pub struct PageElements {
    pub header: Option<ElementId>,
    pub theme_toggle: Option<ElementId>,
    pub menu_toggle: Option<ElementId>,
    pub overlay: Option<ElementId>,
    pub panel: Option<ElementId>,
    pub main: Option<ElementId>,
    pub nav_links: Vec<ElementId>,
    pub flash_messages: Vec<ElementId>,
    pub forms: Vec<ElementId>,
    /// Form fields, in the order they were added
    pub fields: Vec<ElementId>,
    pub search_inputs: Vec<ElementId>,
}

/// Fluent builder over a `MemoryDocument`
pub struct PageBuilder {
    doc: MemoryDocument,
    elements: PageElements,
}

impl PageBuilder {
    /// Builds the skeleton using the element ids and classes from `config`
    pub fn new(config: &ControllerConfig, viewport: Viewport) -> Self {
        let mut doc = MemoryDocument::new(viewport);
        let body = doc.body();
        let nav = &config.navigation;

        let header = doc.append_element(body, "header", &[], "");
        let theme_toggle =
            doc.append_element(header, "button", &[("id", config.theme.toggle_id.as_str())], "");
        let menu_toggle = doc.append_element(header, "button", &[("id", nav.toggle_id.as_str())], "");
        // icon inside the toggle, so clicks can land on a descendant
        doc.append_element(menu_toggle, "span", &[("class", "icon")], "☰");

        let overlay = doc.append_element(
            body,
            "div",
            &[
                ("id", nav.overlay_id.as_str()),
                ("class", nav.overlay_hidden_class.as_str()),
            ],
            "",
        );
        let panel = doc.append_element(body, "aside", &[("id", nav.panel_id.as_str())], "");
        let main = doc.append_element(body, "main", &[], "");

        Self {
            doc,
            elements: PageElements {
                header: Some(header),
                theme_toggle: Some(theme_toggle),
                menu_toggle: Some(menu_toggle),
                overlay: Some(overlay),
                panel: Some(panel),
                main: Some(main),
                ..PageElements::default()
            },
        }
    }

    /// Drops the overlay (panel-only pages)
    #[must_use]
    pub fn without_overlay(mut self) -> Self {
        if let Some(overlay) = self.elements.overlay.take() {
            self.doc.remove(overlay);
        }
        self
    }

    /// Drops the panel
    #[must_use]
    pub fn without_panel(mut self) -> Self {
        if let Some(panel) = self.elements.panel.take() {
            self.doc.remove(panel);
        }
        self.elements.nav_links.clear();
        self
    }

    /// Drops the theme toggle button
    #[must_use]
    pub fn without_theme_toggle(mut self) -> Self {
        if let Some(toggle) = self.elements.theme_toggle.take() {
            self.doc.remove(toggle);
        }
        self
    }

    /// Adds an `<a>` inside the panel
    #[must_use]
    pub fn nav_link(mut self, label: &str, href: &str) -> Self {
        if let Some(panel) = self.elements.panel {
            let link = self.doc.append_element(panel, "a", &[("href", href)], label);
            self.elements.nav_links.push(link);
        }
        self
    }

    /// Adds a plain flash message
    #[must_use]
    pub fn flash(mut self, class: &str, text: &str) -> Self {
        let msg = self.append_flash(class, text);
        self.elements.flash_messages.push(msg);
        self
    }

    /// Adds a flash message containing a button (requires user attention)
    #[must_use]
    pub fn flash_with_button(mut self, class: &str, text: &str, button_label: &str) -> Self {
        let msg = self.append_flash(class, text);
        self.doc.append_element(msg, "button", &[], button_label);
        self.elements.flash_messages.push(msg);
        self
    }

    /// Adds a flash message containing a styled call-to-action link
    #[must_use]
    pub fn flash_with_styled_link(mut self, class: &str, text: &str, link_class: &str) -> Self {
        let msg = self.append_flash(class, text);
        self.doc
            .append_element(msg, "a", &[("href", "#"), ("class", link_class)], "Open");
        self.elements.flash_messages.push(msg);
        self
    }

    /// Adds a `<form>` with `(name, required, value)` text inputs
    #[must_use]
    pub fn form(mut self, fields: &[(&str, bool, &str)]) -> Self {
        let Some(main) = self.elements.main else {
            return self;
        };
        let form = self.doc.append_element(main, "form", &[("method", "post")], "");
        for (name, required, value) in fields {
            let input = self
                .doc
                .append_element(form, "input", &[("type", "text"), ("name", name)], "");
            if *required {
                self.doc.set_attribute(input, "required", "");
            }
            self.doc.set_value(input, value);
            self.elements.fields.push(input);
        }
        self.elements.forms.push(form);
        self
    }

    /// Adds a search text input
    #[must_use]
    pub fn search_input(mut self, name: &str) -> Self {
        if let Some(main) = self.elements.main {
            let input = self
                .doc
                .append_element(main, "input", &[("type", "text"), ("name", name)], "");
            self.doc.set_value(input, "");
            self.elements.search_inputs.push(input);
        }
        self
    }

    pub fn build(self) -> (MemoryDocument, PageElements) {
        (self.doc, self.elements)
    }

    fn append_flash(&mut self, class: &str, text: &str) -> ElementId {
        let parent = self.elements.main.unwrap_or_else(|| self.doc.body());
        self.doc
            .append_element(parent, "div", &[("class", class), ("role", "alert")], text)
    }
}
