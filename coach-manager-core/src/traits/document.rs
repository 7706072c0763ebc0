//! Host document abstraction

use crate::types::{ElementId, Viewport};

/// Document-like interface the controllers operate on.
///
/// All operations are local state edits on the single UI thread. Operations
/// on unknown or detached handles are no-ops and reads on them return
/// empty/`false`/`None`. `contains` is structural and still answers inside a
/// detached subtree; `remove` reports `false` for handles already detached.
///
/// Platform implementations:
/// - `MemoryDocument` (tests, terminal host)
pub trait Document {
    /// Document root (`<html>`)
    fn root(&self) -> ElementId;

    /// Lookup by `id` attribute (attached elements only)
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// All attached elements, in document order
    fn all_elements(&self) -> Vec<ElementId>;

    /// Descendants of `element` (excluding itself), in document order
    fn descendants(&self, element: ElementId) -> Vec<ElementId>;

    /// Lowercase tag name
    fn tag_name(&self, element: ElementId) -> Option<String>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Concatenated text of the element and its descendants
    fn text_content(&self, element: ElementId) -> String;

    /// Current value of a form control
    fn value(&self, element: ElementId) -> Option<String>;

    /// Inclusive containment: `contains(a, a)` is `true`
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;

    fn is_attached(&self, element: ElementId) -> bool;

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    fn add_class(&mut self, element: ElementId, class: &str);

    fn remove_class(&mut self, element: ElementId, class: &str);

    /// Toggles `class`, returning whether it is present afterwards
    fn toggle_class(&mut self, element: ElementId, class: &str) -> bool {
        if self.has_class(element, class) {
            self.remove_class(element, class);
        } else {
            self.add_class(element, class);
        }
        self.has_class(element, class)
    }

    /// Sets an inline style property
    fn set_style(&mut self, element: ElementId, property: &str, value: &str);

    fn style(&self, element: ElementId, property: &str) -> Option<String>;

    /// Detaches `element` from the document.
    ///
    /// # Returns
    /// * `true` - the element was attached and is now removed
    /// * `false` - already detached (no-op)
    fn remove(&mut self, element: ElementId) -> bool;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// System-reported `prefers-color-scheme: dark`
    fn prefers_dark_color_scheme(&self) -> bool;

    /// Blocking modal alert
    fn alert(&mut self, message: &str);

    /// Selector-style query over attached elements
    fn query_all(&self, predicate: &dyn Fn(&Self, ElementId) -> bool) -> Vec<ElementId>
    where
        Self: Sized,
    {
        self.all_elements()
            .into_iter()
            .filter(|el| predicate(self, *el))
            .collect()
    }
}
