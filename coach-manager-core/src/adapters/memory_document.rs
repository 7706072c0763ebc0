//! In-memory document
//!
//! An arena of nodes addressed by `ElementId`. Removed nodes stay in the
//! arena (handles never dangle) but are unreachable from the root, and
//! `Document` operations ignore them. The inherent builder methods
//! (`set_attribute`, `set_text`, `set_value`, `append_child`) also work on
//! detached nodes so subtrees can be filled in before they are attached.

use std::collections::BTreeMap;

use crate::traits::Document;
use crate::types::{ElementId, Viewport};

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    value: Option<String>,
    style: BTreeMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// Arena-backed implementation of `Document`
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    root: ElementId,
    body: ElementId,
    viewport: Viewport,
    prefers_dark: bool,
    alerts: Vec<String>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(Viewport::new(1280, 800))
    }
}

impl MemoryDocument {
    /// Creates `<html><body></body></html>`
    pub fn new(viewport: Viewport) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: ElementId(0),
            body: ElementId(0),
            viewport,
            prefers_dark: false,
            alerts: Vec::new(),
        };
        doc.root = doc.create_element("html");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.body);
        doc
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Creates a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        });
        id
    }

    /// Moves `child` under `parent` (last position)
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent.index() >= self.nodes.len() || child.index() >= self.nodes.len() {
            return;
        }
        // refuse cycles
        if self.contains(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Creates an element with attributes and text and appends it to `parent`
    pub fn append_element(
        &mut self,
        parent: ElementId,
        tag: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> ElementId {
        let el = self.create_element(tag);
        for (name, value) in attributes {
            self.set_attribute(el, name, value);
        }
        self.set_text(el, text);
        self.append_child(parent, el);
        el
    }

    /// Sets an attribute; `class` replaces the class list
    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(element.index()) else {
            return;
        };
        if name == "class" {
            node.classes = value.split_whitespace().map(ToString::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// Sets the element's own text (children keep theirs)
    pub fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(node) = self.nodes.get_mut(element.index()) {
            node.text = text.to_string();
        }
    }

    pub fn set_value(&mut self, element: ElementId, value: &str) {
        if let Some(node) = self.nodes.get_mut(element.index()) {
            node.value = Some(value.to_string());
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_prefers_dark(&mut self, prefers_dark: bool) {
        self.prefers_dark = prefers_dark;
    }

    /// Alerts shown so far, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Element's own text, without descendants
    pub fn own_text(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(element.index()).map(|n| n.text.as_str())
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(element.index())
            .map_or(&[][..], |n| n.children.as_slice())
    }

    fn detach(&mut self, element: ElementId) {
        if let Some(parent) = self.nodes[element.index()].parent.take() {
            self.nodes[parent.index()].children.retain(|c| *c != element);
        }
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.index())
    }

    fn attached(&self, element: ElementId) -> Option<&Node> {
        self.node(element).filter(|_| self.is_attached(element))
    }

    fn attached_mut(&mut self, element: ElementId) -> Option<&mut Node> {
        if !self.is_attached(element) {
            return None;
        }
        self.nodes.get_mut(element.index())
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> ElementId {
        self.root
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.all_elements()
            .into_iter()
            .find(|el| self.attribute(*el, "id").as_deref() == Some(id))
    }

    fn all_elements(&self) -> Vec<ElementId> {
        let mut all = vec![self.root];
        all.extend(self.descendants(self.root));
        all
    }

    fn descendants(&self, element: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let Some(node) = self.attached(element) else {
            return out;
        };
        let mut stack: Vec<ElementId> = node.children.iter().rev().copied().collect();
        while let Some(el) = stack.pop() {
            out.push(el);
            stack.extend(self.nodes[el.index()].children.iter().rev().copied());
        }
        out
    }

    fn tag_name(&self, element: ElementId) -> Option<String> {
        self.attached(element).map(|n| n.tag.clone())
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        let node = self.attached(element)?;
        if name == "class" {
            return Some(node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn text_content(&self, element: ElementId) -> String {
        let Some(node) = self.attached(element) else {
            return String::new();
        };
        let mut text = node.text.clone();
        for el in self.descendants(element) {
            text.push_str(&self.nodes[el.index()].text);
        }
        text
    }

    fn value(&self, element: ElementId) -> Option<String> {
        self.attached(element).and_then(|n| n.value.clone())
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(el) = current {
            if el == ancestor {
                return true;
            }
            current = self.node(el).and_then(|n| n.parent);
        }
        false
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.node(element).is_some() && self.contains(self.root, element)
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.attached(element)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.attached_mut(element) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.attached_mut(element) {
            node.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(node) = self.attached_mut(element) {
            node.style.insert(property.to_string(), value.to_string());
        }
    }

    fn style(&self, element: ElementId, property: &str) -> Option<String> {
        self.attached(element).and_then(|n| n.style.get(property).cloned())
    }

    fn remove(&mut self, element: ElementId) -> bool {
        if element == self.root || !self.is_attached(element) {
            return false;
        }
        self.detach(element);
        true
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn prefers_dark_color_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
