//! Owned page model and element visibility helpers
//!
//! The SistemaPerito pages are represented as an owned element tree rather
//! than ambient browser globals, so every helper takes the document it
//! mutates explicitly and tests can assert on the resulting tree. Elements
//! are addressed two ways: by their page `id` attribute (the convention the
//! markup uses) and by an internal node handle (used by services that created
//! the element and must remove it later, such as the notification presenter).

use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use crate::constants::{CLASS_FADE_IN, CLASS_HIDDEN};

/// Internal handle identifying a single node in a [`Document`]
pub type NodeId = Uuid;

/// How a viewport scroll is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// The viewport position recorded by the last scroll request: the target
/// element's top edge is aligned with the viewport's top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    pub node_id: NodeId,
    pub behavior: ScrollBehavior,
}

/// A single element node: tag, optional page id, class set, attributes,
/// text content, and children
#[derive(Debug, Clone)]
pub struct Element {
    node_id: NodeId,
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(tag: &str) -> Self {
        Self {
            node_id: Uuid::new_v4(),
            tag: tag.to_string(),
            id: None,
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with the given tag name and page id
    pub fn with_id(tag: &str, id: &str) -> Self {
        let mut element = Self::new(tag);
        element.id = Some(id.to_string());
        element
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add a single class; re-adding an existing class is a no-op
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Add every whitespace-separated class in `classes`
    pub fn add_classes(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
    }

    /// Remove a class; removing an absent class is a no-op
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// An owned page: the body's element tree plus the recorded viewport scroll
#[derive(Debug, Default)]
pub struct Document {
    body: Vec<Element>,
    scroll: Option<ScrollTarget>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level elements of the body, in insertion order
    pub fn body(&self) -> &[Element] {
        &self.body
    }

    /// Append an element to the body, returning its node handle
    pub fn append_to_body(&mut self, element: Element) -> NodeId {
        let node_id = element.node_id;
        self.body.push(element);
        node_id
    }

    /// Remove the node (and its subtree) with the given handle.
    /// Returns false if no such node exists.
    pub fn remove_node(&mut self, node_id: NodeId) -> bool {
        remove_node_from(&mut self.body, node_id)
    }

    /// Find an element anywhere in the tree by its page id
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        find_by_id(&self.body, id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_by_id_mut(&mut self.body, id)
    }

    /// Find an element anywhere in the tree by its node handle
    pub fn node(&self, node_id: NodeId) -> Option<&Element> {
        find_by_node_id(&self.body, node_id)
    }

    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        find_by_node_id_mut(&mut self.body, node_id)
    }

    /// Visit every element in the tree, parents before children
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        walk_mut(&mut self.body, f);
    }

    /// The viewport position recorded by the last scroll request
    pub fn scroll_target(&self) -> Option<ScrollTarget> {
        self.scroll
    }

    /// Scroll the viewport so the node's top edge aligns with the viewport top
    pub fn scroll_to_node(&mut self, node_id: NodeId, behavior: ScrollBehavior) {
        self.scroll = Some(ScrollTarget { node_id, behavior });
    }
}

/// Show or hide the element with the given page id
///
/// Showing removes the `hidden` class and adds the fade-in animation class;
/// hiding does the inverse. Reapplying the current state is a no-op, and a
/// missing id is silently ignored.
pub fn toggle_element(document: &mut Document, id: &str, show: bool) {
    let Some(element) = document.element_by_id_mut(id) else {
        return;
    };

    if show {
        element.remove_class(CLASS_HIDDEN);
        element.add_class(CLASS_FADE_IN);
    } else {
        element.add_class(CLASS_HIDDEN);
        element.remove_class(CLASS_FADE_IN);
    }
}

/// Smoothly scroll the viewport to the element with the given page id
///
/// A missing id is silently ignored.
pub fn scroll_to_element(document: &mut Document, id: &str) {
    let node_id = match document.element_by_id(id) {
        Some(element) => element.node_id(),
        None => return,
    };
    document.scroll_to_node(node_id, ScrollBehavior::Smooth);
}

fn find_by_id<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
    for element in elements {
        if element.id.as_deref() == Some(id) {
            return Some(element);
        }
        if let Some(found) = find_by_id(&element.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_by_id_mut<'a>(elements: &'a mut [Element], id: &str) -> Option<&'a mut Element> {
    for element in elements.iter_mut() {
        if element.id.as_deref() == Some(id) {
            return Some(element);
        }
        if let Some(found) = find_by_id_mut(&mut element.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_by_node_id(elements: &[Element], node_id: NodeId) -> Option<&Element> {
    for element in elements {
        if element.node_id == node_id {
            return Some(element);
        }
        if let Some(found) = find_by_node_id(&element.children, node_id) {
            return Some(found);
        }
    }
    None
}

fn find_by_node_id_mut(elements: &mut [Element], node_id: NodeId) -> Option<&mut Element> {
    for element in elements.iter_mut() {
        if element.node_id == node_id {
            return Some(element);
        }
        if let Some(found) = find_by_node_id_mut(&mut element.children, node_id) {
            return Some(found);
        }
    }
    None
}

fn remove_node_from(elements: &mut Vec<Element>, node_id: NodeId) -> bool {
    if let Some(index) = elements.iter().position(|e| e.node_id == node_id) {
        elements.remove(index);
        return true;
    }
    elements
        .iter_mut()
        .any(|element| remove_node_from(&mut element.children, node_id))
}

fn walk_mut(elements: &mut [Element], f: &mut impl FnMut(&mut Element)) {
    for element in elements.iter_mut() {
        f(element);
        walk_mut(&mut element.children, f);
    }
}
