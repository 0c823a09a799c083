//! Owned, mutable element tree.
//!
//! Blocks are decorated in place on this tree. Nodes are addressed by
//! child-index paths relative to the element a query started from, so every
//! edit (`replace`, `unwrap`) is an explicit operation on an
//! owned parent instead of a live handle.
//!
//! # Modules
//!
//! - `parse`: HTML text → tree (via `tl`)
//! - `render`: tree → HTML text (escaping via `html-escape`)
//! - `style`: inline `style` attribute declarations

mod parse;
mod render;
mod style;

use smallvec::SmallVec;

pub use parse::{Document, parse_document};
pub use render::{inner_html, outer_html};

#[cfg(test)]
pub use parse::parse_fragment;
#[cfg(test)]
pub use render::render_nodes;

/// Child-index path from a root element to one of its descendants.
pub type Path = Vec<usize>;

/// Tags rendered without a closing tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Tags whose text content is neither entity-decoded nor escaped.
pub const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

// =============================================================================
// Nodes
// =============================================================================

/// A tree node: either an element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(String),
}

impl Node {
    pub fn element(elem: Element) -> Self {
        Self::Element(Box::new(elem))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::element(elem)
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// Ordered attribute list. Setting an existing name replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(SmallVec<[(String, String); 4]>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k == name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name.to_string(), value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.0.iter().position(|(k, _)| k == name)?;
        Some(self.0.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.set(&k.into(), v);
        }
        attrs
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Attrs {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

// =============================================================================
// Element
// =============================================================================

/// An element with a lower-case tag name, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attrs,
    pub children: SmallVec<[Node; 4]>,
}

/// Content handed to [`create_tag`].
#[derive(Debug, Clone)]
pub enum Content {
    Text(String),
    Nodes(Vec<Node>),
}

/// Build an element from a tag name, attributes and optional content.
pub fn create_tag(tag: &str, attrs: Attrs, content: Option<Content>) -> Element {
    let mut elem = Element::with_attrs(tag, attrs);
    match content {
        Some(Content::Text(text)) => elem.push_text(text),
        Some(Content::Nodes(nodes)) => elem.children.extend(nodes),
        None => {}
    }
    elem
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self::with_attrs(tag, Attrs::new())
    }

    pub fn with_attrs(tag: &str, attrs: Attrs) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs,
            children: SmallVec::new(),
        }
    }

    /// Check the tag name.
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// `h1` through `h6`.
    pub fn is_heading(&self) -> bool {
        matches!(self.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.set(name, value);
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    // -------------------------------------------------------------------------
    // class list
    // -------------------------------------------------------------------------

    /// Class names in attribute order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes().any(|c| c == name)
    }

    /// Append a class unless already present.
    pub fn add_class(&mut self, name: &str) {
        if name.is_empty() || self.has_class(name) {
            return;
        }
        let value = match self.get_attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {name}", existing.trim()),
            _ => name.to_string(),
        };
        self.set_attr("class", value);
    }

    pub fn add_classes(&mut self, names: &[&str]) {
        for name in names {
            self.add_class(name);
        }
    }

    // -------------------------------------------------------------------------
    // children
    // -------------------------------------------------------------------------

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    pub fn prepend(&mut self, node: impl Into<Node>) {
        self.children.insert(0, node.into());
    }

    /// Direct element children with their index in `children`.
    pub fn child_elements(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_element().map(|e| (i, e)))
    }

    #[cfg(test)]
    pub fn child_element_count(&self) -> usize {
        self.child_elements().count()
    }

    /// Element child at `index` in `children`.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index).and_then(Node::as_element_mut)
    }

    /// Indices of direct `div` children (the authored rows of a block).
    pub fn rows(&self) -> Vec<usize> {
        self.child_elements()
            .filter(|(_, e)| e.is("div"))
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove and return all children.
    pub fn take_children(&mut self) -> Vec<Node> {
        self.children.drain(..).collect()
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    // -------------------------------------------------------------------------
    // paths
    // -------------------------------------------------------------------------

    /// Resolve a path to a descendant (empty path is `self`).
    pub fn get(&self, path: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &i in path {
            current = current.children.get(i)?.as_element()?;
        }
        Some(current)
    }

    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut current = self;
        for &i in path {
            current = current.children.get_mut(i)?.as_element_mut()?;
        }
        Some(current)
    }

    /// Replace the node at `path`, returning the original.
    pub fn replace(&mut self, path: &[usize], node: impl Into<Node>) -> Option<Node> {
        let (&last, parent) = path.split_last()?;
        let slot = self.get_mut(parent)?.children.get_mut(last)?;
        Some(std::mem::replace(slot, node.into()))
    }

    /// Replace the element at `path` with its own children.
    pub fn unwrap(&mut self, path: &[usize]) -> bool {
        let Some((&last, parent)) = path.split_last() else {
            return false;
        };
        let Some(parent) = self.get_mut(parent) else {
            return false;
        };
        if !matches!(parent.children.get(last), Some(Node::Element(_))) {
            return false;
        }
        if let Node::Element(mut inner) = parent.children.remove(last) {
            parent.children.insert_many(last, inner.take_children());
        }
        true
    }

    // -------------------------------------------------------------------------
    // queries
    // -------------------------------------------------------------------------

    /// First descendant in document order matching `pred`.
    pub fn find_first(&self, pred: impl Fn(&Element) -> bool) -> Option<Path> {
        let mut path = Vec::new();
        self.find_first_inner(&pred, &mut path).then_some(path)
    }

    fn find_first_inner(&self, pred: &impl Fn(&Element) -> bool, path: &mut Path) -> bool {
        for (i, child) in self.child_elements() {
            path.push(i);
            if pred(child) || child.find_first_inner(pred, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    /// All descendants in document order matching `pred`, given each
    /// candidate and its parent.
    pub fn find_all_with_parent(&self, pred: impl Fn(&Element, &Element) -> bool) -> Vec<Path> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        self.find_all_inner(&pred, &mut path, &mut found);
        found
    }

    /// All descendants in document order matching `pred`.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<Path> {
        self.find_all_with_parent(|elem, _| pred(elem))
    }

    fn find_all_inner(
        &self,
        pred: &impl Fn(&Element, &Element) -> bool,
        path: &mut Path,
        found: &mut Vec<Path>,
    ) {
        for (i, child) in self.child_elements() {
            path.push(i);
            if pred(child, self) {
                found.push(path.clone());
            }
            child.find_all_inner(pred, path, found);
            path.pop();
        }
    }

    /// Apply `f` to every descendant matching `pred`.
    pub fn for_each_match(&mut self, pred: &impl Fn(&Element) -> bool, f: &mut impl FnMut(&mut Element)) {
        for child in &mut self.children {
            if let Node::Element(elem) = child {
                if pred(elem) {
                    f(elem);
                }
                elem.for_each_match(pred, f);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
