//! Element tree for theme layouts.
//!
//! Themes produce a [`Document`] of nested [`Element`]s instead of writing
//! HTML strings directly. Attribute and child order is insertion order,
//! which keeps authored `[[site.head]]` entries stable through rendering.
//!
//! # Example
//!
//! ```
//! use antdoc::dom::{Document, Element};
//!
//! let mut img = Element::new("img");
//! img.set_attr("src", "/logo.png");
//! img.set_attr("alt", "Antlia Logo");
//!
//! let mut body = Element::new("body");
//! body.push_elem(img);
//! let doc = Document::new(body);
//! assert_eq!(doc.root.elements().filter(|e| e.tag == "img").count(), 1);
//! ```

mod render;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Box<Element>),
    /// Text content, HTML-escaped on render.
    Text(String),
    /// Raw markup, rendered verbatim (trusted input).
    Raw(String),
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing the value in place if the name exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            attr.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn push_elem(&mut self, elem: Element) {
        self.children.push(Node::Element(Box::new(elem)));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn push_raw(&mut self, raw: impl Into<String>) {
        self.children.push(Node::Raw(raw.into()));
    }

    /// Depth-first iterator over this element and all descendant elements.
    pub fn elements(&self) -> Elements<'_> {
        Elements { stack: vec![self] }
    }

    /// Render this element (and its subtree) to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        render::element(self, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

/// Depth-first element iterator (document order).
pub struct Elements<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse so iteration visits them in order
        for child in elem.children.iter().rev() {
            if let Node::Element(e) = child {
                self.stack.push(e);
            }
        }
        Some(elem)
    }
}

/// A complete layout document with a single root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Render to a full HTML string with doctype.
    pub fn to_html(&self) -> String {
        render::document(self)
    }
}

/// A document rewrite step.
///
/// Transforms consume the document and return the rewritten version,
/// so they can be chained without intermediate clones.
pub trait Transform {
    fn transform(self, doc: Document) -> Document;
}

// ============================================================================
// Tests
// ============================================================================
