//! HTML rendering for the element tree.
//!
//! Text nodes are escaped, attribute values are attribute-escaped, and
//! empty attribute values render as bare names (`defer`, not `defer=""`).

use super::{Document, Element, Node};
use crate::utils::html::{escape, escape_attr, is_void_element};

/// Render a document to a full HTML page string.
pub fn document(doc: &Document) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("<!DOCTYPE html>\n");
    element(&doc.root, &mut out);
    out.push('\n');
    out
}

/// Render a single element and its subtree.
pub fn element(elem: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);

    for (name, value) in &elem.attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
    }
    out.push('>');

    // Void elements have no children and no closing tag
    if is_void_element(&elem.tag) {
        return;
    }

    for child in &elem.children {
        match child {
            Node::Element(e) => element(e, out),
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Raw(r) => out.push_str(r),
        }
    }

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use crate::dom::{Document, Element};

    #[test]
    fn test_render_simple_element() {
        let mut elem = Element::new("p");
        elem.push_text("hello");
        assert_eq!(elem.to_html(), "<p>hello</p>");
    }

    #[test]
    fn test_render_attrs_in_order() {
        let mut img = Element::new("img");
        img.set_attr("src", "/logo.png");
        img.set_attr("alt", "Antlia Logo");
        img.set_attr(
            "style",
            "width:40px;height:40px;border-radius:50%;object-fit:cover;",
        );
        assert_eq!(
            img.to_html(),
            "<img src=\"/logo.png\" alt=\"Antlia Logo\" \
             style=\"width:40px;height:40px;border-radius:50%;object-fit:cover;\">"
        );
    }

    #[test]
    fn test_render_escapes_text() {
        let mut elem = Element::new("span");
        elem.push_text("a < b & c");
        assert_eq!(elem.to_html(), "<span>a &lt; b &amp; c</span>");
    }

    #[test]
    fn test_render_escapes_attr_value() {
        let mut meta = Element::new("meta");
        meta.set_attr("content", "a \"quoted\" value");
        assert_eq!(
            meta.to_html(),
            "<meta content=\"a &quot;quoted&quot; value\">"
        );
    }

    #[test]
    fn test_render_void_element_no_closing_tag() {
        let mut link = Element::new("link");
        link.set_attr("rel", "icon");
        link.set_attr("href", "/favicon.ico");
        assert_eq!(link.to_html(), "<link rel=\"icon\" href=\"/favicon.ico\">");
    }

    #[test]
    fn test_render_bare_attr_for_empty_value() {
        let mut script = Element::new("script");
        script.set_attr("src", "/app.js");
        script.set_attr("defer", "");
        assert_eq!(
            script.to_html(),
            "<script src=\"/app.js\" defer></script>"
        );
    }

    #[test]
    fn test_render_raw_markup_unescaped() {
        let mut head = Element::new("head");
        head.push_raw("<meta name=\"darkreader-lock\">");
        assert_eq!(
            head.to_html(),
            "<head><meta name=\"darkreader-lock\"></head>"
        );
    }

    #[test]
    fn test_render_document_has_doctype() {
        let doc = Document::new(Element::new("html"));
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<html></html>"));
    }
}
