//! Head content injector.
//!
//! Populates `<head>` from the site configuration: title element,
//! description meta, then every `[[site.head]]` entry in authored order.
//! Also sets the `lang` attribute on the `<html>` root if not present.

use crate::config::SiteConfig;
use crate::dom::{Document, Element, Node, Transform};

/// Injects site metadata into a layout's `<head>`.
pub struct HeadInjector<'a> {
    config: &'a SiteConfig,
}

impl<'a> HeadInjector<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Recursively find and populate the `<head>` element.
    fn inject_head(&self, element: &mut Element) {
        if element.tag == "head" {
            self.populate_head(element);
            return;
        }

        for child in &mut element.children {
            if let Node::Element(elem) = child {
                self.inject_head(elem);
            }
        }
    }

    /// Populate `<head>` with site configuration content.
    fn populate_head(&self, head: &mut Element) {
        let site = &self.config.site;

        // Title
        if !site.title.is_empty() {
            let mut title = Element::new("title");
            title.push_text(&site.title);
            head.push_elem(title);
        }

        // Description meta
        if !site.description.is_empty() {
            let mut meta = Element::new("meta");
            meta.set_attr("name", "description");
            meta.set_attr("content", &site.description);
            head.push_elem(meta);
        }

        // Authored head entries, attribute order preserved
        for entry in &site.head {
            let mut elem = Element::new(&entry.tag);
            for (name, value) in entry.string_attrs() {
                elem.set_attr(name, value);
            }
            head.push_elem(elem);
        }
    }
}

impl Transform for HeadInjector<'_> {
    fn transform(self, mut doc: Document) -> Document {
        if doc.root.tag == "html" && !doc.root.has_attr("lang") {
            doc.root.set_attr("lang", &self.config.site.language);
        }

        self.inject_head(&mut doc.root);
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::HeadEntry;

    fn make_html_doc() -> Document {
        let mut html = Element::new("html");
        html.push_elem(Element::new("head"));
        html.push_elem(Element::new("body"));
        Document::new(html)
    }

    fn find_head(doc: &Document) -> &Element {
        doc.root
            .children
            .iter()
            .find_map(|n| match n {
                Node::Element(e) if e.tag == "head" => Some(e.as_ref()),
                _ => None,
            })
            .expect("should have head")
    }

    fn head_entry(tag: &str, attrs: &[(&str, &str)]) -> HeadEntry {
        let mut table = toml::Table::new();
        for (name, value) in attrs {
            table.insert((*name).to_string(), toml::Value::from(*value));
        }
        HeadEntry {
            tag: tag.to_string(),
            attrs: table,
        }
    }

    #[test]
    fn test_inject_title_and_description() {
        let mut config = SiteConfig::default();
        config.site.title = "Antlia".to_string();
        config.site.description = "轻量级脚本项目部署工具".to_string();

        let doc = HeadInjector::new(&config).transform(make_html_doc());
        let head = find_head(&doc);

        let title = head
            .children
            .iter()
            .find_map(|n| match n {
                Node::Element(e) if e.tag == "title" => Some(e.as_ref()),
                _ => None,
            })
            .expect("should have title element");
        assert_eq!(title.children, vec![Node::Text("Antlia".into())]);

        let meta = head
            .children
            .iter()
            .find_map(|n| match n {
                Node::Element(e) if e.tag == "meta" => Some(e.as_ref()),
                _ => None,
            })
            .expect("should have description meta");
        assert_eq!(meta.get_attr("content"), Some("轻量级脚本项目部署工具"));
    }

    #[test]
    fn test_head_entries_keep_authored_order() {
        let mut config = SiteConfig::default();
        config.site.head = vec![
            head_entry(
                "link",
                &[("rel", "icon"), ("href", "/favicon.ico"), ("type", "image/x-icon")],
            ),
            head_entry(
                "link",
                &[("rel", "apple-touch-icon"), ("sizes", "180x180"), ("href", "/logo.png")],
            ),
            head_entry("meta", &[("name", "theme-color"), ("content", "#3eaf7c")]),
        ];

        let doc = HeadInjector::new(&config).transform(make_html_doc());
        let head = find_head(&doc);

        let tags: Vec<_> = head.elements().skip(1).map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["link", "link", "meta"]);

        // Attribute order within an entry is authored order
        let first = head.elements().nth(1).unwrap();
        let names: Vec<_> = first.attrs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["rel", "href", "type"]);
    }

    #[test]
    fn test_lang_attribute_set() {
        let mut config = SiteConfig::default();
        config.site.language = "zh-Hans".to_string();

        let doc = HeadInjector::new(&config).transform(make_html_doc());
        assert_eq!(doc.root.get_attr("lang"), Some("zh-Hans"));
    }

    #[test]
    fn test_lang_attribute_not_overwritten() {
        let mut config = SiteConfig::default();
        config.site.language = "zh-Hans".to_string();

        let mut doc = make_html_doc();
        doc.root.set_attr("lang", "en");

        let doc = HeadInjector::new(&config).transform(doc);
        assert_eq!(doc.root.get_attr("lang"), Some("en"));
    }

    #[test]
    fn test_empty_title_not_injected() {
        let config = SiteConfig::default();
        let doc = HeadInjector::new(&config).transform(make_html_doc());
        let head = find_head(&doc);
        assert!(head.children.is_empty());
    }
}
