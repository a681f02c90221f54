//! Default layout shell.
//!
//! Produces the full page structure: navbar with brand and links,
//! sidebar, a `<main>` holding the content slot, and the layout-bottom
//! outlet. Head content is filled in by [`HeadInjector`].

use crate::config::SiteConfig;
use crate::dom::{Document, Element, Transform};
use crate::theme::{CONTENT, HeadInjector, LAYOUT_BOTTOM, LOGO_AFTER, Slots, Theme};

use super::nav;

/// The shipped layout shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn name(&self) -> &'static str {
        "default"
    }

    fn layout(&self, config: &SiteConfig, slots: &Slots) -> Document {
        let mut html = Element::new("html");
        html.push_elem(Element::new("head"));

        let mut body = Element::new("body");
        body.push_elem(navbar(config, slots));

        if !config.theme.sidebar.is_empty() {
            body.push_elem(nav::render_sidebar(&config.theme.sidebar));
        }

        let mut main = Element::new("main");
        for node in slots.nodes(CONTENT) {
            main.push(node.clone());
        }
        body.push_elem(main);

        for node in slots.nodes(LAYOUT_BOTTOM) {
            body.push(node.clone());
        }

        html.push_elem(body);

        HeadInjector::new(config).transform(Document::new(html))
    }
}

/// Navbar: brand link (logo + title), the logo-after outlet, then nav links.
fn navbar(config: &SiteConfig, slots: &Slots) -> Element {
    let mut header = Element::new("header");
    header.set_attr("class", "navbar");

    let mut brand = Element::new("a");
    brand.set_attr("class", "brand");
    brand.set_attr("href", "/");

    if let Some(logo) = &config.theme.logo {
        let mut img = Element::new("img");
        img.set_attr("class", "logo");
        img.set_attr("src", logo.to_string_lossy());
        img.set_attr("alt", &config.site.title);
        brand.push_elem(img);
    }

    if !config.site.title.is_empty() {
        let mut title = Element::new("span");
        title.set_attr("class", "site-title");
        title.push_text(&config.site.title);
        brand.push_elem(title);
    }

    for node in slots.nodes(LOGO_AFTER) {
        brand.push(node.clone());
    }

    header.push_elem(brand);

    if !config.theme.nav.is_empty() {
        header.push_elem(nav::render_nav(&config.theme.nav));
    }

    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::NavEntry;
    use crate::dom::Node;
    use std::path::PathBuf;

    fn antlia_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.title = "Antlia".to_string();
        config.site.description = "轻量级脚本项目部署工具".to_string();
        config.theme.logo = Some(PathBuf::from("/logo.png"));
        config.theme.nav = vec![
            NavEntry {
                text: "指南".into(),
                link: "/guide".into(),
            },
            NavEntry {
                text: "GitHub".into(),
                link: "https://github.com/zhende1113/Antlia".into(),
            },
        ];
        config
    }

    #[test]
    fn test_layout_shell() {
        let config = antlia_config();
        let doc = DefaultTheme.layout(&config, &Slots::default());

        assert_eq!(doc.root.tag, "html");
        assert!(doc.root.has_attr("lang"));

        let html = doc.to_html();
        assert!(html.contains("<title>Antlia</title>"));
        assert!(html.contains("class=\"navbar\""));
        assert!(html.contains("<a href=\"/guide\">指南</a>"));
    }

    #[test]
    fn test_brand_logo_from_config() {
        let config = antlia_config();
        let doc = DefaultTheme.layout(&config, &Slots::default());

        let logo = doc
            .root
            .elements()
            .find(|e| e.tag == "img")
            .expect("should have brand logo");
        assert_eq!(logo.get_attr("src"), Some("/logo.png"));
        assert_eq!(logo.get_attr("alt"), Some("Antlia"));
    }

    #[test]
    fn test_no_logo_configured() {
        let mut config = antlia_config();
        config.theme.logo = None;

        let doc = DefaultTheme.layout(&config, &Slots::default());
        assert_eq!(doc.root.elements().filter(|e| e.tag == "img").count(), 0);
    }

    #[test]
    fn test_content_slot_fills_main() {
        let config = antlia_config();

        let mut article = Element::new("article");
        article.push_text("hello");
        let mut slots = Slots::new();
        slots.fill(CONTENT, article);

        let doc = DefaultTheme.layout(&config, &slots);
        let main = doc
            .root
            .elements()
            .find(|e| e.tag == "main")
            .expect("should have main");
        assert_eq!(main.children.len(), 1);
        assert!(matches!(&main.children[0], Node::Element(e) if e.tag == "article"));
    }

    #[test]
    fn test_layout_bottom_outlet_at_body_end() {
        let config = antlia_config();

        let mut slots = Slots::new();
        slots.fill(LAYOUT_BOTTOM, Element::new("footer"));

        let doc = DefaultTheme.layout(&config, &slots);
        let body = doc
            .root
            .elements()
            .find(|e| e.tag == "body")
            .expect("should have body");
        assert!(matches!(
            body.children.last(),
            Some(Node::Element(e)) if e.tag == "footer"
        ));
    }
}
