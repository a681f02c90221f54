//! Navigation and sidebar rendering.

use crate::config::section::{NavEntry, SidebarGroup};
use crate::dom::Element;

/// Render top navigation entries as a `<nav>` link list.
pub fn render_nav(entries: &[NavEntry]) -> Element {
    let mut nav = Element::new("nav");
    nav.set_attr("class", "nav-links");

    let mut list = Element::new("ul");
    for entry in entries {
        let mut item = Element::new("li");
        let mut link = Element::new("a");
        link.set_attr("href", &entry.link);
        link.push_text(&entry.text);
        item.push_elem(link);
        list.push_elem(item);
    }
    nav.push_elem(list);

    nav
}

/// Render sidebar groups as an `<aside>` of titled link lists.
pub fn render_sidebar(groups: &[SidebarGroup]) -> Element {
    let mut aside = Element::new("aside");
    aside.set_attr("class", "sidebar");

    for group in groups {
        let mut section = Element::new("section");
        section.set_attr("class", "sidebar-group");

        let mut heading = Element::new("p");
        heading.set_attr("class", "sidebar-heading");
        heading.push_text(&group.text);
        section.push_elem(heading);

        let mut list = Element::new("ul");
        for item in &group.items {
            let mut li = Element::new("li");
            let mut link = Element::new("a");
            link.set_attr("href", &item.link);
            link.push_text(&item.text);
            li.push_elem(link);
            list.push_elem(li);
        }
        section.push_elem(list);

        aside.push_elem(section);
    }

    aside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::SidebarItem;

    #[test]
    fn test_render_nav_keeps_order() {
        let entries = vec![
            NavEntry {
                text: "指南".into(),
                link: "/guide".into(),
            },
            NavEntry {
                text: "GitHub".into(),
                link: "https://github.com/zhende1113/Antlia".into(),
            },
        ];

        let nav = render_nav(&entries);
        let links: Vec<_> = nav
            .elements()
            .filter(|e| e.tag == "a")
            .map(|e| e.get_attr("href").unwrap_or_default().to_string())
            .collect();

        assert_eq!(links, vec!["/guide", "https://github.com/zhende1113/Antlia"]);
    }

    #[test]
    fn test_render_sidebar_groups_and_items() {
        let groups = vec![
            SidebarGroup {
                text: "Bot项目相关".into(),
                items: vec![
                    SidebarItem {
                        text: "AstrBot".into(),
                        link: "/AstrBot/AstrBot-install".into(),
                    },
                    SidebarItem {
                        text: "NapCat".into(),
                        link: "/AstrBot/NapCat".into(),
                    },
                ],
            },
            SidebarGroup {
                text: "其他功能".into(),
                items: vec![SidebarItem {
                    text: "项目脚本状态".into(),
                    link: "/guide".into(),
                }],
            },
        ];

        let aside = render_sidebar(&groups);

        assert_eq!(
            aside.elements().filter(|e| e.tag == "section").count(),
            2
        );

        let html = aside.to_html();
        assert!(html.contains("Bot项目相关"));
        assert!(html.contains("<a href=\"/guide\">项目脚本状态</a>"));
    }
}
