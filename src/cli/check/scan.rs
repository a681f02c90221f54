//! Markdown scanning for the check command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pulldown_cmark::{Event, Parser, Tag};

use crate::link::LinkKind;

/// A link extracted from a document or from the configuration
#[derive(Debug, Clone)]
pub struct ScannedLink {
    /// Link destination.
    pub dest: String,
    /// Source attribute ("href" for links, "src" for images/assets).
    pub attr: String,
}

impl ScannedLink {
    pub fn href(dest: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            attr: "href".to_string(),
        }
    }

    pub fn src(dest: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            attr: "src".to_string(),
        }
    }

    /// Classify this link.
    #[inline]
    pub fn kind(&self) -> LinkKind<'_> {
        LinkKind::parse(&self.dest)
    }

    /// Check if this link references an asset rather than a page.
    #[inline]
    pub fn is_asset_attr(&self) -> bool {
        self.attr == "src"
    }
}

/// Result of scanning a single document
pub struct ScanResult {
    /// Source file path (relative to root).
    pub source: String,
    /// All links found in the document.
    pub links: Vec<ScannedLink>,
}

/// Scan a Markdown document for links and images
pub fn scan_markdown(file: &Path, root: &Path) -> Result<ScanResult> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;

    let source = file
        .strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .to_string();

    Ok(ScanResult {
        source,
        links: extract_links(&content),
    })
}

/// Extract link and image destinations from Markdown content
pub fn extract_links(content: &str) -> Vec<ScannedLink> {
    let mut links = Vec::new();

    for event in Parser::new(content) {
        let Event::Start(tag) = event else { continue };

        match tag {
            Tag::Link { dest_url, .. } if !dest_url.is_empty() => {
                links.push(ScannedLink::href(dest_url.as_ref()));
            }
            Tag::Image { dest_url, .. } if !dest_url.is_empty() => {
                links.push(ScannedLink::src(dest_url.as_ref()));
            }
            _ => {}
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links_and_images() {
        let content = "\
# NapCat

安装说明见 [指南](/guide) 和 [AstrBot](/AstrBot/AstrBot-install)。

![logo](/logo.png)

External: [GitHub](https://github.com/zhende1113/Antlia)
";
        let links = extract_links(content);

        assert_eq!(links.len(), 4);
        assert_eq!(links[0].dest, "/guide");
        assert_eq!(links[0].attr, "href");
        assert_eq!(links[2].dest, "/logo.png");
        assert!(links[2].is_asset_attr());
        assert!(matches!(links[3].kind(), LinkKind::External(_)));
    }

    #[test]
    fn test_extract_skips_empty_destinations() {
        let links = extract_links("[empty]() and [anchor](#section)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].dest, "#section");
        assert!(matches!(links[0].kind(), LinkKind::Fragment("section")));
    }

    #[test]
    fn test_extract_relative_links() {
        let links = extract_links("see [install](./AstrBot-install.md) or [up](../guide.md)");
        assert_eq!(links.len(), 2);
        assert!(matches!(links[0].kind(), LinkKind::FileRelative(_)));
        assert!(matches!(links[1].kind(), LinkKind::FileRelative(_)));
    }

    #[test]
    fn test_scan_markdown_source_is_root_relative() {
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir_all(&docs).unwrap();
        let file = docs.join("guide.md");
        std::fs::write(&file, "# 指南\n\n[home](/)\n").unwrap();

        let result = scan_markdown(&file, dir.path()).unwrap();
        assert_eq!(result.source, "docs/guide.md");
        assert_eq!(result.links.len(), 1);
        assert_eq!(result.links[0].dest, "/");
    }
}
