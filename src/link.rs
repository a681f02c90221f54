//! Link classification utilities.

use crate::utils::url::is_external_link;

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/guide, /AstrBot/NapCat).
    SiteRoot(&'a str),
    /// File-relative path (./image.png, ../other).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = link.strip_prefix("./#") {
            // ./#fragment is semantically equivalent to #fragment (current page anchor)
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://github.com/zhende1113/Antlia"),
            LinkKind::External("https://github.com/zhende1113/Antlia")
        ));
        assert!(matches!(
            LinkKind::parse("mailto:user@example.com"),
            LinkKind::External("mailto:user@example.com")
        ));
        assert!(matches!(
            LinkKind::parse("tel:+1234567890"),
            LinkKind::External("tel:+1234567890")
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(
            LinkKind::parse("#section"),
            LinkKind::Fragment("section")
        ));
        // Empty fragment
        assert!(matches!(LinkKind::parse("#"), LinkKind::Fragment("")));

        // ./#fragment is equivalent to #fragment
        assert!(matches!(
            LinkKind::parse("./#install"),
            LinkKind::Fragment("install")
        ));
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            LinkKind::parse("/guide"),
            LinkKind::SiteRoot("/guide")
        ));
        assert!(matches!(
            LinkKind::parse("/AstrBot/NapCat"),
            LinkKind::SiteRoot("/AstrBot/NapCat")
        ));
        // With fragment
        assert!(matches!(
            LinkKind::parse("/guide#install"),
            LinkKind::SiteRoot("/guide#install")
        ));
    }

    #[test]
    fn test_parse_file_relative() {
        assert!(matches!(
            LinkKind::parse("./image.png"),
            LinkKind::FileRelative("./image.png")
        ));
        assert!(matches!(
            LinkKind::parse("../other"),
            LinkKind::FileRelative("../other")
        ));
        assert!(matches!(
            LinkKind::parse("NapCat.md"),
            LinkKind::FileRelative("NapCat.md")
        ));
    }
}
