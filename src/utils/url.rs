//! URL processing utilities.
//!
//! Provides consistent link handling across the codebase:
//! - Leading slash handling
//! - Link type detection (external vs internal)
//! - Fragment splitting and percent-decoding

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Strip leading slash from a URL path
///
/// # Examples
/// ```
/// use antdoc::utils::url::strip_leading_slash;
/// assert_eq!(strip_leading_slash("/guide"), "guide");
/// assert_eq!(strip_leading_slash("guide"), "guide");
/// assert_eq!(strip_leading_slash("/"), "");
/// ```
#[inline]
pub fn strip_leading_slash(url: &str) -> &str {
    url.trim_start_matches('/')
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```
/// use antdoc::utils::url::is_external_link;
/// assert!(is_external_link("https://github.com/zhende1113/Antlia"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/guide"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
///
/// # Examples
/// ```
/// use antdoc::utils::url::split_path_fragment;
/// assert_eq!(split_path_fragment("/guide#install"), ("/guide", "install"));
/// assert_eq!(split_path_fragment("/guide"), ("/guide", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Percent-decode a URL path, falling back to the input on invalid UTF-8
///
/// # Examples
/// ```
/// use antdoc::utils::url::percent_decode;
/// assert_eq!(percent_decode("/a%20b"), "/a b");
/// assert_eq!(percent_decode("/guide"), "/guide");
/// ```
#[inline]
pub fn percent_decode(url: &str) -> Cow<'_, str> {
    percent_decode_str(url)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/AstrBot/NapCat"), "AstrBot/NapCat");
        assert_eq!(strip_leading_slash("AstrBot/NapCat"), "AstrBot/NapCat");
        assert_eq!(strip_leading_slash("/"), "");
        assert_eq!(strip_leading_slash(""), "");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/guide"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/guide#team"), ("/guide", "team"));
        assert_eq!(split_path_fragment("/guide"), ("/guide", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("/a%20b"), "/a b");
        assert_eq!(percent_decode("/plain"), "/plain");
        // Multibyte sequences decode to UTF-8
        assert_eq!(
            percent_decode("/%E6%8C%87%E5%8D%97"),
            "/指南"
        );
    }
}
