//! `[site]` section configuration.
//!
//! Contains site metadata and the ordered `<head>` entries.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Antlia"
//! description = "轻量级脚本项目部署工具"
//! language = "zh-Hans"
//!
//! [[site.head]]
//! tag = "link"
//! attrs = { rel = "icon", href = "/favicon.ico", type = "image/x-icon" }
//!
//! [[site.head]]
//! tag = "meta"
//! attrs = { name = "theme-color", content = "#3eaf7c" }
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site metadata rendered into every layout.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title, shown in the navbar brand and browser tab.
    #[config(inline_doc)]
    pub title: String,

    /// Site description, injected as a description meta tag.
    #[config(inline_doc)]
    pub description: String,

    /// Language code for the html lang attribute (e.g., "en", "zh-Hans").
    #[config(default = "en", inline_doc)]
    pub language: String,

    /// Extra head entries, authored as `[[site.head]]` tables.
    #[config(hidden)]
    pub head: Vec<HeadEntry>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".into(),
            head: Vec::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - every head entry must be well-formed (see [`HeadEntry::validate`])
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "must not be empty",
                "set a site title, e.g.: \"Antlia\"",
            );
        }

        for (index, entry) in self.head.iter().enumerate() {
            entry.validate(index, diag);
        }
    }
}

// ============================================================================
// Head Entry
// ============================================================================

/// One `<head>` element described as a tag name plus attributes.
///
/// Attribute order is authored order and is preserved through rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeadEntry {
    /// Element name (link, meta, script, ...).
    pub tag: String,
    /// Attributes in authored order. Values must be strings.
    pub attrs: toml::Table,
}

impl Default for HeadEntry {
    fn default() -> Self {
        Self {
            tag: String::new(),
            attrs: toml::Table::new(),
        }
    }
}

impl HeadEntry {
    /// Iterate attributes with string values, in authored order.
    pub fn string_attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|v| (name.as_str(), v)))
    }

    /// Validate one entry, reporting problems under `site.head`.
    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let field = SiteSectionConfig::FIELDS.head;

        if !is_valid_tag_name(&self.tag) {
            diag.error_with_hint(
                field,
                format!("entry {}: invalid tag '{}'", index + 1, self.tag),
                "use an element name like \"link\" or \"meta\"",
            );
        }

        for (name, value) in &self.attrs {
            if !is_valid_attr_name(name) {
                diag.error(
                    field,
                    format!("entry {}: invalid attribute name '{}'", index + 1, name),
                );
            }
            if !value.is_str() {
                diag.error_with_hint(
                    field,
                    format!(
                        "entry {}: attribute '{}' must be a string, got {}",
                        index + 1,
                        name,
                        value.type_str()
                    ),
                    "quote the value, e.g.: content = \"#3eaf7c\"",
                );
            }
        }
    }
}

/// Element names: ASCII letter first, then letters and digits.
fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Attribute names: letters, digits and `-` `_` `:` separators.
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

// ============================================================================
// Tests
// ============================================================================
