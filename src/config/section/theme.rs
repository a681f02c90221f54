//! `[theme]` section configuration.
//!
//! Logo, top navigation, and sidebar groups.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/logo.png"
//!
//! [[theme.nav]]
//! text = "指南"
//! link = "/guide"
//!
//! [[theme.sidebar]]
//! text = "Bot项目相关"
//! items = [
//!     { text = "AstrBot", link = "/AstrBot/AstrBot-install" },
//!     { text = "NapCat", link = "/AstrBot/NapCat" },
//! ]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::utils::url::is_external_link;

/// Theme settings: logo, navigation, sidebar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Navbar logo as a site-root asset path (e.g., "/logo.png").
    pub logo: Option<PathBuf>,

    /// Top navigation entries, authored as `[[theme.nav]]` tables.
    #[config(hidden)]
    pub nav: Vec<NavEntry>,

    /// Sidebar groups, authored as `[[theme.sidebar]]` tables.
    #[config(hidden)]
    pub sidebar: Vec<SidebarGroup>,
}

impl ThemeSectionConfig {
    /// Validate theme settings.
    ///
    /// # Checks
    /// - `logo` must not be empty; site-root paths are expected
    /// - nav entries must have non-empty text and link
    /// - sidebar groups must have non-empty text, items need text and link
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo {
            let logo_str = logo.to_string_lossy();
            if logo_str.is_empty() {
                diag.error(Self::FIELDS.logo, "must not be empty");
            } else if !logo_str.starts_with('/') && !is_external_link(&logo_str) {
                diag.warn(
                    Self::FIELDS.logo,
                    format!("'{}' is not a site-root path like \"/logo.png\"", logo_str),
                );
            }
        }

        for (index, entry) in self.nav.iter().enumerate() {
            if entry.text.trim().is_empty() {
                diag.error(
                    Self::FIELDS.nav,
                    format!("entry {}: text must not be empty", index + 1),
                );
            }
            if entry.link.trim().is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.nav,
                    format!("entry {}: link must not be empty", index + 1),
                    "set a route like \"/guide\" or an external URL",
                );
            }
        }

        for (group_index, group) in self.sidebar.iter().enumerate() {
            group.validate(group_index, diag);
        }
    }
}

// ============================================================================
// Navigation entries
// ============================================================================

/// A label-link pair in the top navigation bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavEntry {
    pub text: String,
    pub link: String,
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SidebarGroup {
    pub text: String,
    pub items: Vec<SidebarItem>,
}

impl SidebarGroup {
    fn validate(&self, group_index: usize, diag: &mut ConfigDiagnostics) {
        let field = ThemeSectionConfig::FIELDS.sidebar;

        if self.text.trim().is_empty() {
            diag.error(
                field,
                format!("group {}: text must not be empty", group_index + 1),
            );
        }

        if self.items.is_empty() {
            diag.warn(
                field,
                format!("group {} ('{}') has no items", group_index + 1, self.text),
            );
        }

        for (item_index, item) in self.items.iter().enumerate() {
            if item.text.trim().is_empty() {
                diag.error(
                    field,
                    format!(
                        "group {}, item {}: text must not be empty",
                        group_index + 1,
                        item_index + 1
                    ),
                );
            }
            if item.link.trim().is_empty() {
                diag.error(
                    field,
                    format!(
                        "group {}, item {}: link must not be empty",
                        group_index + 1,
                        item_index + 1
                    ),
                );
            }
        }
    }
}

/// A label-link pair inside a sidebar group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

// ============================================================================
// Tests
// ============================================================================
