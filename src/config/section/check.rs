//! `[check]` section configuration.
//!
//! Configuration for the `antdoc check` command.
//!
//! # Example
//!
//! ```toml
//! [check.pages]
//! enable = true    # Check nav, sidebar and document links
//! level = "error"  # Failure level: error | warn
//!
//! [check.assets]
//! enable = true    # Check referenced assets exist
//! level = "error"  # Failure level: error | warn
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

// ============================================================================
// Main CheckConfig
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check")]
pub struct CheckConfig {
    /// Page link checking (nav, sidebar and document links).
    #[config(sub)]
    pub pages: PagesCheckConfig,

    /// Static asset checking (logo, head entries, document images).
    #[config(sub)]
    pub assets: AssetsCheckConfig,
}

// ============================================================================
// Check Targets
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check.pages")]
pub struct PagesCheckConfig {
    /// Enable page link checking.
    pub enable: bool,

    /// How to treat findings: "error" or "warn".
    pub level: CheckLevel,
}

impl Default for PagesCheckConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: CheckLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check.assets")]
pub struct AssetsCheckConfig {
    /// Enable asset checking.
    pub enable: bool,

    /// How to treat findings: "error" or "warn".
    pub level: CheckLevel,
}

impl Default for AssetsCheckConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: CheckLevel::default(),
        }
    }
}

/// Check failure level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Treat findings as errors (command fails).
    #[default]
    Error,
    /// Treat findings as warnings (command succeeds).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_check_config_defaults() {
        let config = test_parse_config("");
        // pages and assets are enabled by default
        assert!(config.check.pages.enable);
        assert!(config.check.assets.enable);
        assert_eq!(config.check.pages.level, CheckLevel::Error);
    }

    #[test]
    fn test_check_config_custom() {
        let config = test_parse_config(
            r#"[check.pages]
enable = true
level = "warn"

[check.assets]
enable = false
level = "warn""#,
        );
        assert!(config.check.pages.enable);
        assert!(!config.check.assets.enable);
        assert_eq!(config.check.pages.level, CheckLevel::Warn);
        assert_eq!(config.check.assets.level, CheckLevel::Warn);
    }

    #[test]
    fn test_check_unknown_field_detected() {
        let content = "[site]\ntitle = \"Test\"\n[check]\nunknown = \"field\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown")));
    }
}
