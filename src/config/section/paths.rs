//! `[paths]` section configuration.
//!
//! Directories the site content lives in, relative to the project root.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! docs = "docs"       # markdown documents
//! assets = "public"   # root-served static assets
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ConfigDiagnostics;
use crate::utils::path::normalize_path;

/// Content directories, normalized to absolute paths at load time.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "paths")]
pub struct PathsConfig {
    /// Directory holding the markdown documents.
    #[config(default = "docs", inline_doc)]
    pub docs: PathBuf,

    /// Directory holding root-served static assets.
    #[config(default = "public", inline_doc)]
    pub assets: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            docs: PathBuf::from("docs"),
            assets: PathBuf::from("public"),
        }
    }
}

impl PathsConfig {
    /// Pre-normalization check: configured paths must be relative.
    ///
    /// Must run before [`normalize`](Self::normalize) turns them absolute.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.docs.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.docs,
                format!(
                    "path '{}' must be relative to the project root",
                    self.docs.display()
                ),
                "use a relative path like \"docs\"",
            );
        }
        if self.assets.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.assets,
                format!(
                    "path '{}' must be relative to the project root",
                    self.assets.display()
                ),
                "use a relative path like \"public\"",
            );
        }
    }

    /// Resolve both directories against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.docs = normalize_path(&root.join(&self.docs));
        self.assets = normalize_path(&root.join(&self.assets));
    }
}

// ============================================================================
// Tests
// ============================================================================
