//! Configuration file generation.
//!
//! Creates antdoc.toml, ignore files and starter documents for new
//! projects.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    AssetsCheckConfig, PagesCheckConfig, PathsConfig, SiteSectionConfig, ThemeSectionConfig,
};

/// Default config filename
const CONFIG_FILE: &str = "antdoc.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Commented examples for the array-of-tables entries the section
/// templates cannot express.
const ENTRY_EXAMPLES: &str = r#"
# Head entries, navigation and sidebar are authored as arrays of tables:
#
# [[site.head]]
# tag = "link"
# attrs = { rel = "icon", href = "/favicon.ico", type = "image/x-icon" }
#
# [[theme.nav]]
# text = "Guide"
# link = "/guide"
#
# [[theme.sidebar]]
# text = "Getting Started"
# items = [{ text = "Install", link = "/guide" }]
"#;

/// Starter home page.
const INDEX_MD: &str = "# Welcome\n\n\
    This site is managed by antdoc. Edit `docs/index.md` to change this page.\n";

/// Starter guide page.
const GUIDE_MD: &str = "# Guide\n\nDescribe your project here.\n";

/// Generate antdoc.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# antdoc configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/zhende1113/antdoc\n\n");

    // [site] section
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [theme] section
    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push('\n');

    // [paths] section
    out.push_str(&PathsConfig::template_with_header());
    out.push('\n');

    // [check.pages] section
    out.push_str(&PagesCheckConfig::template_with_header());
    out.push('\n');

    // [check.assets] section
    out.push_str(&AssetsCheckConfig::template_with_header());

    out.push_str(ENTRY_EXAMPLES);

    out
}

/// Write default antdoc.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write starter markdown documents
///
/// Existing documents are left untouched.
pub fn write_starter_docs(root: &Path) -> Result<()> {
    let pages = [("docs/index.md", INDEX_MD), ("docs/guide.md", GUIDE_MD)];

    for (rel, content) in pages {
        let path = root.join(rel);
        if !path.exists() {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = ".DS_Store\n";

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
