//! Project initialization.
//!
//! Creates a new documentation project: directory skeleton, default
//! antdoc.toml and starter documents.

mod config;

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::SiteConfig;
use crate::log;

/// Directories every new project gets.
const PROJECT_DIRS: &[&str] = &["docs", "public"];

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
enum InitMode {
    /// `antdoc init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `antdoc init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Create a new documentation project
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write antdoc.toml and starter documents
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_project(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    create_structure(root)?;
    config::write_config(root)?;
    config::write_starter_docs(root)?;
    config::write_ignore_files(root)?;

    log!("init"; "Project initialized successfully");
    Ok(())
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: directory must be empty (or not exist)
/// - `NewDir`: directory must not exist
fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if !is_empty(root)? {
                bail!(
                    "Current directory is not empty.\n\
                     Use `antdoc init <name>` to create in a new subdirectory."
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

/// Create the project directory skeleton at the given root.
fn create_structure(root: &Path) -> Result<()> {
    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }
    Ok(())
}
