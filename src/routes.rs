//! Route table for documentation pages.
//!
//! Maps Markdown sources under the docs directory to site-root routes
//! and resolves links against them. Routes use the clean-URL scheme:
//!
//! | Source | Route |
//! |--------|-------|
//! | `index.md` | `/` |
//! | `guide.md` | `/guide` |
//! | `AstrBot/NapCat.md` | `/AstrBot/NapCat` |
//! | `AstrBot/index.md` | `/AstrBot` |

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rustc_hash::FxHashSet;

use crate::utils::url::{percent_decode, split_path_fragment};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// The set of routable pages of a site.
#[derive(Debug, Default, Clone)]
pub struct RouteSet {
    routes: FxHashSet<String>,
}

impl RouteSet {
    /// Scan a docs directory and build the route set from its Markdown files.
    pub fn from_docs_dir(docs_dir: &Path) -> Self {
        let mut routes = FxHashSet::default();
        for file in collect_markdown_files(docs_dir) {
            if let Some(route) = route_for(docs_dir, &file) {
                routes.insert(route);
            }
        }
        Self { routes }
    }

    /// Register a route directly.
    pub fn insert(&mut self, route: impl Into<String>) {
        self.routes.insert(route.into());
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the route set is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Check whether a canonical route exists.
    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    /// Resolve a site-root link to its canonical route.
    ///
    /// Tolerates the forms readers actually write: fragments,
    /// percent-encoding, `.html`/`.md` suffixes and a trailing slash
    /// all map onto the same route.
    ///
    /// # Examples
    /// ```
    /// use antdoc::routes::RouteSet;
    ///
    /// let mut routes = RouteSet::default();
    /// routes.insert("/guide");
    /// assert_eq!(routes.resolve("/guide.html#install"), Some("/guide"));
    /// assert_eq!(routes.resolve("/missing"), None);
    /// ```
    pub fn resolve(&self, link: &str) -> Option<&str> {
        let (path, _fragment) = split_path_fragment(link);
        let decoded = percent_decode(path);
        let canonical = canonicalize(&decoded);
        self.routes.get(canonical).map(String::as_str)
    }

    /// Iterate over all routes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }
}

/// Reduce a decoded link path to its canonical route form.
fn canonicalize(path: &str) -> &str {
    let path = path.strip_suffix(".html").unwrap_or(path);
    let path = path.strip_suffix(".md").unwrap_or(path);
    // /AstrBot/index and /index collapse onto the directory route
    let path = path.strip_suffix("/index").unwrap_or(path);
    let path = path.trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

/// Compute the canonical route for a Markdown source file.
///
/// Returns `None` when the file is not a Markdown file under
/// `docs_dir` or its path is not valid UTF-8.
pub fn route_for(docs_dir: &Path, file: &Path) -> Option<String> {
    if file.extension().is_none_or(|ext| ext != "md") {
        return None;
    }

    let rel = file.strip_prefix(docs_dir).ok()?;
    let stem = rel.with_extension("");

    let mut route = String::from("/");
    route.push_str(stem.to_str()?);

    // Directory index files map onto their directory route
    if let Some(parent) = route.strip_suffix("/index") {
        return Some(if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        });
    }

    Some(route)
}

/// Collect all Markdown files from a directory recursively
pub fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn antlia_docs() -> TempDir {
        let dir = TempDir::new().unwrap();
        let docs = dir.path();
        fs::create_dir_all(docs.join("AstrBot")).unwrap();
        fs::write(docs.join("index.md"), "# Antlia\n").unwrap();
        fs::write(docs.join("guide.md"), "# 指南\n").unwrap();
        for name in ["AstrBot-install", "Eridanus", "NapCat", "Lagange-OneBot"] {
            fs::write(docs.join("AstrBot").join(format!("{name}.md")), "# doc\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_route_for_mapping() {
        let docs = Path::new("/site/docs");
        assert_eq!(
            route_for(docs, Path::new("/site/docs/index.md")).as_deref(),
            Some("/")
        );
        assert_eq!(
            route_for(docs, Path::new("/site/docs/guide.md")).as_deref(),
            Some("/guide")
        );
        assert_eq!(
            route_for(docs, Path::new("/site/docs/AstrBot/NapCat.md")).as_deref(),
            Some("/AstrBot/NapCat")
        );
        assert_eq!(
            route_for(docs, Path::new("/site/docs/AstrBot/index.md")).as_deref(),
            Some("/AstrBot")
        );
    }

    #[test]
    fn test_route_for_rejects_non_markdown() {
        let docs = Path::new("/site/docs");
        assert_eq!(route_for(docs, Path::new("/site/docs/logo.png")), None);
        assert_eq!(route_for(docs, Path::new("/elsewhere/guide.md")), None);
    }

    #[test]
    fn test_from_docs_dir() {
        let dir = antlia_docs();
        let routes = RouteSet::from_docs_dir(dir.path());

        assert_eq!(routes.len(), 6);
        assert!(routes.contains("/"));
        assert!(routes.contains("/guide"));
        assert!(routes.contains("/AstrBot/AstrBot-install"));
        assert!(routes.contains("/AstrBot/Eridanus"));
        assert!(routes.contains("/AstrBot/NapCat"));
        assert!(routes.contains("/AstrBot/Lagange-OneBot"));
        assert!(!routes.contains("/missing"));
    }

    #[test]
    fn test_collect_markdown_files_skips_assets() {
        let dir = antlia_docs();
        fs::write(dir.path().join("logo.png"), [0u8; 4]).unwrap();
        fs::write(dir.path().join(".DS_Store"), [0u8; 4]).unwrap();

        let files = collect_markdown_files(dir.path());
        assert_eq!(files.len(), 6);
        assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "md")));
    }

    #[test]
    fn test_resolve_tolerates_link_forms() {
        let mut routes = RouteSet::default();
        routes.insert("/");
        routes.insert("/guide");
        routes.insert("/AstrBot/AstrBot-install");

        assert_eq!(routes.resolve("/guide"), Some("/guide"));
        assert_eq!(routes.resolve("/guide/"), Some("/guide"));
        assert_eq!(routes.resolve("/guide.html"), Some("/guide"));
        assert_eq!(routes.resolve("/guide.md"), Some("/guide"));
        assert_eq!(routes.resolve("/guide#install"), Some("/guide"));
        assert_eq!(routes.resolve("/"), Some("/"));
        assert_eq!(routes.resolve("/index.html"), Some("/"));
        assert_eq!(
            routes.resolve("/AstrBot/AstrBot-install.html"),
            Some("/AstrBot/AstrBot-install")
        );
        assert_eq!(routes.resolve("/missing"), None);
    }

    #[test]
    fn test_resolve_percent_encoded() {
        let mut routes = RouteSet::default();
        routes.insert("/指南");

        assert_eq!(routes.resolve("/%E6%8C%87%E5%8D%97"), Some("/指南"));
    }
}
