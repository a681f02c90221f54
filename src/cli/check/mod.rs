//! Site check command.
//!
//! Verifies that every navigation, sidebar and document link resolves to
//! an existing document and that referenced assets exist on disk.

mod report;
mod scan;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::cli::CheckArgs;
use crate::config::{CheckLevel, SiteConfig};
use crate::link::LinkKind;
use crate::{debug, log};
use crate::routes::{RouteSet, collect_markdown_files};
use crate::utils::path::resolve_path;
use crate::utils::url::{percent_decode, split_path_fragment, strip_leading_slash};
use crate::utils::{plural_count, plural_s};

pub use report::CheckReport;
use scan::{ScannedLink, scan_markdown};

/// Check site navigation, document links and asset references
pub fn check_site(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let check_pages = config.check.pages.enable;
    let check_assets = config.check.assets.enable;

    if !check_pages && !check_assets {
        log!("check"; "no checks enabled");
        return Ok(());
    }

    let report = run_check(args, config);

    if args.json {
        println!("{}", report.to_json()?);
        return summarize(&report, config);
    }

    // Log page link results
    if check_pages {
        let count = report.page_error_count();
        if count > 0 {
            log!("check"; "found {} broken page link{}", count, plural_s(count));
        } else {
            log!("check"; "all page links valid");
        }
    }

    // Log asset results
    if check_assets {
        let count = report.asset_error_count();
        if count > 0 {
            log!("check"; "found {} missing asset{}", count, plural_s(count));
        } else {
            log!("check"; "all asset references valid");
        }
    }

    // Print detailed report (pages -> assets)
    report.print();

    summarize(&report, config)
}

/// Run all enabled checks and collect the findings
fn run_check(args: &CheckArgs, config: &SiteConfig) -> CheckReport {
    let docs_dir = config.paths.docs.clone();
    let files = collect_files(&args.paths, &docs_dir);

    if !args.json {
        log!("check"; "checking {}", plural_count(files.len(), "document"));
    }

    let ctx = CheckContext {
        config,
        routes: RouteSet::from_docs_dir(&docs_dir),
        report: Arc::new(RwLock::new(CheckReport::default())),
    };
    debug!("check"; "route table has {}", plural_count(ctx.routes.len(), "route"));

    // Links declared in antdoc.toml (nav, sidebar, logo, head entries)
    ctx.check_config_links();

    // Document links, scanned in parallel
    files.par_iter().for_each(|file| {
        if let Ok(result) = scan_markdown(file, ctx.config.get_root()) {
            let dir = file.parent().unwrap_or(Path::new(""));
            ctx.check_links(&result.source, dir, &result.links);
        }
    });

    Arc::try_unwrap(ctx.report).unwrap().into_inner()
}

/// Collect documents to scan: explicit paths or the whole docs directory
fn collect_files(paths: &[PathBuf], docs_dir: &Path) -> Vec<PathBuf> {
    if paths.is_empty() {
        return collect_markdown_files(docs_dir);
    }

    let mut files = Vec::new();
    for path in paths {
        let resolved = resolve_path(path, docs_dir);
        if resolved.is_dir() {
            files.extend(collect_markdown_files(&resolved));
        } else if resolved.extension().is_some_and(|e| e == "md") {
            files.push(resolved);
        }
    }
    files
}

/// Shared state for one check run.
struct CheckContext<'a> {
    config: &'a SiteConfig,
    routes: RouteSet,
    report: Arc<RwLock<CheckReport>>,
}

impl CheckContext<'_> {
    /// Check the links declared in the configuration itself.
    ///
    /// Nav and sidebar entries are page links; the logo and head entry
    /// href/src attributes are asset references. Findings are grouped
    /// under the config file name.
    fn check_config_links(&self) {
        let source = self
            .config
            .config_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "antdoc.toml".to_string());

        let mut links: Vec<ScannedLink> = Vec::new();

        for entry in &self.config.theme.nav {
            links.push(ScannedLink::href(&entry.link));
        }
        for group in &self.config.theme.sidebar {
            for item in &group.items {
                links.push(ScannedLink::href(&item.link));
            }
        }

        if let Some(logo) = &self.config.theme.logo {
            links.push(ScannedLink::src(logo.to_string_lossy()));
        }
        for entry in &self.config.site.head {
            for (name, value) in entry.string_attrs() {
                if matches!(name, "href" | "src") {
                    links.push(ScannedLink::src(value));
                }
            }
        }

        self.check_links(&source, self.config.get_root(), &links);
    }

    /// Check all links from one source.
    fn check_links(&self, source: &str, dir: &Path, links: &[ScannedLink]) {
        let pages = &self.config.check.pages;
        let assets = &self.config.check.assets;

        for link in links {
            match link.kind() {
                // External links: skip (no HTTP probing)
                LinkKind::External(_) => {}

                // Bare fragments point at the current page
                LinkKind::Fragment(_) => {}

                LinkKind::SiteRoot(path) => {
                    if link.is_asset_attr() {
                        if assets.enable && !self.asset_exists(path) {
                            self.report.write().add_asset(
                                source.to_string(),
                                format!("`{}`", link.dest),
                                "not found".to_string(),
                            );
                        }
                        continue;
                    }

                    if !pages.enable {
                        continue;
                    }

                    // A page link may also point at a served asset
                    if self.routes.resolve(path).is_none() && !self.asset_exists(path) {
                        self.report.write().add_page(
                            source.to_string(),
                            link.dest.clone(),
                            "not found".to_string(),
                        );
                    }
                }

                LinkKind::FileRelative(path) => {
                    if link.is_asset_attr() {
                        if assets.enable && !relative_target_exists(dir, path, false) {
                            self.report.write().add_asset(
                                source.to_string(),
                                format!("`{}`", link.dest),
                                "not found".to_string(),
                            );
                        }
                    } else if pages.enable && !relative_target_exists(dir, path, true) {
                        self.report.write().add_page(
                            source.to_string(),
                            link.dest.clone(),
                            "not found".to_string(),
                        );
                    }
                }
            }
        }
    }

    /// Check a site-root path against the assets directory.
    fn asset_exists(&self, path: &str) -> bool {
        let (path, _fragment) = split_path_fragment(path);
        let decoded = percent_decode(path);
        let rel = strip_leading_slash(&decoded);
        if rel.is_empty() {
            return false;
        }
        self.config.paths.assets.join(rel).exists()
    }
}

/// Check a file-relative link against the containing document's directory.
///
/// Page links tolerate the extension-less route form: `other` resolves
/// when `other.md` or `other/index.md` exists next to the document.
fn relative_target_exists(dir: &Path, link: &str, page_fallbacks: bool) -> bool {
    let (path, _fragment) = split_path_fragment(link);
    let decoded = percent_decode(path);
    let clean = decoded.trim_start_matches("./");
    if clean.is_empty() {
        return true;
    }

    if dir.join(clean).exists() {
        return true;
    }

    if !page_fallbacks {
        return false;
    }

    let stripped = clean.strip_suffix(".html").unwrap_or(clean);
    dir.join(format!("{stripped}.md")).exists() || dir.join(stripped).join("index.md").exists()
}

/// Decide the exit status from the report and the configured levels
fn summarize(report: &CheckReport, config: &SiteConfig) -> Result<()> {
    let mut parts = Vec::new();

    if config.check.pages.level == CheckLevel::Error && report.page_error_count() > 0 {
        parts.push(format!(
            "{} with broken page links",
            plural_count(report.page_file_count(), "source")
        ));
    }
    if config.check.assets.level == CheckLevel::Error && report.asset_error_count() > 0 {
        parts.push(format!(
            "{} with missing assets",
            plural_count(report.asset_file_count(), "source")
        ));
    }

    if !parts.is_empty() {
        anyhow::bail!("found {}", parts.join(", "));
    }

    Ok(())
}
