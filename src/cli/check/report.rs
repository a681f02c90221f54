//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::utils::plural_s;

/// A single check finding
#[derive(Debug, Clone, Serialize)]
pub struct CheckError {
    /// The link/path that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Unified check report for all finding types
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Broken page links, grouped by source.
    pub pages: BTreeMap<String, Vec<CheckError>>,
    /// Missing assets, grouped by source.
    pub assets: BTreeMap<String, Vec<CheckError>>,
}

impl CheckReport {
    /// Add a broken page link.
    pub fn add_page(&mut self, source: String, link: String, reason: String) {
        self.pages.entry(source).or_default().push(CheckError {
            target: link,
            reason,
        });
    }

    /// Add a missing asset.
    pub fn add_asset(&mut self, source: String, path: String, reason: String) {
        self.assets.entry(source).or_default().push(CheckError {
            target: path,
            reason,
        });
    }

    /// Count of sources with broken page links.
    pub fn page_file_count(&self) -> usize {
        self.pages.len()
    }

    /// Count of sources with missing assets.
    pub fn asset_file_count(&self) -> usize {
        self.assets.len()
    }

    /// Total broken page link count.
    pub fn page_error_count(&self) -> usize {
        self.pages.values().map(|v| v.len()).sum()
    }

    /// Total missing asset count.
    pub fn asset_error_count(&self) -> usize {
        self.assets.values().map(|v| v.len()).sum()
    }

    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print the full report to stderr (pages -> assets).
    pub fn print(&self) {
        self.print_section("pages", &self.pages);
        self.print_section("assets", &self.assets);
    }

    /// Print section with format (target + reason for non-empty reason).
    fn print_section(&self, name: &str, errors: &BTreeMap<String, Vec<CheckError>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let file_count = errors.len();
        let error_count: usize = errors.values().map(|v| v.len()).sum();

        // Section header
        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({file_count} source{}, {error_count} error{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (path, errs) in errors {
            // Source path
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason);
                }
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages = self.page_error_count();
        let assets = self.asset_error_count();
        let total = pages + assets;

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}
