//! Theme composition for site layouts.
//!
//! [`Theme`] is the base capability: produce a layout [`Document`] from
//! the site configuration and a set of slot fills. [`DefaultTheme`] is
//! the shipped layout shell, [`Extend`] decorates any theme with extra
//! slot fills, and [`antlia`] is the shipped wrapper that adds one logo
//! image after the navbar brand.
//!
//! # Example
//!
//! ```
//! use antdoc::config::SiteConfig;
//! use antdoc::theme::{Slots, Theme, antlia};
//!
//! let mut config = SiteConfig::default();
//! config.site.title = "Antlia".to_string();
//!
//! let doc = antlia().layout(&config, &Slots::default());
//! assert!(doc.to_html().contains("Antlia Logo"));
//! ```

mod default;
mod extend;
mod head;
mod logo;
pub mod nav;

pub use default::DefaultTheme;
pub use extend::Extend;
pub use head::HeadInjector;
pub use logo::antlia;

use rustc_hash::FxHashMap;

use crate::config::SiteConfig;
use crate::dom::{Document, Node};

/// Outlet after the navbar brand.
pub const LOGO_AFTER: &str = "logo-after";
/// Outlet holding the page content inside `<main>`.
pub const CONTENT: &str = "content";
/// Outlet at the end of `<body>`.
pub const LAYOUT_BOTTOM: &str = "layout-bottom";

/// A theme produces the full page layout.
pub trait Theme {
    /// Theme name, used in log output.
    fn name(&self) -> &'static str;

    /// Produce the layout document for a site.
    fn layout(&self, config: &SiteConfig, slots: &Slots) -> Document;
}

/// Pre-built nodes keyed by slot name.
///
/// A layout only reads the outlets it defines, so fills for unknown
/// slot names are carried but never rendered.
#[derive(Debug, Default, Clone)]
pub struct Slots {
    fills: FxHashMap<String, Vec<Node>>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node to a slot.
    pub fn fill(&mut self, slot: impl Into<String>, node: impl Into<Node>) {
        self.fills.entry(slot.into()).or_default().push(node.into());
    }

    /// Nodes queued for a slot, in fill order.
    pub fn nodes(&self, slot: &str) -> &[Node] {
        self.fills.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Append all of `other`'s fills after this set's own.
    pub fn merge(&mut self, other: &Slots) {
        for (slot, nodes) in &other.fills {
            self.fills
                .entry(slot.clone())
                .or_default()
                .extend(nodes.iter().cloned());
        }
    }

    /// Check if no slot has any fill.
    pub fn is_empty(&self) -> bool {
        self.fills.values().all(Vec::is_empty)
    }
}
