//! Theme decoration by slot filling.

use crate::config::SiteConfig;
use crate::dom::{Document, Node};
use crate::theme::{Slots, Theme};

/// Wraps a base theme with additional slot fills.
///
/// `layout()` merges the wrapper's fills with the caller's slots
/// (wrapper fills first) and delegates to the base theme, so the output
/// equals the base output plus the injected nodes at their outlets.
#[derive(Debug, Clone)]
pub struct Extend<T: Theme> {
    base: T,
    fills: Slots,
}

impl<T: Theme> Extend<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            fills: Slots::new(),
        }
    }

    /// Queue a node for a slot.
    #[must_use]
    pub fn fill(mut self, slot: impl Into<String>, node: impl Into<Node>) -> Self {
        self.fills.fill(slot, node);
        self
    }
}

impl<T: Theme> Theme for Extend<T> {
    fn name(&self) -> &'static str {
        self.base.name()
    }

    fn layout(&self, config: &SiteConfig, slots: &Slots) -> Document {
        let mut merged = self.fills.clone();
        merged.merge(slots);
        self.base.layout(config, &merged)
    }
}
