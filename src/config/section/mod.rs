//! Configuration section definitions.
//!
//! Each module corresponds to a section in `antdoc.toml`:
//!
//! | Module  | TOML Section | Purpose                            |
//! |---------|--------------|------------------------------------|
//! | `site`  | `[site]`     | Site metadata and head entries     |
//! | `theme` | `[theme]`    | Logo, navigation, sidebar          |
//! | `paths` | `[paths]`    | Docs and asset directories         |
//! | `check` | `[check]`    | Link and asset check settings      |

mod check;
mod paths;
mod site;
mod theme;

// Re-export section configs
pub use check::{AssetsCheckConfig, CheckConfig, CheckLevel, PagesCheckConfig};
pub use paths::PathsConfig;
pub use site::{HeadEntry, SiteSectionConfig};
pub use theme::{NavEntry, SidebarGroup, SidebarItem, ThemeSectionConfig};
