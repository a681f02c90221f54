//! Documentation site kit for the Antlia script deployment tool.
//!
//! Everything a small docs site is assembled from:
//!
//! | Module   | Purpose                                       |
//! |----------|-----------------------------------------------|
//! | `config` | `antdoc.toml` loading and validation          |
//! | `theme`  | Layout themes and slot-based composition      |
//! | `dom`    | Element tree construction and HTML rendering  |
//! | `routes` | Document-to-route mapping and link resolution |
//! | `cli`    | The `init` and `check` commands               |

pub mod cli;
pub mod config;
pub mod dom;
pub mod link;
pub mod logger;
pub mod routes;
pub mod theme;
pub mod utils;

pub use cli::check::CheckReport;
pub use config::SiteConfig;
pub use dom::{Document, Element, Node};
pub use routes::RouteSet;
pub use theme::{DefaultTheme, Extend, Slots, Theme, antlia};
