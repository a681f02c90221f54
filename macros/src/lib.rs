//! Proc macros for antdoc.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteSectionConfig {
//!     /// Site title shown in the browser tab and navbar.
//!     pub title: String,
//!
//!     /// Language code (BCP 47).
//!     #[config(default = "en", inline_doc)]
//!     pub language: String,
//!
//!     /// Head entries, authored as [[site.head]] tables.
//!     #[config(hidden)]
//!     pub head: Vec<HeadEntry>,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML string with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip entirely (internal field, not in FIELDS)
//! - `#[config(hidden)]` - Keep in FIELDS but hide from template output
//! - `#[config(sub)]` - Nested Config struct, template recurses into it
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` - Render the doc comment inline after the value
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteSectionConfig` → `site`
//! - `PathsConfig` → `paths`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
