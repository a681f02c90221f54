//! The Antlia theme wrapper.
//!
//! Extends the default theme with one fixed-attribute logo image,
//! injected at the outlet after the navbar brand.

use crate::dom::Element;
use crate::theme::{DefaultTheme, Extend, LOGO_AFTER};

/// Asset path of the injected logo image.
pub const LOGO_SRC: &str = "/logo.png";
/// Alt text of the injected logo image.
pub const LOGO_ALT: &str = "Antlia Logo";
/// Inline style of the injected logo image.
pub const LOGO_STYLE: &str = "width:40px;height:40px;border-radius:50%;object-fit:cover;";

/// The Antlia theme: the default theme plus one logo image after the
/// navbar brand.
pub fn antlia() -> Extend<DefaultTheme> {
    Extend::new(DefaultTheme).fill(LOGO_AFTER, logo_img())
}

/// The fixed-attribute logo image.
fn logo_img() -> Element {
    let mut img = Element::new("img");
    img.set_attr("src", LOGO_SRC);
    img.set_attr("alt", LOGO_ALT);
    img.set_attr("style", LOGO_STYLE);
    img
}
