//! Feature slices for the TUI (state/update/render per slice).

pub mod auth;
pub mod navbar;
pub mod product_form;
pub mod products;
