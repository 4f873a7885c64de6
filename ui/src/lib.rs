//! Shared UI crate for the box-office viewer. State, view models, and views live here;
//! the platform crates only launch [`views::BoxOfficePage`].

pub mod components;
pub mod core;
pub mod fetch;
pub mod i18n;
pub mod store;
pub mod view_model;
pub mod views;

/// Shared theme, embedded by the launchers.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
