#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use ui::views::BoxOfficePage;

const THEME_CSS: &str = ui::THEME_CSS;

#[cfg(feature = "desktop")]
fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("박스오피스 – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Theme is embedded; desktop builds carry no separate asset directory.
        document::Style { "{THEME_CSS}" }
        BoxOfficePage {}
    }
}
