use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use ui::views::BoxOfficePage;

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Style { "{THEME_CSS}" }
        BoxOfficePage {}
    }
}
