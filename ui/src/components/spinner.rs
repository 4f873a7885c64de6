use dioxus::prelude::*;

use crate::t;

/// Non-modal loading overlay; content underneath stays visible and interactive.
#[component]
pub fn Spinner(loading: bool) -> Element {
    if !loading {
        return rsx! {};
    }

    rsx! {
        div { class: "spinner", role: "status",
            span { class: "spinner__wheel" }
            span { class: "spinner__label", {t!("status-loading")} }
        }
    }
}
