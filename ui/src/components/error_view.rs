use api::FetchError;
use dioxus::prelude::*;

use crate::t;

#[component]
pub fn ErrorView(error: FetchError) -> Element {
    rsx! {
        section { class: "error-view", role: "alert",
            h2 { class: "error-view__title", {t!("error-title")} }
            p { class: "error-view__detail", "⚠️ {error}" }
            p { class: "error-view__hint", {t!("error-retry-hint")} }
        }
    }
}
