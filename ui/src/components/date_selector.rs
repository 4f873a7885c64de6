use api::TargetDate;
use dioxus::prelude::*;

use crate::t;

/// Native date input. Emits the picked day in wire form; values the input
/// cannot produce a full date for (a cleared field) are ignored.
#[component]
pub fn DateSelector(value: String, on_select: EventHandler<TargetDate>) -> Element {
    let on_change = move |evt: FormEvent| {
        evt.prevent_default();
        let raw = evt.value();
        match TargetDate::from_input(&raw) {
            Ok(target) => on_select.call(target),
            Err(err) => tracing::warn!(value = %raw, error = %err, "ignoring date input"),
        }
    };

    rsx! {
        label { class: "date-selector",
            span { class: "date-selector__label", {t!("date-label")} }
            input {
                r#type: "date",
                class: "date-selector__input form-control",
                placeholder: t!("date-placeholder"),
                value: "{value}",
                onchange: on_change,
            }
        }
    }
}
