use api::{RankingClient, TargetDate};
use dioxus::prelude::*;

use crate::components::{BarChart, DateSelector, ErrorView, RankingTable, Spinner};
use crate::fetch::fetch_ranking;
use crate::store::RankingStore;
use crate::t;
use crate::view_model::{page_body, PageBody};

/// The whole page: date picker on top, then either the error panel or the
/// ranking table next to its bar chart.
#[component]
pub fn BoxOfficePage() -> Element {
    let store = use_signal(|| RankingStore::pending(TargetDate::yesterday()));
    let client = use_hook(RankingClient::from_env);
    let mut selected = use_signal(|| store.peek().target_date().input_value());

    // Initial load for the default day (yesterday).
    {
        let client = client.clone();
        use_hook(move || {
            let target = store.peek().target_date().clone();
            spawn(async move {
                fetch_ranking(client, target, store).await;
            })
        });
    }

    let on_select = move |target: TargetDate| {
        selected.set(target.input_value());
        let request = fetch_ranking(client.clone(), target, store);
        spawn(async move {
            request.await;
        });
    };

    // Memo equality keeps loading toggles from re-rendering table and chart.
    let body = use_memo(move || page_body(&store.read()));
    let loading = store.read().is_loading();

    rsx! {
        section { class: "page page-boxoffice",
            Spinner { loading }

            h1 { {t!("page-title")} }

            form {
                class: "boxoffice__form",
                onsubmit: move |evt| evt.prevent_default(),
                DateSelector { value: selected(), on_select }
            }

            match body() {
                PageBody::Error(error) => rsx! {
                    ErrorView { error }
                },
                PageBody::Content { rows, series, show_range } => rsx! {
                    div { class: "boxoffice__panels",
                        div { class: "boxoffice__panel",
                            RankingTable { rows, show_range }
                        }
                        div { class: "boxoffice__panel",
                            BarChart { series, legend: t!("chart-legend") }
                        }
                    }
                },
            }
        }
    }
}
