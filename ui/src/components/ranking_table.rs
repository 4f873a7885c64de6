use dioxus::prelude::*;

use crate::t;
use crate::view_model::TableRow;

#[component]
pub fn RankingTable(
    rows: Vec<TableRow>,
    #[props(!optional)] show_range: Option<String>,
) -> Element {
    rsx! {
        table { class: "ranking-table",
            if let Some(range) = show_range {
                caption { class: "ranking-table__caption", "{range}" }
            }
            thead {
                tr {
                    th { {t!("table-rank")} }
                    th { {t!("table-movie")} }
                    th { {t!("table-audience")} }
                    th { {t!("table-open-date")} }
                }
            }
            tbody {
                for (idx, row) in rows.iter().enumerate() {
                    tr { key: "{idx}",
                        td { class: "ranking-table__rank", "{row.rank}" }
                        td { class: "ranking-table__title", "{row.title}" }
                        td { class: "ranking-table__count", "{row.admissions}" }
                        td { class: "ranking-table__date", "{row.open_date}" }
                    }
                }
            }
        }
        if rows.is_empty() {
            p { class: "ranking-table__placeholder", {t!("table-empty")} }
        }
    }
}
