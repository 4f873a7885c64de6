use dioxus::prelude::*;

use crate::t;
use crate::view_model::{bar_layout, ChartSeries};

const LABEL_WIDTH: f64 = 180.0;
const PLOT_WIDTH: f64 = 320.0;
const VALUE_WIDTH: f64 = 90.0;
const ROW_HEIGHT: f64 = 28.0;
const LEGEND_HEIGHT: f64 = 28.0;
const TEXT_GAP: f64 = 6.0;

#[derive(Clone)]
struct BarRow {
    label: String,
    value_label: String,
    y: f64,
    width: f64,
    height: f64,
    text_y: f64,
    value_x: f64,
}

/// Horizontal bar chart, one bar per series point, single fixed legend.
#[component]
pub fn BarChart(series: ChartSeries, legend: String) -> Element {
    if series.is_empty() {
        return rsx! {
            figure { class: "bar-chart bar-chart--empty",
                figcaption { class: "bar-chart__legend", "{legend}" }
                p { class: "bar-chart__placeholder", {t!("chart-empty")} }
            }
        };
    }

    let rows: Vec<BarRow> = bar_layout(&series, PLOT_WIDTH, ROW_HEIGHT)
        .into_iter()
        .map(|bar| BarRow {
            text_y: bar.y + bar.height * 0.75,
            value_x: LABEL_WIDTH + bar.width + TEXT_GAP,
            label: bar.label,
            value_label: bar.value_label,
            y: bar.y,
            width: bar.width,
            height: bar.height,
        })
        .collect();

    let width = LABEL_WIDTH + PLOT_WIDTH + VALUE_WIDTH;
    let height = LEGEND_HEIGHT + ROW_HEIGHT * series.len() as f64;
    let label_x = LABEL_WIDTH - TEXT_GAP;
    let legend_text_x = LABEL_WIDTH + 20.0;

    rsx! {
        figure { class: "bar-chart",
            svg {
                class: "bar-chart__canvas",
                view_box: "0 0 {width} {height}",
                g { class: "bar-chart__legend",
                    rect { class: "bar-chart__swatch", x: "{LABEL_WIDTH}", y: "6", width: "14", height: "14" }
                    text { class: "bar-chart__legend-text", x: "{legend_text_x}", y: "18", "{legend}" }
                }
                g { class: "bar-chart__plot", transform: "translate(0 {LEGEND_HEIGHT})",
                    for (idx, row) in rows.into_iter().enumerate() {
                        g { key: "{idx}", class: "bar-chart__row",
                            text {
                                class: "bar-chart__label",
                                x: "{label_x}",
                                y: "{row.text_y}",
                                text_anchor: "end",
                                "{row.label}"
                            }
                            rect {
                                class: "bar-chart__bar",
                                x: "{LABEL_WIDTH}",
                                y: "{row.y}",
                                width: "{row.width}",
                                height: "{row.height}",
                            }
                            text {
                                class: "bar-chart__value",
                                x: "{row.value_x}",
                                y: "{row.text_y}",
                                "{row.value_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
