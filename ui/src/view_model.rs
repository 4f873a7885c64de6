//! Pure projections of a [`RankingResult`] into what the table and chart draw.

use api::{FetchError, RankingResult};

use crate::core::format::format_count;
use crate::store::RankingStore;

/// What the region under the date picker shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    /// A stored error replaces table and chart entirely, even when an older
    /// ranking is still held by the store.
    Error(FetchError),
    Content {
        rows: Vec<TableRow>,
        series: ChartSeries,
        show_range: Option<String>,
    },
}

pub fn page_body(store: &RankingStore) -> PageBody {
    if let Some(error) = store.error() {
        return PageBody::Error(error.clone());
    }

    let data = store.data().map(|ranking| ranking.as_ref());
    PageBody::Content {
        rows: table_rows(data),
        series: derive_series(data),
        show_range: data.and_then(|ranking| ranking.show_range.clone()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub rank: u32,
    pub title: String,
    pub admissions: String,
    pub open_date: String,
}

pub fn table_rows(result: Option<&RankingResult>) -> Vec<TableRow> {
    let Some(result) = result else {
        return Vec::new();
    };

    result
        .entries
        .iter()
        .map(|entry| TableRow {
            rank: entry.rank,
            title: entry.movie_title.clone(),
            admissions: format_count(entry.admission_count),
            open_date: entry.open_date.clone(),
        })
        .collect()
}

/// Parallel label/value sequences for the bar chart, in ranking order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub fn derive_series(result: Option<&RankingResult>) -> ChartSeries {
    let mut series = ChartSeries::default();
    if let Some(result) = result {
        for entry in &result.entries {
            series.labels.push(entry.movie_title.clone());
            series.values.push(entry.admission_count);
        }
    }
    series
}

/// Fraction of a row's height occupied by its bar.
const BAR_FILL_RATIO: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: u64,
    pub value_label: String,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays out one horizontal bar per series point, scaled against the largest
/// value so the longest bar spans `max_width`.
pub fn bar_layout(series: &ChartSeries, max_width: f64, row_height: f64) -> Vec<BarGeometry> {
    let peak = series.values.iter().copied().max().unwrap_or(0);
    let bar_height = row_height * BAR_FILL_RATIO;
    let inset = (row_height - bar_height) / 2.0;

    series
        .labels
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(idx, (label, &value))| {
            let width = if peak == 0 {
                0.0
            } else {
                value as f64 / peak as f64 * max_width
            };
            BarGeometry {
                label: label.clone(),
                value,
                value_label: format_count(value),
                y: idx as f64 * row_height + inset,
                width,
                height: bar_height,
            }
        })
        .collect()
}
