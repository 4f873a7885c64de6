mod bar_chart;
pub use bar_chart::BarChart;

mod date_selector;
pub use date_selector::DateSelector;

mod error_view;
pub use error_view::ErrorView;

mod ranking_table;
pub use ranking_table::RankingTable;

mod spinner;
pub use spinner::Spinner;
