pub mod column_panel;
pub mod details;
pub mod filter_panel;
pub mod fuzzy_search;
pub mod page;
pub mod preset_control;
pub mod table;
pub mod view_toggles;

pub use page::OrderTablePage;
