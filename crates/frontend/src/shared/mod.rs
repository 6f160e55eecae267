pub mod api_utils;
pub mod clipboard;
pub mod date_utils;
pub mod url_state;
