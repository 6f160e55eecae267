pub mod api;
pub mod columns;
pub mod constants;
pub mod engine;
pub mod state;
pub mod ui;
