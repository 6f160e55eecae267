pub mod global_context;
pub mod sidebar;
pub mod toast;
