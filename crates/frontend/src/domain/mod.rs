pub mod metadata;
pub mod orders;
pub mod overview;
pub mod presets;
pub mod vendors;
