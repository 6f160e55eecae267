//! Wire contracts shared between the LibSense frontend and the
//! order-tracking REST backend.
//!
//! Everything here is plain serde data: the backend emits camelCase JSON,
//! so every type carries explicit renames.

pub mod data;
pub mod metadata;
pub mod orders;
pub mod overview;
pub mod presets;
pub mod reports;
pub mod system;
pub mod vendors;
