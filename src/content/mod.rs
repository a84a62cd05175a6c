//! Content module: map layout and resume descriptors consumed read-only by the village.
pub mod errors;
pub mod loader;
pub mod plugin;
pub mod types;

pub use plugin::ContentPlugin;
