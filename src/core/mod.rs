//! Core timing and tick ordering shared by every other module.
pub mod plugin;

pub use plugin::{CorePlugin, TickSet};
