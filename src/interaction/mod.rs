//! Interaction module: tuning, the coordinator, and its systems.
pub mod config;
pub mod coordinator;
pub mod plugin;
pub mod systems;

pub use plugin::InteractionPlugin;
