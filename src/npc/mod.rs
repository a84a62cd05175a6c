//! NPC module: the static village NPC and its proximity tracking.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::NpcPlugin;
