//! World module housing the static village scene and its interaction zones.
pub mod components;
pub mod plugin;
pub mod systems;
pub mod zones;

pub use plugin::WorldPlugin;
