//! Input module: device sampling and the normalized activation message.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::InputPlugin;
