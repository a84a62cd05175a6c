//! Player module: the controllable entity and its Movement Resolver.

pub mod components;
pub mod movement;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
