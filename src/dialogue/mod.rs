//! Dialogue module: the modal overlay session, its commands, and its closure signal.
pub mod events;
pub mod plugin;
pub mod session;
pub mod systems;

pub use plugin::DialoguePlugin;
