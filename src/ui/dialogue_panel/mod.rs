// src/ui/dialogue_panel/mod.rs
//
// Dialogue panel module presenting the modal npc box and island panel.

pub mod components;
pub mod plugin;
pub mod systems;

// Re-export main types
pub use plugin::UiPlugin;
