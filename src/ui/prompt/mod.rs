// src/ui/prompt/mod.rs
//
// HUD prompt telling the visitor how to interact with what is in range.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PromptPlugin;
