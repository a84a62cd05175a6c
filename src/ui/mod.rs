// src/ui/mod.rs
//
// UI module providing screen-space elements for the village.
//
// Current features:
// - Dialogue overlay (npc conversation box and island resume panel)
// - Interaction prompt (bottom-centre HUD hint, also pressable)

pub mod dialogue_panel;
pub mod prompt;

// Re-export the main plugin
pub use dialogue_panel::UiPlugin;
