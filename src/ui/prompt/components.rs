// src/ui/prompt/components.rs
//
// Components for the HUD interaction prompt.

use bevy::prelude::*;

/// Pressable prompt shown at the bottom of the screen while something is in range.
#[derive(Component, Debug)]
pub struct InteractionPrompt;

/// Text child of the prompt.
#[derive(Component, Debug)]
pub struct InteractionPromptText;
