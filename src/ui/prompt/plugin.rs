// src/ui/prompt/plugin.rs
//
// PromptPlugin registers the HUD interaction prompt.

use bevy::prelude::*;

use crate::{core::TickSet, dialogue::systems::dialogue_is_open};

use super::systems::{emit_prompt_activations, refresh_interaction_prompt, spawn_interaction_prompt};

pub struct PromptPlugin;

impl Plugin for PromptPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_interaction_prompt)
            .add_systems(
                Update,
                emit_prompt_activations
                    .run_if(not(dialogue_is_open))
                    .in_set(TickSet::Input),
            )
            .add_systems(Update, refresh_interaction_prompt.in_set(TickSet::Present));
    }
}
