//! Dialogue plugin wiring the overlay resource, messages, and lifecycle systems.
use bevy::prelude::*;

use crate::{core::plugin::TickSet, interaction::config::InteractionSettings};

use super::{
    events::{DialogueClosed, DialogueCommand, OpenDialogue},
    session::DialogueOverlay,
    systems::{
        advance_typewriter, apply_dialogue_commands, dialogue_is_open, open_requested_dialogues,
    },
};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        let overlay = app
            .world()
            .get_resource::<InteractionSettings>()
            .map(|settings| DialogueOverlay::new(settings.reveal_interval))
            .unwrap_or_default();

        app.insert_resource(overlay)
            .add_message::<OpenDialogue>()
            .add_message::<DialogueCommand>()
            .add_message::<DialogueClosed>()
            .add_systems(
                Update,
                (
                    apply_dialogue_commands,
                    advance_typewriter.run_if(dialogue_is_open),
                )
                    .chain()
                    .in_set(TickSet::Overlay),
            )
            .add_systems(Update, open_requested_dialogues.in_set(TickSet::Present));

        info!("DialoguePlugin registered");
    }
}
