//! Systems driving the dialogue overlay lifecycle.
use bevy::prelude::*;

use crate::core::plugin::SimulationClock;

use super::{
    events::{DialogueClosed, DialogueCommand, OpenDialogue},
    session::{ClosedSession, DialogueOverlay},
};

/// Run condition: a dialogue session exists.
pub fn dialogue_is_open(overlay: Res<DialogueOverlay>) -> bool {
    overlay.is_open()
}

/// Applies advance/close commands from every dismiss affordance.
pub fn apply_dialogue_commands(
    mut commands: Commands,
    mut overlay: ResMut<DialogueOverlay>,
    mut requests: MessageReader<DialogueCommand>,
    mut closed: MessageWriter<DialogueClosed>,
) {
    for command in requests.read() {
        if let Some(ended) = overlay.apply(*command) {
            release_session(&mut commands, &mut closed, ended);
        }
    }
}

/// Reveals typewriter characters for the active npc session.
pub fn advance_typewriter(clock: Res<SimulationClock>, mut overlay: ResMut<DialogueOverlay>) {
    if overlay
        .bypass_change_detection()
        .tick(clock.last_scaled_delta())
    {
        overlay.set_changed();
    }
}

/// Opens sessions requested by the interaction coordinator.
pub fn open_requested_dialogues(
    mut commands: Commands,
    mut overlay: ResMut<DialogueOverlay>,
    mut requests: MessageReader<OpenDialogue>,
    mut closed: MessageWriter<DialogueClosed>,
) {
    for request in requests.read() {
        let (id, replaced) = overlay.open(request.content.clone());
        if let Some(ended) = replaced {
            release_session(&mut commands, &mut closed, ended);
        }
        info!("Opened {} ({:?} mode)", id, request.content.mode());
    }
}

/// Tears down everything a session acquired and announces the closure.
fn release_session(
    commands: &mut Commands,
    closed: &mut MessageWriter<DialogueClosed>,
    ended: ClosedSession,
) {
    if let Some(root) = ended.ui_root {
        commands.entity(root).try_despawn();
    }
    closed.write(ended.signal());
    info!("Closed {}", ended.id);
}
