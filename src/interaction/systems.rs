//! Systems wiring the Interaction Coordinator into the tick.
use bevy::prelude::*;

use crate::{
    content::loader::VillageContent,
    core::plugin::SimulationClock,
    dialogue::{
        events::{DialogueClosed, OpenDialogue},
        session::{DialogueContent, DialogueOverlay},
    },
    input::{components::PointerGate, events::Activation},
    npc::components::{Npc, NpcProximity},
    player::components::{Controllable, Player},
    world::zones::ZoneRegistry,
};

use super::coordinator::{InteractionCoordinator, TriggerOutcome};

/// Feeds this tick's zone and NPC range into the coordinator.
pub fn observe_proximity(
    zones: Res<ZoneRegistry>,
    player: Query<&Transform, With<Player>>,
    npcs: Query<&NpcProximity, With<Npc>>,
    mut coordinator: ResMut<InteractionCoordinator>,
) {
    let Ok(transform) = player.single() else {
        return;
    };
    let zone = zones
        .active_zone(transform.translation.truncate())
        .map(|zone| zone.key.as_str());
    let npc_nearby = npcs.iter().any(NpcProximity::is_nearby);
    coordinator.observe(zone, npc_nearby);
}

pub fn tick_close_cooldown(clock: Res<SimulationClock>, mut coordinator: ResMut<InteractionCoordinator>) {
    coordinator.tick(clock.last_scaled_delta());
}

/// Resumes control after a closure: arms both guards and clears consumed input.
/// Touches still down belong to the dismissing gesture and are consumed too.
pub fn handle_dialogue_closed(
    mut closures: MessageReader<DialogueClosed>,
    mut coordinator: ResMut<InteractionCoordinator>,
    mut gate: ResMut<PointerGate>,
    mut mouse: ResMut<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut player: Query<&mut Controllable, With<Player>>,
) {
    if closures.read().count() == 0 {
        return;
    }

    coordinator.on_dialogue_closed();
    gate.reset();
    gate.consume_touches(touches.iter().map(|touch| touch.id()));
    mouse.reset_all();
    for mut controllable in &mut player {
        controllable.halt();
    }
    debug!("Dialogue closed; walk-away and close cooldown armed");
}

/// Turns activations into open requests or click-to-move targets.
pub fn resolve_activations(
    mut activations: MessageReader<Activation>,
    overlay: Res<DialogueOverlay>,
    content: Res<VillageContent>,
    mut coordinator: ResMut<InteractionCoordinator>,
    npcs: Query<&Transform, With<Npc>>,
    mut player: Query<&mut Controllable, With<Player>>,
    mut open_requests: MessageWriter<OpenDialogue>,
) {
    let npc_position = npcs.iter().next().map(|transform| transform.translation.truncate());
    let mut opened = false;

    for activation in activations.read() {
        let outcome = coordinator.resolve(activation, overlay.is_open() || opened, npc_position);
        let request = match outcome {
            TriggerOutcome::OpenHouse(key) => {
                let Some(house) = content.house(&key) else {
                    debug!("No resume content for house '{}'; trigger dropped", key);
                    continue;
                };
                DialogueContent::island(&key, house)
            }
            TriggerOutcome::OpenNpc => {
                let talked_before = coordinator.talked_to_npc();
                let Some(dialogue) = content
                    .npc()
                    .and_then(|npc| DialogueContent::npc(npc, talked_before))
                else {
                    debug!("No npc dialogue available; trigger dropped");
                    continue;
                };
                coordinator.mark_talked();
                dialogue
            }
            TriggerOutcome::MoveTo(target) => {
                if let Ok(mut controllable) = player.single_mut() {
                    controllable.move_target = Some(target);
                }
                continue;
            }
            TriggerOutcome::Ignored => {
                debug!("{:?} activation suppressed", activation.source);
                continue;
            }
        };

        open_requests.write(OpenDialogue { content: request });
        opened = true;
        for mut controllable in &mut player {
            controllable.halt();
        }
    }
}
