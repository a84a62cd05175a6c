//! Systems related to NPC spawning, proximity, and the talk prompt.
use bevy::prelude::*;

use crate::{
    content::loader::VillageContent,
    core::plugin::SimulationClock,
    interaction::config::InteractionSettings,
    npc::{
        components::{Npc, NpcPrompt, NpcProximity, PromptPulse, ProximityTransition},
        events::NpcProximityChanged,
    },
    player::components::Player,
};

const NPC_SIZE: Vec2 = Vec2::new(20.0, 28.0);
const NPC_TINT: Color = Color::srgb(0.55, 0.35, 0.65);
const NAME_COLOR: Color = Color::srgb(1.0, 0.87, 0.0);
const LABEL_OFFSET: f32 = 24.0;

/// Spawns the village NPC at its map position with name and talk prompt.
pub fn spawn_village_npc(
    mut commands: Commands,
    content: Res<VillageContent>,
    settings: Res<InteractionSettings>,
) {
    let position = content.map.to_world(content.map.npc);
    let name = content.npc_name().to_string();

    let npc = commands
        .spawn((
            Sprite::from_color(NPC_TINT, NPC_SIZE),
            Transform::from_translation(position.extend(5.0)),
            Npc::new(name.clone(), settings.npc_radius),
            NpcProximity::default(),
            Name::new(format!("NPC {}", name)),
        ))
        .id();

    commands.entity(npc).with_children(|parent| {
        parent.spawn((
            Text2d::new(name.clone()),
            TextFont {
                font_size: 10.0,
                ..default()
            },
            TextColor(NAME_COLOR),
            Transform::from_xyz(0.0, LABEL_OFFSET, 1.0),
        ));
        parent.spawn((
            Text2d::new("[Space] Talk"),
            TextFont {
                font_size: 8.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_xyz(0.0, -LABEL_OFFSET, 1.0),
            Visibility::Hidden,
            NpcPrompt { owner: npc },
            PromptPulse::default(),
        ));
    });

    info!(
        "Spawned NPC {} at ({:.0}, {:.0}) with radius {:.0}",
        name, position.x, position.y, settings.npc_radius
    );
}

/// Recomputes NPC range from the player's current position every tick.
pub fn update_npc_proximity(
    player: Query<&Transform, With<Player>>,
    mut npcs: Query<(Entity, &Npc, &Transform, &mut NpcProximity), Without<Player>>,
    mut changes: MessageWriter<NpcProximityChanged>,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let player_position = player_transform.translation.truncate();

    for (entity, npc, transform, mut proximity) in &mut npcs {
        let distance = player_position.distance(transform.translation.truncate());
        if let Some(transition) = proximity.update(distance, npc.interaction_radius) {
            debug!("Player {:?} range of {}", transition, npc.display_name);
            changes.write(NpcProximityChanged {
                npc: entity,
                transition,
            });
        }
    }
}

/// Shows and pulses the talk prompt while the player is in range.
pub fn animate_npc_prompt(
    clock: Res<SimulationClock>,
    mut changes: MessageReader<NpcProximityChanged>,
    mut prompts: Query<(&NpcPrompt, &mut PromptPulse, &mut Visibility, &mut TextColor)>,
) {
    for change in changes.read() {
        for (prompt, mut pulse, mut visibility, _) in &mut prompts {
            if prompt.owner != change.npc {
                continue;
            }
            match change.transition {
                ProximityTransition::Entered => {
                    pulse.start();
                    *visibility = Visibility::Visible;
                }
                ProximityTransition::Exited => {
                    pulse.stop();
                    *visibility = Visibility::Hidden;
                }
            }
        }
    }

    for (_, mut pulse, _, mut color) in &mut prompts {
        pulse.tick(clock.last_scaled_delta());
        color.0.set_alpha(pulse.alpha());
    }
}
