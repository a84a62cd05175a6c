//! Systems spawning and moving the controllable player.
use bevy::prelude::*;

use crate::{
    content::loader::VillageContent,
    core::plugin::SimulationClock,
    dialogue::session::DialogueOverlay,
    input::components::DirectionInput,
    interaction::config::InteractionSettings,
    player::{
        components::{Controllable, Facing, Player},
        movement::{integrate, resolve_movement},
    },
};

const PLAYER_SIZE: Vec2 = Vec2::new(16.0, 24.0);
const PLAYER_TINT: Color = Color::srgb(0.25, 0.45, 0.85);
const PLAYER_DEPTH: f32 = 10.0;

/// Spawns the player at the map's spawn point.
pub fn spawn_player(mut commands: Commands, content: Res<VillageContent>) {
    let spawn = content.map.to_world(content.map.spawn);
    commands.spawn((
        Sprite::from_color(PLAYER_TINT, PLAYER_SIZE),
        Transform::from_translation(spawn.extend(PLAYER_DEPTH)),
        Player,
        Controllable::default(),
        Name::new("Player"),
    ));
    info!("Player spawned at ({:.0}, {:.0})", spawn.x, spawn.y);
}

/// Runs the Movement Resolver and integrates the result. Movement is frozen
/// while a dialogue is open.
pub fn move_player(
    clock: Res<SimulationClock>,
    directions: Res<DirectionInput>,
    overlay: Res<DialogueOverlay>,
    settings: Res<InteractionSettings>,
    content: Res<VillageContent>,
    mut player: Query<(&mut Controllable, &mut Transform), With<Player>>,
) {
    let Ok((mut controllable, mut transform)) = player.single_mut() else {
        return;
    };

    if overlay.is_open() {
        controllable.halt();
        return;
    }

    let position = transform.translation.truncate();
    let delta_seconds = clock.last_scaled_delta().as_secs_f32();
    let velocity = resolve_movement(
        &mut controllable,
        position,
        *directions,
        &settings.movement,
        delta_seconds,
    );
    if velocity == Vec2::ZERO {
        return;
    }

    let next = integrate(position, velocity, delta_seconds, content.map.half_extents());
    transform.translation = next.extend(transform.translation.z);
}

/// Mirrors the sprite when facing left.
pub fn apply_facing(mut player: Query<(&Controllable, &mut Sprite), (With<Player>, Changed<Controllable>)>) {
    for (controllable, mut sprite) in &mut player {
        let flip = controllable.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
