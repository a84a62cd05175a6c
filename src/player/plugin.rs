//! Player plugin wiring spawn, movement, and facing.
use bevy::prelude::*;

use crate::{
    core::TickSet,
    player::systems::{apply_facing, move_player, spawn_player},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player)
            .add_systems(Update, move_player.in_set(TickSet::Movement))
            .add_systems(Update, apply_facing.in_set(TickSet::Present));
    }
}
