//! NPC plugin wiring the village NPC, its proximity edges, and its prompt.
use bevy::prelude::*;

use crate::{
    core::TickSet,
    npc::{
        events::NpcProximityChanged,
        systems::{animate_npc_prompt, spawn_village_npc, update_npc_proximity},
    },
};

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<NpcProximityChanged>()
            .add_systems(Startup, spawn_village_npc)
            .add_systems(Update, update_npc_proximity.in_set(TickSet::Proximity))
            .add_systems(Update, animate_npc_prompt.in_set(TickSet::Present));
    }
}
