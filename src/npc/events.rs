//! NPC-specific messages broadcast between systems.
use bevy::prelude::{Entity, Message};

use super::components::ProximityTransition;

/// Fired when the player enters or leaves an NPC's interaction radius.
#[derive(Message, Debug, Clone, Copy)]
pub struct NpcProximityChanged {
    pub npc: Entity,
    pub transition: ProximityTransition,
}
