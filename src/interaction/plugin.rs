//! InteractionPlugin runs the coordinator between proximity and presentation.
use bevy::prelude::*;

use crate::{core::TickSet, npc::systems::update_npc_proximity};

use super::{
    config::InteractionSettings,
    coordinator::InteractionCoordinator,
    systems::{handle_dialogue_closed, observe_proximity, resolve_activations, tick_close_cooldown},
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let coordinator = app
            .world()
            .get_resource::<InteractionSettings>()
            .map(InteractionCoordinator::from_settings)
            .unwrap_or_default();

        app.insert_resource(coordinator)
            .add_systems(
                Update,
                observe_proximity
                    .after(update_npc_proximity)
                    .in_set(TickSet::Proximity),
            )
            .add_systems(
                Update,
                (tick_close_cooldown, handle_dialogue_closed, resolve_activations)
                    .chain()
                    .in_set(TickSet::Trigger),
            );
    }
}
