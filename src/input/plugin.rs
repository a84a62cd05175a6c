//! InputPlugin normalizes keyboard, mouse, and touch into per-tick state and messages.
use std::env;

use bevy::prelude::*;

use crate::{
    core::TickSet,
    dialogue::systems::dialogue_is_open,
};

use super::{
    components::{DirectionInput, InputDevice, PointerGate},
    events::{Activation, PointerPress},
    systems::{
        emit_key_activations, project_pointer_presses, route_overlay_keys, sample_directions,
        sample_pointer_presses,
    },
};

const FORCE_TOUCH_VAR: &str = "VILLAGE_FORCE_TOUCH";

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        let touch_capable = env::var(FORCE_TOUCH_VAR)
            .map(|value| !matches!(value.trim(), "" | "0" | "false"))
            .unwrap_or(false);
        if touch_capable {
            info!("{} set; using touch prompt wording", FORCE_TOUCH_VAR);
        }

        app.add_message::<Activation>()
            .add_message::<PointerPress>()
            .init_resource::<DirectionInput>()
            .init_resource::<PointerGate>()
            .insert_resource(InputDevice { touch_capable })
            .add_systems(
                Update,
                (
                    sample_directions,
                    route_overlay_keys.run_if(dialogue_is_open),
                    (
                        emit_key_activations,
                        (sample_pointer_presses, project_pointer_presses).chain(),
                    )
                        .run_if(not(dialogue_is_open)),
                )
                    .in_set(TickSet::Input),
            );
    }
}
