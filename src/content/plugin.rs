//! ContentPlugin loads static village content and tuning before any Startup system runs.
use bevy::prelude::*;

use crate::interaction::config::InteractionSettings;

use super::loader::VillageContent;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let settings = InteractionSettings::load_or_default();
        info!(
            "Interaction tuning: speed {:.0}, npc radius {:.0}, close cooldown {}ms",
            settings.movement.speed,
            settings.npc_radius,
            settings.close_cooldown.as_millis()
        );

        app.insert_resource(settings)
            .insert_resource(VillageContent::load_or_default());
    }
}
