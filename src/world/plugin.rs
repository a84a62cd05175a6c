//! WorldPlugin builds the zone registry and spawns the static village scene.
use bevy::prelude::*;

use crate::{
    content::loader::VillageContent,
    world::{systems::spawn_village, zones::ZoneRegistry},
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        let zones = app
            .world()
            .get_resource::<VillageContent>()
            .map(|content| ZoneRegistry::from_map(&content.map))
            .unwrap_or_default();
        for zone in zones.iter() {
            debug!(
                "Zone '{}' ({}) at ({:.0}, {:.0}) size {:.0}x{:.0}",
                zone.key, zone.label, zone.center.x, zone.center.y, zone.size.x, zone.size.y
            );
        }

        app.insert_resource(zones)
            .add_systems(Startup, spawn_village);
    }
}
