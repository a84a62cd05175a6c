//! Systems for the world module.
use bevy::prelude::*;

use crate::{
    content::{loader::VillageContent, types::MapPoint},
    world::{
        components::VillageCamera,
        zones::ZoneRegistry,
    },
};

const GROUND_COLOR: Color = Color::srgb(0.42, 0.56, 0.14);
const HOUSE_COLOR: Color = Color::srgb(0.62, 0.38, 0.24);
const HOUSE_SIZE: Vec2 = Vec2::new(80.0, 64.0);
const LABEL_COLOR: Color = Color::srgb(1.0, 0.87, 0.0);

/// Spawns the camera, ground, and one house per map entry.
pub fn spawn_village(mut commands: Commands, content: Res<VillageContent>, zones: Res<ZoneRegistry>) {
    let map = &content.map;

    commands.spawn((Camera2d, VillageCamera));

    commands.spawn((
        Sprite::from_color(GROUND_COLOR, Vec2::new(map.width, map.height)),
        Transform::from_xyz(0.0, 0.0, -10.0),
        Name::new("Ground"),
    ));

    for (key, house) in &map.houses {
        let anchor = map.to_world(MapPoint::new(house.x, house.y));
        commands
            .spawn((
                Sprite::from_color(HOUSE_COLOR, HOUSE_SIZE),
                Transform::from_translation(anchor.extend(0.0)),
                Name::new(format!("House {}", key)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(house.label.clone()),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(LABEL_COLOR),
                    Transform::from_xyz(0.0, HOUSE_SIZE.y / 2.0 + 10.0, 1.0),
                ));
            });
    }

    info!(
        "Village spawned: {}x{} map, {} interaction zones",
        map.width,
        map.height,
        zones.len()
    );
}
