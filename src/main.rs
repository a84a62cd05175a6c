use std::path::Path;

use bevy::prelude::*;

mod content;
mod core;
mod dialogue;
mod input;
mod interaction;
mod npc;
mod player;
mod ui;
mod world;

use crate::{
    content::ContentPlugin, core::CorePlugin, dialogue::DialoguePlugin, input::InputPlugin,
    interaction::InteractionPlugin, npc::NpcPlugin, player::PlayerPlugin, ui::UiPlugin,
    world::WorldPlugin,
};

const WINDOW_TITLE: &str = "Resume Village";
const BACKGROUND: Color = Color::srgb(0.42, 0.56, 0.14);

fn main() {
    load_village_env();

    App::new()
        .insert_resource(ClearColor(BACKGROUND))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (800, 600).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            CorePlugin::default(),
            ContentPlugin,
            // Reads tuning and content inserted by ContentPlugin.
            DialoguePlugin,
            WorldPlugin,
            InteractionPlugin,
            InputPlugin,
            PlayerPlugin,
            NpcPlugin,
            UiPlugin,
        ))
        .run();
}

fn load_village_env() {
    const ENV_FILE: &str = "village.env";

    let path = Path::new(ENV_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", ENV_FILE, err);
    }
}
