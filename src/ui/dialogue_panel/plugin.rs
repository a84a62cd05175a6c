// src/ui/dialogue_panel/plugin.rs
//
// UiPlugin coordinates the dialogue overlay presentation and the HUD prompt.

use bevy::prelude::*;

use crate::{core::TickSet, dialogue::systems::open_requested_dialogues, ui::prompt::PromptPlugin};

use super::components::DialoguePanelSettings;
use super::systems::{handle_overlay_buttons, present_dialogue_overlay, refresh_dialogue_text};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(DialoguePanelSettings::default())
            .add_plugins(PromptPlugin)
            .add_systems(Update, handle_overlay_buttons.in_set(TickSet::Input))
            .add_systems(
                Update,
                (present_dialogue_overlay, refresh_dialogue_text)
                    .chain()
                    .after(open_requested_dialogues)
                    .in_set(TickSet::Present),
            );
    }
}
