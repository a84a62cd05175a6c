// src/ui/dialogue_panel/components.rs
//
// Components and resources for the dialogue overlay UI.

use bevy::prelude::*;

use crate::dialogue::events::DialogueCommand;

/// Root of the overlay tree (the full-screen backdrop). Despawned when the
/// session closes.
#[derive(Component, Debug)]
pub struct DialogueOverlayRoot;

/// A pressable region of the overlay. Every dismiss path goes through one of these.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAffordance {
    /// The ✕ button or the island close bar.
    Close,
    /// The npc dialogue box.
    Advance,
    /// Empty space around the box or panel.
    Backdrop,
}

impl OverlayAffordance {
    pub fn command(self) -> DialogueCommand {
        match self {
            Self::Advance => DialogueCommand::Advance,
            Self::Close | Self::Backdrop => DialogueCommand::Close,
        }
    }
}

/// Text node showing the typewriter's visible portion.
#[derive(Component, Debug)]
pub struct DialogueLineText;

/// Footer hint under the npc line.
#[derive(Component, Debug)]
pub struct DialogueHint;

/// Layout and typography for the overlay.
#[derive(Resource, Debug)]
pub struct DialoguePanelSettings {
    /// Backdrop dimming alpha.
    pub backdrop_alpha: f32,

    /// Npc dialogue box width (pixels).
    pub box_width: f32,

    /// Island panel width (pixels).
    pub panel_width: f32,

    /// Island panel max height as a share of the window.
    pub panel_max_height_percent: f32,

    /// Padding inside box and panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Offset of the npc box from the bottom edge (pixels).
    pub bottom_offset: f32,

    /// Portrait edge length (pixels).
    pub portrait_size: f32,

    pub title_font_size: f32,
    pub name_font_size: f32,
    pub text_font_size: f32,
    pub hint_font_size: f32,
}

impl Default for DialoguePanelSettings {
    fn default() -> Self {
        Self {
            backdrop_alpha: 0.45,
            box_width: 560.0,
            panel_width: 520.0,
            panel_max_height_percent: 80.0,
            padding: 14.0,
            border_width: 2.0,
            bottom_offset: 24.0,
            portrait_size: 64.0,
            title_font_size: 20.0,
            name_font_size: 16.0,
            text_font_size: 14.0,
            hint_font_size: 11.0,
        }
    }
}
