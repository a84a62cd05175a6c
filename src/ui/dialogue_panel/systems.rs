// src/ui/dialogue_panel/systems.rs
//
// Systems for presenting the dialogue overlay and turning presses into commands.

use bevy::{ecs::hierarchy::ChildSpawnerCommands, prelude::*, ui::FocusPolicy};

use crate::{
    content::types::IslandCard,
    dialogue::{
        events::DialogueCommand,
        session::{DialogueContent, DialogueOverlay, DialogueSession, SessionPhase},
    },
};

use super::components::{
    DialogueHint, DialogueLineText, DialogueOverlayRoot, DialoguePanelSettings, OverlayAffordance,
};

// Visual constants
const BOX_COLOR: Color = Color::srgba(0.1, 0.1, 0.12, 0.95);
const BORDER_COLOR: Color = Color::srgb(0.85, 0.75, 0.45);
const TEXT_COLOR: Color = Color::WHITE;
const NAME_COLOR: Color = Color::srgb(1.0, 0.87, 0.0);
const MUTED_COLOR: Color = Color::srgb(0.7, 0.7, 0.72);
const CARD_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.06);
const CLOSE_GLYPH: &str = "\u{2715}";

/// Spawns the UI tree for a session that is still opening and activates it.
pub fn present_dialogue_overlay(
    mut commands: Commands,
    mut overlay: ResMut<DialogueOverlay>,
    settings: Res<DialoguePanelSettings>,
    asset_server: Option<Res<AssetServer>>,
) {
    let Some(session) = overlay.session() else {
        return;
    };
    if session.phase() != SessionPhase::Opening {
        return;
    }

    let id = session.id();
    let root = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Button,
            Interaction::None,
            BackgroundColor(Color::BLACK.with_alpha(settings.backdrop_alpha)),
            GlobalZIndex(10),
            OverlayAffordance::Backdrop,
            DialogueOverlayRoot,
            Name::new(format!("Overlay {}", id)),
        ))
        .with_children(|backdrop| match session.content() {
            DialogueContent::Npc {
                speaker, portrait, ..
            } => {
                let portrait = portrait
                    .as_deref()
                    .zip(asset_server.as_deref())
                    .map(|(key, assets)| assets.load(format!("portraits/{}.png", key)));
                spawn_npc_box(backdrop, &settings, session, speaker, portrait);
            }
            DialogueContent::Island { title, entries, .. } => {
                let cards: Vec<IslandCard> = entries.iter().map(|entry| entry.card()).collect();
                spawn_island_panel(backdrop, &settings, session, title, &cards);
            }
        })
        .id();

    overlay.mark_presented(root);
    debug!("Presented {} as {:?}", id, root);
}

/// Mirrors the typewriter and footer hint into their text nodes.
pub fn refresh_dialogue_text(
    overlay: Res<DialogueOverlay>,
    mut lines: Query<&mut Text, (With<DialogueLineText>, Without<DialogueHint>)>,
    mut hints: Query<&mut Text, (With<DialogueHint>, Without<DialogueLineText>)>,
) {
    if !overlay.is_changed() {
        return;
    }
    let Some(session) = overlay.session() else {
        return;
    };

    for mut text in &mut lines {
        if text.0 != session.visible_text() {
            text.0 = session.visible_text().to_string();
        }
    }
    for mut text in &mut hints {
        if text.0 != session.hint() {
            text.0 = session.hint().to_string();
        }
    }
}

/// Turns overlay presses into dialogue commands.
#[allow(clippy::type_complexity)]
pub fn handle_overlay_buttons(
    buttons: Query<(&Interaction, &OverlayAffordance), (Changed<Interaction>, With<Button>)>,
    mut commands: MessageWriter<DialogueCommand>,
) {
    for (interaction, affordance) in &buttons {
        if *interaction == Interaction::Pressed {
            commands.write(affordance.command());
        }
    }
}

fn close_button(parent: &mut ChildSpawnerCommands, settings: &DialoguePanelSettings) {
    parent
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(6.0),
                right: Val::Px(6.0),
                width: Val::Px(28.0),
                height: Val::Px(28.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Button,
            Interaction::None,
            OverlayAffordance::Close,
            Name::new("Overlay Close"),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(CLOSE_GLYPH),
                TextFont {
                    font_size: settings.name_font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

fn spawn_npc_box(
    backdrop: &mut ChildSpawnerCommands,
    settings: &DialoguePanelSettings,
    session: &DialogueSession,
    speaker: &str,
    portrait: Option<Handle<Image>>,
) {
    backdrop
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                width: Val::Px(settings.box_width),
                padding: UiRect::all(Val::Px(settings.padding)),
                border: UiRect::all(Val::Px(settings.border_width)),
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(12.0),
                ..default()
            },
            Button,
            Interaction::None,
            BackgroundColor(BOX_COLOR),
            BorderColor::from(BORDER_COLOR),
            OverlayAffordance::Advance,
            Name::new("Dialogue Box"),
        ))
        .with_children(|dialogue_box| {
            if let Some(image) = portrait {
                dialogue_box.spawn((
                    Node {
                        width: Val::Px(settings.portrait_size),
                        height: Val::Px(settings.portrait_size),
                        flex_shrink: 0.0,
                        ..default()
                    },
                    ImageNode::new(image),
                ));
            }

            dialogue_box
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    flex_grow: 1.0,
                    row_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((
                        Text::new(speaker),
                        TextFont {
                            font_size: settings.name_font_size,
                            ..default()
                        },
                        TextColor(NAME_COLOR),
                    ));
                    column.spawn((
                        Text::new(session.visible_text()),
                        TextFont {
                            font_size: settings.text_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        DialogueLineText,
                    ));
                    column.spawn((
                        Text::new(session.hint()),
                        TextFont {
                            font_size: settings.hint_font_size,
                            ..default()
                        },
                        TextColor(MUTED_COLOR),
                        DialogueHint,
                    ));
                });

            close_button(dialogue_box, settings);
        });
}

fn spawn_island_panel(
    backdrop: &mut ChildSpawnerCommands,
    settings: &DialoguePanelSettings,
    session: &DialogueSession,
    title: &str,
    cards: &[IslandCard],
) {
    backdrop
        .spawn((
            Node {
                align_self: AlignSelf::Center,
                width: Val::Px(settings.panel_width),
                max_height: Val::Percent(settings.panel_max_height_percent),
                padding: UiRect::all(Val::Px(settings.padding)),
                border: UiRect::all(Val::Px(settings.border_width)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                overflow: Overflow::clip_y(),
                ..default()
            },
            // Presses inside the panel must not reach the backdrop.
            FocusPolicy::Block,
            BackgroundColor(BOX_COLOR),
            BorderColor::from(BORDER_COLOR),
            Name::new("Island Panel"),
        ))
        .with_children(|panel| {
            close_button(panel, settings);

            panel.spawn((
                Text::new(title),
                TextFont {
                    font_size: settings.title_font_size,
                    ..default()
                },
                TextColor(NAME_COLOR),
            ));

            for card in cards {
                spawn_card(panel, settings, card);
            }

            panel
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(10.0)),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    Button,
                    Interaction::None,
                    BackgroundColor(CARD_COLOR),
                    OverlayAffordance::Close,
                    Name::new("Island Close Bar"),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Text::new(session.hint()),
                        TextFont {
                            font_size: settings.hint_font_size,
                            ..default()
                        },
                        TextColor(MUTED_COLOR),
                    ));
                });
        });
}

fn spawn_card(panel: &mut ChildSpawnerCommands, settings: &DialoguePanelSettings, card: &IslandCard) {
    panel
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(CARD_COLOR),
        ))
        .with_children(|body| {
            let text = |content: String, size: f32, color: Color| {
                (
                    Text::new(content),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(color),
                )
            };

            if !card.heading.is_empty() {
                body.spawn(text(card.heading.clone(), settings.name_font_size, TEXT_COLOR));
            }
            if let Some(subtitle) = &card.subtitle {
                body.spawn(text(subtitle.clone(), settings.hint_font_size, MUTED_COLOR));
            }
            for paragraph in card.paragraphs.iter().filter(|paragraph| !paragraph.is_empty()) {
                body.spawn(text(paragraph.clone(), settings.text_font_size, TEXT_COLOR));
            }
            for bullet in &card.bullets {
                body.spawn(text(format!("\u{2022} {}", bullet), settings.text_font_size, TEXT_COLOR));
            }
        });
}
