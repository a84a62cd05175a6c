// src/ui/prompt/systems.rs
//
// Systems keeping the HUD prompt in sync with the coordinator and routing its presses.

use bevy::prelude::*;

use crate::{
    dialogue::session::DialogueOverlay,
    input::{components::InputDevice, events::Activation},
    interaction::coordinator::InteractionCoordinator,
    world::zones::ZoneRegistry,
};

use super::components::{InteractionPrompt, InteractionPromptText};

const PROMPT_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.67);
const PROMPT_BOTTOM: f32 = 40.0;
const PROMPT_FONT_SIZE: f32 = 12.0;

pub fn spawn_interaction_prompt(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(PROMPT_BOTTOM),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Name::new("Interaction Prompt Row"),
        ))
        .with_children(|row| {
            row.spawn((
                Node {
                    padding: UiRect::axes(Val::Px(6.0), Val::Px(4.0)),
                    ..default()
                },
                Button,
                Interaction::None,
                BackgroundColor(PROMPT_BACKGROUND),
                Visibility::Hidden,
                InteractionPrompt,
                Name::new("Interaction Prompt"),
            ))
            .with_children(|prompt| {
                prompt.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: PROMPT_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    InteractionPromptText,
                ));
            });
        });
}

/// Shows the prompt while a zone or the NPC is in range and no dialogue is open.
pub fn refresh_interaction_prompt(
    coordinator: Res<InteractionCoordinator>,
    overlay: Res<DialogueOverlay>,
    zones: Res<ZoneRegistry>,
    device: Res<InputDevice>,
    mut prompts: Query<&mut Visibility, With<InteractionPrompt>>,
    mut texts: Query<&mut Text, With<InteractionPromptText>>,
) {
    let label = coordinator
        .active_zone()
        .and_then(|key| zones.get(key))
        .map(|zone| zone.label.as_str());
    let message = if overlay.is_open() {
        None
    } else {
        coordinator.prompt(label, device.touch_capable)
    };

    let visibility = if message.is_some() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut current in &mut prompts {
        current.set_if_neq(visibility);
    }

    if let Some(message) = message {
        for mut text in &mut texts {
            if text.0 != message {
                text.0 = message.clone();
            }
        }
    }
}

/// Presses on the visible prompt count as an activation.
#[allow(clippy::type_complexity)]
pub fn emit_prompt_activations(
    prompts: Query<(&Interaction, &Visibility), (Changed<Interaction>, With<InteractionPrompt>)>,
    mut activations: MessageWriter<Activation>,
) {
    for (interaction, visibility) in &prompts {
        if *interaction == Interaction::Pressed && *visibility != Visibility::Hidden {
            activations.write(Activation::prompt());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{content::types::MapDescriptor, input::events::ActivationSource};

    fn prompt_app() -> App {
        let mut app = App::new();
        app.insert_resource(InteractionCoordinator::new(Duration::from_millis(200), 60.0))
            .insert_resource(DialogueOverlay::default())
            .insert_resource(ZoneRegistry::from_map(&MapDescriptor::default()))
            .insert_resource(InputDevice::default())
            .add_systems(Startup, spawn_interaction_prompt)
            .add_systems(Update, refresh_interaction_prompt);
        app
    }

    fn prompt_state(app: &mut App) -> (Visibility, String) {
        let world = app.world_mut();
        let visibility = world
            .query_filtered::<&Visibility, With<InteractionPrompt>>()
            .iter(world)
            .next()
            .copied()
            .unwrap_or(Visibility::Inherited);
        let text = world
            .query_filtered::<&Text, With<InteractionPromptText>>()
            .iter(world)
            .next()
            .map(|text| text.0.clone())
            .unwrap_or_default();
        (visibility, text)
    }

    #[test]
    fn prompt_shows_zone_label_and_hides_when_out_of_range() {
        let mut app = prompt_app();
        app.update();
        assert_eq!(prompt_state(&mut app).0, Visibility::Hidden);

        app.world_mut()
            .resource_mut::<InteractionCoordinator>()
            .observe(Some("workExperience"), false);
        app.update();
        assert_eq!(
            prompt_state(&mut app),
            (
                Visibility::Inherited,
                "Press SPACE to enter Work Experience".to_string()
            )
        );

        app.world_mut()
            .resource_mut::<InteractionCoordinator>()
            .observe(None, false);
        app.update();
        assert_eq!(prompt_state(&mut app).0, Visibility::Hidden);
    }

    #[test]
    fn touch_devices_get_tap_wording() {
        let mut app = prompt_app();
        app.world_mut().resource_mut::<InputDevice>().touch_capable = true;
        app.world_mut()
            .resource_mut::<InteractionCoordinator>()
            .observe(None, true);
        app.update();

        assert_eq!(prompt_state(&mut app).1, "Tap to talk");
    }

    #[derive(Resource, Default)]
    struct PromptActivations(Vec<ActivationSource>);

    fn record_activations(
        mut reader: MessageReader<Activation>,
        mut recorded: ResMut<PromptActivations>,
    ) {
        recorded.0.extend(reader.read().map(|activation| activation.source));
    }

    fn set_prompt(app: &mut App, prompt: Entity, interaction: Interaction, visibility: Visibility) {
        let mut entity = app.world_mut().entity_mut(prompt);
        entity.insert((interaction, visibility));
    }

    #[test]
    fn only_presses_on_a_visible_prompt_activate() {
        let mut app = App::new();
        app.add_message::<Activation>()
            .init_resource::<PromptActivations>()
            .add_systems(Update, (emit_prompt_activations, record_activations).chain());
        let prompt = app
            .world_mut()
            .spawn((InteractionPrompt, Interaction::Pressed, Visibility::Hidden))
            .id();

        app.update();
        assert!(app.world().resource::<PromptActivations>().0.is_empty(), "hidden prompt");

        set_prompt(&mut app, prompt, Interaction::Hovered, Visibility::Inherited);
        app.update();
        assert!(app.world().resource::<PromptActivations>().0.is_empty(), "hover only");

        set_prompt(&mut app, prompt, Interaction::Pressed, Visibility::Inherited);
        app.update();
        app.update();
        assert_eq!(
            app.world().resource::<PromptActivations>().0,
            vec![ActivationSource::Prompt]
        );
    }
}
