//! Device sampling and routing. While a dialogue is open only overlay keys are
//! routed; otherwise devices produce world activations.
use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    dialogue::{events::DialogueCommand, session::DialogueOverlay},
    interaction::config::InteractionSettings,
    world::components::VillageCamera,
};

use super::{
    components::{is_tap, DirectionInput, InputDevice, PointerGate},
    events::{Activation, PointerPress},
};

const INTERACT_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::Enter];

/// Merges arrow keys and WASD into held directions.
pub fn sample_directions(keyboard: Res<ButtonInput<KeyCode>>, mut directions: ResMut<DirectionInput>) {
    let held = |primary: KeyCode, alternate: KeyCode| keyboard.any_pressed([primary, alternate]);
    let sampled = DirectionInput {
        up: held(KeyCode::ArrowUp, KeyCode::KeyW),
        down: held(KeyCode::ArrowDown, KeyCode::KeyS),
        left: held(KeyCode::ArrowLeft, KeyCode::KeyA),
        right: held(KeyCode::ArrowRight, KeyCode::KeyD),
    };
    directions.set_if_neq(sampled);
}

/// Maps overlay keys to a single dialogue command per tick.
pub fn route_overlay_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    overlay: Res<DialogueOverlay>,
    mut commands: MessageWriter<DialogueCommand>,
) {
    let Some(mode) = overlay.session().map(|session| session.mode()) else {
        return;
    };
    if let Some(command) = keyboard
        .get_just_pressed()
        .find_map(|key| mode.command_for_key(*key))
    {
        commands.write(command);
    }
}

pub fn emit_key_activations(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut activations: MessageWriter<Activation>,
) {
    if keyboard.any_just_pressed(INTERACT_KEYS) {
        activations.write(Activation::key());
    }
}

/// Samples touch taps and primary mouse press edges in viewport space.
///
/// A mouse press in the same tick as a touch tap is treated as the browser's
/// synthesized ghost click and dropped. Presses over UI nodes are left to the UI.
/// Touches consumed by a dialogue closure end without producing a tap.
pub fn sample_pointer_presses(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    settings: Res<InteractionSettings>,
    mut gate: ResMut<PointerGate>,
    mut device: ResMut<InputDevice>,
    windows: Query<&Window, With<PrimaryWindow>>,
    ui_nodes: Query<&Interaction>,
    mut presses: MessageWriter<PointerPress>,
) {
    let mouse_edge = gate.press_edge(mouse.pressed(MouseButton::Left));
    let over_ui = ui_nodes
        .iter()
        .any(|interaction| *interaction != Interaction::None);

    let mut touched = false;
    for touch in touches.iter_just_released() {
        touched = true;
        if !device.touch_capable {
            device.touch_capable = true;
            info!("Touch input detected; prompts switch to tap wording");
        }
        if gate.release_touch(touch.id()) {
            debug!("Touch {} ended the gesture that closed a dialogue", touch.id());
            continue;
        }
        if over_ui || !is_tap(touch.start_position(), touch.position(), settings.tap_slop) {
            continue;
        }
        presses.write(PointerPress {
            viewport_position: touch.position(),
        });
    }
    gate.retain_touches(|id| touches.get_pressed(id).is_some());

    if !mouse_edge || over_ui {
        return;
    }
    if touched {
        debug!("Dropped ghost click following a touch tap");
        return;
    }
    let Some(cursor) = windows.single().ok().and_then(Window::cursor_position) else {
        return;
    };
    presses.write(PointerPress {
        viewport_position: cursor,
    });
}

/// Projects sampled presses through the village camera into world activations.
pub fn project_pointer_presses(
    mut presses: MessageReader<PointerPress>,
    cameras: Query<(&Camera, &GlobalTransform), With<VillageCamera>>,
    mut activations: MessageWriter<Activation>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        presses.clear();
        return;
    };
    for press in presses.read() {
        match camera.viewport_to_world_2d(camera_transform, press.viewport_position) {
            Ok(world) => {
                activations.write(Activation::pointer(world));
            }
            Err(error) => debug!("Pointer press not projected: {:?}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::input::touch::{touch_screen_input_system, TouchInput, TouchPhase};

    use super::*;
    use crate::dialogue::{session::DialogueContent, systems::dialogue_is_open};

    #[derive(Resource, Default)]
    struct Routed {
        commands: Vec<DialogueCommand>,
        activations: usize,
    }

    fn record(
        mut commands: MessageReader<DialogueCommand>,
        mut activations: MessageReader<Activation>,
        mut routed: ResMut<Routed>,
    ) {
        routed.commands.extend(commands.read().copied());
        routed.activations += activations.read().count();
    }

    fn routing_app() -> App {
        let mut app = App::new();
        app.add_message::<DialogueCommand>()
            .add_message::<Activation>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<DirectionInput>()
            .insert_resource(DialogueOverlay::default())
            .init_resource::<Routed>()
            .add_systems(
                Update,
                (
                    sample_directions,
                    route_overlay_keys,
                    emit_key_activations.run_if(not(dialogue_is_open)),
                    record,
                )
                    .chain(),
            );
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.clear();
        keyboard.press(key);
    }

    fn open_island(app: &mut App) {
        let mut overlay = app.world_mut().resource_mut::<DialogueOverlay>();
        let _ = overlay.open(DialogueContent::Island {
            title: "Education".into(),
            kind: crate::content::types::HouseKind::Education,
            entries: Vec::new(),
        });
    }

    #[test]
    fn closed_overlay_turns_space_into_activation() {
        let mut app = routing_app();
        press(&mut app, KeyCode::Space);
        app.update();

        let routed = app.world().resource::<Routed>();
        assert_eq!(routed.activations, 1);
        assert!(routed.commands.is_empty());
    }

    #[test]
    fn open_overlay_routes_keys_to_commands_only() {
        let mut app = routing_app();
        open_island(&mut app);

        press(&mut app, KeyCode::Space);
        app.update();
        press(&mut app, KeyCode::Enter);
        app.update();

        let routed = app.world().resource::<Routed>();
        assert_eq!(routed.activations, 0);
        assert_eq!(routed.commands, vec![DialogueCommand::Close]);
    }

    #[test]
    fn wasd_and_arrows_merge() {
        let mut app = routing_app();
        {
            let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keyboard.press(KeyCode::KeyW);
            keyboard.press(KeyCode::ArrowLeft);
        }
        app.update();

        let directions = *app.world().resource::<DirectionInput>();
        assert!(directions.up && directions.left);
        assert!(!directions.down && !directions.right);
    }

    #[derive(Resource, Default)]
    struct Presses(Vec<Vec2>);

    fn record_presses(mut reader: MessageReader<PointerPress>, mut presses: ResMut<Presses>) {
        presses
            .0
            .extend(reader.read().map(|press| press.viewport_position));
    }

    const CURSOR: Vec2 = Vec2::new(120.0, 80.0);

    fn pointer_app() -> App {
        let mut app = App::new();
        app.add_message::<TouchInput>()
            .add_message::<PointerPress>()
            .init_resource::<Touches>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<PointerGate>()
            .init_resource::<InputDevice>()
            .insert_resource(InteractionSettings::default())
            .init_resource::<Presses>()
            .add_systems(PreUpdate, touch_screen_input_system)
            .add_systems(Update, (sample_pointer_presses, record_presses).chain());

        let mut window = Window::default();
        window.set_cursor_position(Some(CURSOR));
        app.world_mut().spawn((window, PrimaryWindow));
        app
    }

    fn touch(app: &mut App, id: u64, phase: TouchPhase, position: Vec2) {
        app.world_mut().write_message(TouchInput {
            phase,
            position,
            window: Entity::PLACEHOLDER,
            force: None,
            id,
        });
    }

    fn tap(app: &mut App, id: u64, position: Vec2) {
        touch(app, id, TouchPhase::Started, position);
        touch(app, id, TouchPhase::Ended, position);
    }

    fn presses(app: &App) -> Vec<Vec2> {
        app.world().resource::<Presses>().0.clone()
    }

    #[test]
    fn touch_tap_within_slop_becomes_press() {
        let mut app = pointer_app();
        touch(&mut app, 1, TouchPhase::Started, Vec2::new(100.0, 100.0));
        app.update();
        touch(&mut app, 1, TouchPhase::Ended, Vec2::new(110.0, 95.0));
        app.update();

        assert_eq!(presses(&app), vec![Vec2::new(110.0, 95.0)]);
        assert!(app.world().resource::<InputDevice>().touch_capable);
    }

    #[test]
    fn dragged_touch_is_not_a_tap() {
        let mut app = pointer_app();
        touch(&mut app, 1, TouchPhase::Started, Vec2::new(100.0, 100.0));
        app.update();
        touch(&mut app, 1, TouchPhase::Ended, Vec2::new(150.0, 100.0));
        app.update();

        assert!(presses(&app).is_empty());
    }

    #[test]
    fn mouse_press_edge_samples_cursor_once() {
        let mut app = pointer_app();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        app.update();

        assert_eq!(presses(&app), vec![CURSOR]);
    }

    #[test]
    fn mouse_press_in_touch_tap_tick_is_dropped() {
        let mut app = pointer_app();
        tap(&mut app, 1, Vec2::new(300.0, 200.0));
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert_eq!(presses(&app), vec![Vec2::new(300.0, 200.0)]);
    }

    #[test]
    fn presses_over_ui_nodes_are_left_to_the_ui() {
        let mut app = pointer_app();
        app.world_mut().spawn(Interaction::Pressed);

        tap(&mut app, 1, Vec2::new(300.0, 200.0));
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert!(presses(&app).is_empty());
    }

    #[test]
    fn consumed_touch_ends_without_a_press() {
        let mut app = pointer_app();
        touch(&mut app, 5, TouchPhase::Started, Vec2::new(50.0, 50.0));
        app.update();
        app.world_mut()
            .resource_mut::<PointerGate>()
            .consume_touches([5]);

        touch(&mut app, 5, TouchPhase::Ended, Vec2::new(50.0, 50.0));
        app.update();
        assert!(presses(&app).is_empty());

        tap(&mut app, 5, Vec2::new(60.0, 60.0));
        app.update();
        assert_eq!(presses(&app), vec![Vec2::new(60.0, 60.0)]);
    }
}
