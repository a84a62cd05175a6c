//! Movement Resolver: held keys and click-to-move targets into a velocity.
use std::f32::consts::FRAC_1_SQRT_2;

use bevy::prelude::*;

use crate::{input::components::DirectionInput, interaction::config::MovementTuning};

use super::components::{Controllable, MovementState};

/// Resolves this tick's velocity, writing state, facing, and target back.
///
/// Keyboard input always wins and discards any click-to-move target. With no
/// keys held the entity walks straight toward its target until it is within
/// the arrival threshold, then stops and forgets the target. The last step
/// toward a target is shortened so it lands on the target instead of passing it.
pub fn resolve_movement(
    controllable: &mut Controllable,
    position: Vec2,
    input: DirectionInput,
    tuning: &MovementTuning,
    delta_seconds: f32,
) -> Vec2 {
    let velocity = if input.any() {
        controllable.move_target = None;
        let mut axes = input.axes();
        if axes.x != 0.0 && axes.y != 0.0 {
            axes *= FRAC_1_SQRT_2;
        }
        axes * tuning.speed
    } else if let Some(target) = controllable.move_target {
        let offset = target - position;
        let distance = offset.length();
        if distance <= tuning.arrival_threshold {
            controllable.move_target = None;
            Vec2::ZERO
        } else if delta_seconds > 0.0 && distance <= tuning.speed * delta_seconds {
            offset / delta_seconds
        } else {
            let bearing = offset.y.atan2(offset.x);
            Vec2::new(bearing.cos(), bearing.sin()) * tuning.speed
        }
    } else {
        Vec2::ZERO
    };

    controllable.velocity = velocity;
    controllable.state = if velocity == Vec2::ZERO {
        MovementState::Idle
    } else {
        MovementState::Walking
    };
    controllable.face_along(velocity);
    velocity
}

/// Advances a position by a velocity and keeps it inside the map bounds.
pub fn integrate(position: Vec2, velocity: Vec2, delta_seconds: f32, half_extents: Vec2) -> Vec2 {
    (position + velocity * delta_seconds).clamp(-half_extents, half_extents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::components::Facing;

    const TUNING: MovementTuning = MovementTuning {
        speed: 120.0,
        arrival_threshold: 6.0,
    };
    const FRAME: f32 = 1.0 / 60.0;

    fn keys(up: bool, down: bool, left: bool, right: bool) -> DirectionInput {
        DirectionInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn diagonal_speed_matches_axial_speed() {
        for mask in 1u8..16 {
            let input = keys(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0);
            let mut controllable = Controllable::default();
            let velocity = resolve_movement(&mut controllable, Vec2::ZERO, input, &TUNING, FRAME);

            if input.axes() == Vec2::ZERO {
                assert_eq!(velocity, Vec2::ZERO, "opposing keys cancel for mask {mask}");
                assert_eq!(controllable.state, MovementState::Idle);
            } else {
                assert!(
                    (velocity.length() - TUNING.speed).abs() < 1e-3,
                    "mask {mask} produced speed {}",
                    velocity.length()
                );
                assert_eq!(controllable.state, MovementState::Walking);
            }
        }
    }

    #[test]
    fn keyboard_clears_move_target_in_every_state() {
        for state in [MovementState::Idle, MovementState::Walking] {
            let mut controllable = Controllable {
                state,
                move_target: Some(Vec2::new(200.0, 0.0)),
                ..Default::default()
            };
            let velocity =
                resolve_movement(&mut controllable, Vec2::ZERO, keys(true, false, false, false), &TUNING, FRAME);

            assert!(controllable.move_target.is_none());
            assert_eq!(velocity, Vec2::new(0.0, TUNING.speed));
            assert_eq!(controllable.facing, Facing::Up);
        }
    }

    #[test]
    fn walks_toward_target_then_arrives() {
        let mut controllable = Controllable {
            move_target: Some(Vec2::new(-100.0, 0.0)),
            ..Default::default()
        };

        let velocity =
            resolve_movement(&mut controllable, Vec2::ZERO, DirectionInput::default(), &TUNING, FRAME);
        assert!((velocity - Vec2::new(-TUNING.speed, 0.0)).length() < 1e-3);
        assert_eq!(controllable.facing, Facing::Left);
        assert_eq!(controllable.state, MovementState::Walking);

        let velocity = resolve_movement(
            &mut controllable,
            Vec2::new(-97.0, 2.0),
            DirectionInput::default(),
            &TUNING,
            FRAME,
        );
        assert_eq!(velocity, Vec2::ZERO);
        assert!(controllable.move_target.is_none());
        assert_eq!(controllable.state, MovementState::Idle);
        assert_eq!(controllable.facing, Facing::Left, "facing persists when stopping");
    }

    #[test]
    fn long_ticks_land_on_target_instead_of_oscillating() {
        let target = Vec2::new(20.0, 0.0);
        let mut controllable = Controllable {
            move_target: Some(target),
            ..Default::default()
        };
        let half = Vec2::new(400.0, 300.0);
        let mut position = Vec2::ZERO;

        for _ in 0..3 {
            let velocity =
                resolve_movement(&mut controllable, position, DirectionInput::default(), &TUNING, 0.25);
            position = integrate(position, velocity, 0.25, half);
        }

        assert!((position - target).length() < 1e-3, "ended at {position}");
        assert!(controllable.move_target.is_none());
        assert_eq!(controllable.state, MovementState::Idle);
    }

    #[test]
    fn idle_without_input_or_target() {
        let mut controllable = Controllable {
            facing: Facing::Right,
            velocity: Vec2::new(5.0, 0.0),
            ..Default::default()
        };
        let velocity =
            resolve_movement(&mut controllable, Vec2::ZERO, DirectionInput::default(), &TUNING, FRAME);

        assert_eq!(velocity, Vec2::ZERO);
        assert_eq!(controllable.velocity, Vec2::ZERO);
        assert_eq!(controllable.facing, Facing::Right);
    }

    #[test]
    fn integrate_clamps_to_bounds() {
        let half = Vec2::new(400.0, 300.0);
        assert_eq!(
            integrate(Vec2::new(395.0, 0.0), Vec2::new(120.0, 0.0), 0.5, half),
            Vec2::new(400.0, 0.0)
        );
        assert_eq!(
            integrate(Vec2::ZERO, Vec2::new(0.0, -120.0), 0.5, half),
            Vec2::new(0.0, -60.0)
        );
    }
}
