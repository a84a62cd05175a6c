//! Components for the controllable player entity.
use bevy::prelude::*;

/// Marker component identifying the player entity.
#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing implied by a velocity; horizontal wins, zero keeps none.
    pub fn from_velocity(velocity: Vec2) -> Option<Self> {
        if velocity.x < 0.0 {
            Some(Self::Left)
        } else if velocity.x > 0.0 {
            Some(Self::Right)
        } else if velocity.y > 0.0 {
            Some(Self::Up)
        } else if velocity.y < 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementState {
    #[default]
    Idle,
    Walking,
}

/// Movement state written once per tick by the Movement Resolver.
#[derive(Component, Debug, Clone, Default)]
pub struct Controllable {
    pub facing: Facing,
    pub state: MovementState,
    /// Click-to-move destination in world space.
    pub move_target: Option<Vec2>,
    pub velocity: Vec2,
}

impl Controllable {
    /// Stops in place, dropping any click-to-move target. Facing is kept.
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        self.state = MovementState::Idle;
        self.move_target = None;
    }

    pub(crate) fn face_along(&mut self, velocity: Vec2) {
        if let Some(facing) = Facing::from_velocity(velocity) {
            self.facing = facing;
        }
    }
}
