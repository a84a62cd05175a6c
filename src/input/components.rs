//! Resources holding per-tick input state after device normalization.
use std::collections::HashSet;

use bevy::prelude::*;

/// Held movement directions, arrow keys and WASD merged per direction.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionInput {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Unnormalized axis components in world space (y up), each in {-1, 0, 1}.
    pub fn axes(&self) -> Vec2 {
        let x = f32::from(u8::from(self.right)) - f32::from(u8::from(self.left));
        let y = f32::from(u8::from(self.up)) - f32::from(u8::from(self.down));
        Vec2::new(x, y)
    }
}

/// Consumed pointer state. Reset on every dialogue closure because the
/// release that ends a dismiss tap may never reach the world input path.
///
/// Touches still down when a dialogue closes belong to the gesture that closed
/// it; their release is swallowed instead of becoming a tap on the world.
#[derive(Resource, Debug, Default)]
pub struct PointerGate {
    primary_held: bool,
    consumed_touches: HashSet<u64>,
}

impl PointerGate {
    /// Records the current primary button state and reports a press edge.
    pub fn press_edge(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.primary_held;
        self.primary_held = pressed;
        edge
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_held(&self) -> bool {
        self.primary_held
    }

    pub fn reset(&mut self) {
        self.primary_held = false;
    }

    /// Marks touches that are still down as consumed by the overlay.
    pub fn consume_touches(&mut self, ids: impl IntoIterator<Item = u64>) {
        self.consumed_touches.extend(ids);
    }

    /// Forgets a touch that ended. Returns true if it had been consumed.
    pub fn release_touch(&mut self, id: u64) -> bool {
        self.consumed_touches.remove(&id)
    }

    /// Drops consumed touches that ended while world input was not sampled.
    pub fn retain_touches(&mut self, mut still_down: impl FnMut(u64) -> bool) {
        self.consumed_touches.retain(|id| still_down(*id));
    }
}

/// What kind of device the visitor is using, for prompt wording.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct InputDevice {
    pub touch_capable: bool,
}

/// True when a touch ended close enough to where it began to count as a tap.
pub fn is_tap(start: Vec2, end: Vec2, slop: f32) -> bool {
    let delta = (end - start).abs();
    delta.x < slop && delta.y < slop
}
