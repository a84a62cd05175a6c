//! Normalized interaction triggers produced by the input layer.
use bevy::prelude::{Message, Vec2};

/// Which device path produced an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    /// Space or Enter press edge.
    Key,
    /// Primary mouse press or touch tap on the world.
    Pointer,
    /// Press on the HUD interaction prompt.
    Prompt,
}

/// A single "interact" request. Pointer activations carry their world position.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub source: ActivationSource,
    pub world_position: Option<Vec2>,
}

impl Activation {
    pub fn key() -> Self {
        Self {
            source: ActivationSource::Key,
            world_position: None,
        }
    }

    pub fn pointer(world_position: Vec2) -> Self {
        Self {
            source: ActivationSource::Pointer,
            world_position: Some(world_position),
        }
    }

    pub fn prompt() -> Self {
        Self {
            source: ActivationSource::Prompt,
            world_position: None,
        }
    }
}

/// A primary mouse press edge or touch tap in viewport coordinates, before it
/// is projected through the village camera.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PointerPress {
    pub viewport_position: Vec2,
}
