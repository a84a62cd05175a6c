//! Components used by the world module.
use bevy::prelude::*;

/// Marker component for the 2D camera that frames the village.
/// Pointer positions are projected into the world through it.
#[derive(Component, Default)]
pub struct VillageCamera;
