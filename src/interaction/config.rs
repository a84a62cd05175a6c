//! Interaction tuning loaded from `config/interaction.toml`.
use std::{env, fs, time::Duration};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/interaction.toml";
const CONFIG_PATH_VAR: &str = "VILLAGE_CONFIG_PATH";
const MIN_INTERVAL_MS: u64 = 1;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawInteractionConfig {
    #[serde(default)]
    movement: RawMovementSection,
    #[serde(default)]
    proximity: RawProximitySection,
    #[serde(default)]
    dialogue: RawDialogueSection,
    #[serde(default)]
    input: RawInputSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovementSection {
    speed: f32,
    arrival_threshold: f32,
}

impl Default for RawMovementSection {
    fn default() -> Self {
        Self {
            speed: 120.0,
            arrival_threshold: 6.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawProximitySection {
    npc_radius: f32,
    npc_tap_radius: f32,
}

impl Default for RawProximitySection {
    fn default() -> Self {
        Self {
            npc_radius: 50.0,
            npc_tap_radius: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawDialogueSection {
    reveal_interval_ms: u64,
    close_cooldown_ms: u64,
}

impl Default for RawDialogueSection {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 30,
            close_cooldown_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInputSection {
    tap_slop_px: f32,
}

impl Default for RawInputSection {
    fn default() -> Self {
        Self { tap_slop_px: 20.0 }
    }
}

/// Movement Resolver constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    /// World units per second, equal for axial and diagonal movement.
    pub speed: f32,
    /// Click-to-move targets closer than this count as reached.
    pub arrival_threshold: f32,
}

/// Tunable parameters for movement, proximity, dialogue pacing, and input.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InteractionSettings {
    pub movement: MovementTuning,
    pub npc_radius: f32,
    pub npc_tap_radius: f32,
    pub reveal_interval: Duration,
    pub close_cooldown: Duration,
    pub tap_slop: f32,
}

impl InteractionSettings {
    pub fn load_or_default() -> Self {
        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| CONFIG_PATH.to_string());
        match fs::read_to_string(&path) {
            Ok(data) => match Self::from_toml_str(&data) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        path, err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    path, err
                );
                Self::default()
            }
        }
    }

    pub fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawInteractionConfig>(data).map(Into::into)
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        RawInteractionConfig::default().into()
    }
}

impl From<RawInteractionConfig> for InteractionSettings {
    fn from(value: RawInteractionConfig) -> Self {
        let movement = value.movement;
        let proximity = value.proximity;
        let dialogue = value.dialogue;

        Self {
            movement: MovementTuning {
                speed: movement.speed.max(0.0),
                arrival_threshold: movement.arrival_threshold.max(0.0),
            },
            npc_radius: proximity.npc_radius.max(0.0),
            npc_tap_radius: proximity.npc_tap_radius.max(0.0),
            reveal_interval: Duration::from_millis(dialogue.reveal_interval_ms.max(MIN_INTERVAL_MS)),
            close_cooldown: Duration::from_millis(dialogue.close_cooldown_ms),
            tap_slop: value.input.tap_slop_px.max(0.0),
        }
    }
}
