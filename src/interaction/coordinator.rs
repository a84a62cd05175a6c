//! Interaction Coordinator: arbitrates activations against proximity and the
//! two post-close suppression guards.
use std::time::Duration;

use bevy::prelude::*;

use crate::input::events::{Activation, ActivationSource};

use super::config::InteractionSettings;

/// What a single activation resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    OpenHouse(String),
    OpenNpc,
    MoveTo(Vec2),
    Ignored,
}

/// Coordinator state. Proximity is re-observed every tick and never cached
/// beyond that.
///
/// After a dialogue closes two guards run independently:
/// `walk_away_pending` blocks interactions until the player stands in range of
/// nothing, and `close_cooldown` swallows pointer input for a short fixed
/// window so the closing tap is not read as a move. Neither clears the other.
#[derive(Resource, Debug)]
pub struct InteractionCoordinator {
    active_zone: Option<String>,
    npc_nearby: bool,
    talked_to_npc: bool,
    walk_away_pending: bool,
    close_cooldown: Option<Timer>,
    close_cooldown_duration: Duration,
    npc_tap_radius: f32,
}

impl InteractionCoordinator {
    pub fn new(close_cooldown: Duration, npc_tap_radius: f32) -> Self {
        Self {
            active_zone: None,
            npc_nearby: false,
            talked_to_npc: false,
            walk_away_pending: false,
            close_cooldown: None,
            close_cooldown_duration: close_cooldown,
            npc_tap_radius,
        }
    }

    pub fn from_settings(settings: &InteractionSettings) -> Self {
        Self::new(settings.close_cooldown, settings.npc_tap_radius)
    }

    pub fn active_zone(&self) -> Option<&str> {
        self.active_zone.as_deref()
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn npc_nearby(&self) -> bool {
        self.npc_nearby
    }

    pub fn talked_to_npc(&self) -> bool {
        self.talked_to_npc
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn walk_away_pending(&self) -> bool {
        self.walk_away_pending
    }

    pub fn close_cooldown_active(&self) -> bool {
        self.close_cooldown
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Records this tick's proximity. Standing in range of nothing re-arms
    /// interactions after a dialogue closed.
    pub fn observe(&mut self, active_zone: Option<&str>, npc_nearby: bool) {
        if self.active_zone.as_deref() != active_zone {
            self.active_zone = active_zone.map(str::to_owned);
        }
        self.npc_nearby = npc_nearby;
        if self.walk_away_pending && active_zone.is_none() && !npc_nearby {
            self.walk_away_pending = false;
            debug!("Player walked away; interactions re-armed");
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        let expired = self
            .close_cooldown
            .as_mut()
            .is_some_and(|timer| timer.tick(delta).is_finished());
        if expired {
            self.close_cooldown = None;
        }
    }

    /// Arms both guards. Called once per closure signal.
    pub fn on_dialogue_closed(&mut self) {
        self.walk_away_pending = true;
        self.close_cooldown = (!self.close_cooldown_duration.is_zero())
            .then(|| Timer::new(self.close_cooldown_duration, TimerMode::Once));
    }

    /// Flips the repeat-visit flag. Only call once an npc dialogue was issued.
    pub fn mark_talked(&mut self) {
        self.talked_to_npc = true;
    }

    /// Decides what an activation does given current proximity and guards.
    pub fn resolve(
        &self,
        activation: &Activation,
        dialogue_open: bool,
        npc_position: Option<Vec2>,
    ) -> TriggerOutcome {
        if dialogue_open {
            return TriggerOutcome::Ignored;
        }

        let pointer = activation.source == ActivationSource::Pointer;
        if pointer && self.close_cooldown_active() {
            return TriggerOutcome::Ignored;
        }

        if !self.walk_away_pending {
            if let Some(zone) = &self.active_zone {
                return TriggerOutcome::OpenHouse(zone.clone());
            }
            if self.npc_nearby && self.npc_reachable(activation, npc_position) {
                return TriggerOutcome::OpenNpc;
            }
        }

        match (activation.source, activation.world_position) {
            (ActivationSource::Pointer, Some(target)) => TriggerOutcome::MoveTo(target),
            _ => TriggerOutcome::Ignored,
        }
    }

    /// Taps must land near the NPC; keys and the prompt only need proximity.
    fn npc_reachable(&self, activation: &Activation, npc_position: Option<Vec2>) -> bool {
        match activation.source {
            ActivationSource::Pointer => activation
                .world_position
                .zip(npc_position)
                .is_some_and(|(tap, npc)| tap.distance(npc) < self.npc_tap_radius),
            ActivationSource::Key | ActivationSource::Prompt => true,
        }
    }

    /// HUD prompt text for the current proximity, if any.
    pub fn prompt(&self, zone_label: Option<&str>, touch: bool) -> Option<String> {
        let action = if touch { "Tap" } else { "Press SPACE" };
        match (zone_label, self.npc_nearby) {
            (Some(label), _) if self.active_zone.is_some() => {
                Some(format!("{} to enter {}", action, label))
            }
            (_, true) => Some(format!("{} to talk", action)),
            _ => None,
        }
    }
}

impl Default for InteractionCoordinator {
    fn default() -> Self {
        Self::from_settings(&InteractionSettings::default())
    }
}
