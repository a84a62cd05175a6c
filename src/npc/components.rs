//! NPC components: identity, proximity state, and the pulsing talk prompt.
use std::time::Duration;

use bevy::prelude::*;

const PULSE_HALF_PERIOD_SECS: f32 = 0.6;
const PULSE_MIN_ALPHA: f32 = 0.5;

/// A static NPC the player can talk to.
#[derive(Component, Debug, Clone)]
pub struct Npc {
    pub display_name: String,
    pub interaction_radius: f32,
}

impl Npc {
    pub fn new(display_name: impl Into<String>, interaction_radius: f32) -> Self {
        Self {
            display_name: display_name.into(),
            interaction_radius,
        }
    }
}

/// Edge between "player out of range" and "player in range".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityTransition {
    Entered,
    Exited,
}

/// Whether the player is within the NPC's interaction radius.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct NpcProximity {
    nearby: bool,
}

impl NpcProximity {
    pub fn is_nearby(&self) -> bool {
        self.nearby
    }

    /// Recomputes range from the current distance and reports the edge, if any.
    pub fn update(&mut self, distance: f32, radius: f32) -> Option<ProximityTransition> {
        let was_nearby = self.nearby;
        self.nearby = distance < radius;
        match (was_nearby, self.nearby) {
            (false, true) => Some(ProximityTransition::Entered),
            (true, false) => Some(ProximityTransition::Exited),
            _ => None,
        }
    }
}

/// World-space "[Space] Talk" prompt belonging to an NPC.
#[derive(Component, Debug)]
pub struct NpcPrompt {
    pub owner: Entity,
}

/// Yoyo alpha pulse between 0.5 and 1.0; inert (fully opaque) until started.
#[derive(Component, Debug, Default)]
pub struct PromptPulse {
    elapsed: Option<Duration>,
}

impl PromptPulse {
    pub fn start(&mut self) {
        self.elapsed = Some(Duration::ZERO);
    }

    pub fn stop(&mut self) {
        self.elapsed = None;
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn tick(&mut self, delta: Duration) {
        if let Some(elapsed) = self.elapsed.as_mut() {
            *elapsed += delta;
        }
    }

    pub fn alpha(&self) -> f32 {
        let Some(elapsed) = self.elapsed else {
            return 1.0;
        };
        let phase = elapsed.as_secs_f32() % (PULSE_HALF_PERIOD_SECS * 2.0);
        let rising = phase / PULSE_HALF_PERIOD_SECS;
        let t = if rising <= 1.0 { rising } else { 2.0 - rising };
        PULSE_MIN_ALPHA + (1.0 - PULSE_MIN_ALPHA) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_the_radius_yields_single_edges() {
        let mut proximity = NpcProximity::default();
        assert_eq!(proximity.update(80.0, 50.0), None);
        assert_eq!(proximity.update(49.0, 50.0), Some(ProximityTransition::Entered));
        assert_eq!(proximity.update(10.0, 50.0), None);
        assert!(proximity.is_nearby());
        assert_eq!(proximity.update(50.0, 50.0), Some(ProximityTransition::Exited));
        assert_eq!(proximity.update(60.0, 50.0), None);
        assert_eq!(
            proximity.update(20.0, 50.0),
            Some(ProximityTransition::Entered),
            "re-entering triggers again"
        );
    }

    #[test]
    fn range_is_a_pure_function_of_distance() {
        for distance in [0.0, 25.0, 49.9, 50.0, 75.0, 49.9, 0.0] {
            let mut proximity = NpcProximity::default();
            proximity.update(distance, 50.0);
            assert_eq!(proximity.is_nearby(), distance < 50.0);
        }
    }

    #[test]
    fn pulse_yoyos_between_half_and_full_alpha() {
        let mut pulse = PromptPulse::default();
        assert_eq!(pulse.alpha(), 1.0);

        pulse.start();
        assert!((pulse.alpha() - 0.5).abs() < 1e-4);

        pulse.tick(Duration::from_millis(300));
        assert!((pulse.alpha() - 0.75).abs() < 1e-3);

        pulse.tick(Duration::from_millis(300));
        assert!((pulse.alpha() - 1.0).abs() < 1e-3);

        pulse.tick(Duration::from_millis(300));
        assert!((pulse.alpha() - 0.75).abs() < 1e-3);

        pulse.stop();
        assert!(!pulse.is_running());
        assert_eq!(pulse.alpha(), 1.0);
    }
}
