//! Static house interaction zones, built once from the map descriptor.
use bevy::prelude::*;

use crate::content::types::{MapDescriptor, MapPoint};

/// Axis-aligned interaction rectangle in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveZone {
    pub key: String,
    pub label: String,
    pub center: Vec2,
    pub size: Vec2,
}

impl InteractiveZone {
    /// Half-extent test; points on the edge are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        let offset = (point - self.center).abs();
        offset.x < self.size.x / 2.0 && offset.y < self.size.y / 2.0
    }
}

/// Read-only registry of house zones in map document order.
#[derive(Resource, Debug, Clone, Default)]
pub struct ZoneRegistry {
    zones: Vec<InteractiveZone>,
}

impl ZoneRegistry {
    pub fn from_map(map: &MapDescriptor) -> Self {
        let zones = map
            .houses
            .iter()
            .map(|(key, house)| InteractiveZone {
                key: key.clone(),
                label: house.label.clone(),
                center: map.to_world(MapPoint::new(house.zone.x, house.zone.y)),
                size: Vec2::new(house.zone.w, house.zone.h),
            })
            .collect();
        Self { zones }
    }

    /// First zone containing the point; overlapping zones resolve by registry order.
    pub fn active_zone(&self, point: Vec2) -> Option<&InteractiveZone> {
        self.zones.iter().find(|zone| zone.contains(point))
    }

    pub fn get(&self, key: &str) -> Option<&InteractiveZone> {
        self.zones.iter().find(|zone| zone.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractiveZone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{HouseDescriptor, ZoneRect};

    fn house(label: &str, x: f32, y: f32, w: f32, h: f32) -> HouseDescriptor {
        HouseDescriptor {
            label: label.to_string(),
            x,
            y: y - 40.0,
            zone: ZoneRect { x, y, w, h },
        }
    }

    fn overlapping_map() -> MapDescriptor {
        MapDescriptor {
            houses: vec![
                ("first".to_string(), house("First", 400.0, 300.0, 100.0, 60.0)),
                ("second".to_string(), house("Second", 420.0, 300.0, 100.0, 60.0)),
            ],
            ..MapDescriptor::default()
        }
    }

    #[test]
    fn zones_convert_to_world_space() {
        let registry = ZoneRegistry::from_map(&MapDescriptor::default());
        assert_eq!(registry.len(), 3);

        let about = registry.get("aboutMe").expect("default map has aboutMe");
        assert_eq!(about.label, "About Me");
        assert_eq!(about.center, Vec2::new(-250.0, 20.0));
        assert_eq!(about.size, Vec2::new(100.0, 60.0));
    }

    #[test]
    fn containment_uses_half_extents() {
        let registry = ZoneRegistry::from_map(&MapDescriptor::default());
        let about = registry.get("aboutMe").expect("default map has aboutMe");

        assert!(about.contains(about.center));
        assert!(about.contains(about.center + Vec2::new(49.0, -29.0)));
        assert!(!about.contains(about.center + Vec2::new(50.0, 0.0)));
        assert!(!about.contains(about.center + Vec2::new(0.0, 30.0)));
    }

    #[test]
    fn overlapping_zones_pick_first_in_registry_order() {
        let registry = ZoneRegistry::from_map(&overlapping_map());
        let point = registry.get("second").map(|zone| zone.center).unwrap_or_default();

        assert_eq!(registry.active_zone(point).map(|zone| zone.key.as_str()), Some("first"));
        assert_eq!(
            registry
                .active_zone(point + Vec2::new(45.0, 0.0))
                .map(|zone| zone.key.as_str()),
            Some("second")
        );
        assert!(registry.active_zone(Vec2::new(300.0, 250.0)).is_none());
        assert_eq!(
            registry.iter().map(|zone| zone.key.as_str()).collect::<Vec<_>>(),
            ["first", "second"]
        );
    }
}
