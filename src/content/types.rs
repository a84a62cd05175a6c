//! Map and resume descriptors as they appear on disk, plus the typed island entries.
use std::{collections::HashMap, fmt};

use bevy::math::Vec2;
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use serde_json::Value;

pub const DEFAULT_MAP_WIDTH: f32 = 800.0;
pub const DEFAULT_MAP_HEIGHT: f32 = 600.0;

/// A point in map pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Interaction rectangle in map pixels, centred on (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ZoneRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HouseDescriptor {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub zone: ZoneRect,
}

/// Map layout: spawn point, NPC placement, and houses in document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapDescriptor {
    #[serde(default = "default_spawn")]
    pub spawn: MapPoint,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_npc")]
    pub npc: MapPoint,
    #[serde(deserialize_with = "ordered_houses")]
    pub houses: Vec<(String, HouseDescriptor)>,
}

fn default_spawn() -> MapPoint {
    MapPoint::new(400.0, 450.0)
}

fn default_width() -> f32 {
    DEFAULT_MAP_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_MAP_HEIGHT
}

fn default_npc() -> MapPoint {
    MapPoint::new(400.0, 350.0)
}

impl MapDescriptor {
    /// Converts a map pixel coordinate into world space (origin centred, y up).
    pub fn to_world(&self, point: MapPoint) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Half extents of the playable area in world units.
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for MapDescriptor {
    fn default() -> Self {
        let house = |label: &str, x: f32, y: f32| HouseDescriptor {
            label: label.to_string(),
            x,
            y,
            zone: ZoneRect {
                x,
                y: y + 40.0,
                w: 100.0,
                h: 60.0,
            },
        };

        Self {
            spawn: default_spawn(),
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            npc: default_npc(),
            houses: vec![
                ("aboutMe".to_string(), house("About Me", 150.0, 240.0)),
                (
                    "workExperience".to_string(),
                    house("Work Experience", 400.0, 140.0),
                ),
                ("education".to_string(), house("Education", 650.0, 240.0)),
            ],
        }
    }
}

/// Keeps object entries in the order they appear in the document; the zone
/// registry relies on it for its first-match tie-break.
fn ordered_houses<'de, D>(deserializer: D) -> Result<Vec<(String, HouseDescriptor)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedHouses;

    impl<'de> Visitor<'de> for OrderedHouses {
        type Value = Vec<(String, HouseDescriptor)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a map of house keys to house descriptors")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut houses = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, house)) = map.next_entry::<String, HouseDescriptor>()? {
                houses.push((key, house));
            }
            Ok(houses)
        }
    }

    deserializer.deserialize_map(OrderedHouses)
}

/// Resume content keyed by house, plus the NPC's dialogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeDescriptor {
    #[serde(default)]
    pub houses: HashMap<String, HouseContent>,
    #[serde(default)]
    pub npc: Option<NpcContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseContent {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(default)]
    pub entries: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcContent {
    #[serde(default = "default_npc_name")]
    pub name: String,
    #[serde(default)]
    pub portrait: Option<String>,
    #[serde(default)]
    pub dialogue: Vec<String>,
    #[serde(default)]
    pub dialogue_short: Option<Vec<String>>,
}

fn default_npc_name() -> String {
    "NPC".to_string()
}

impl NpcContent {
    /// Lines for this visit: the short variant once the player has talked before.
    pub fn lines(&self, talked_before: bool) -> &[String] {
        match (&self.dialogue_short, talked_before) {
            (Some(short), true) if !short.is_empty() => short,
            _ => &self.dialogue,
        }
    }
}

/// Shape of the entries a house holds, derived from its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseKind {
    AboutMe,
    Education,
    WorkExperience,
    Other,
}

impl HouseKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "aboutMe" => Self::AboutMe,
            "education" => Self::Education,
            "workExperience" => Self::WorkExperience,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutMeEntry {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "scalar_text")]
    pub degree: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub institution: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub year: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkExperienceEntry {
    #[serde(default, deserialize_with = "scalar_text")]
    pub role: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub company: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub period: String,
    #[serde(default, deserialize_with = "scalar_list")]
    pub highlights: Vec<String>,
}

/// A scalar JSON value rendered as card text. Resume files write years and
/// periods as either strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Missing,
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
            Scalar::Missing => String::new(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

fn scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(items.into_iter().map(String::from).collect())
}

/// One resume entry shown as a card in the island panel.
#[derive(Debug, Clone, PartialEq)]
pub enum IslandEntry {
    AboutMe(AboutMeEntry),
    Education(EducationEntry),
    WorkExperience(WorkExperienceEntry),
    /// Unknown house kind, or an entry whose fields are not scalars.
    Raw(Value),
}

impl IslandEntry {
    pub fn parse(kind: HouseKind, value: &Value) -> Self {
        let typed = match kind {
            HouseKind::AboutMe => AboutMeEntry::deserialize(value).ok().map(Self::AboutMe),
            HouseKind::Education => EducationEntry::deserialize(value).ok().map(Self::Education),
            HouseKind::WorkExperience => WorkExperienceEntry::deserialize(value)
                .ok()
                .map(Self::WorkExperience),
            HouseKind::Other => None,
        };
        typed.unwrap_or_else(|| Self::Raw(value.clone()))
    }

    pub fn card(&self) -> IslandCard {
        match self {
            Self::AboutMe(entry) => IslandCard {
                heading: entry.title.clone(),
                subtitle: None,
                paragraphs: vec![entry.description.clone()],
                bullets: Vec::new(),
            },
            Self::Education(entry) => IslandCard {
                heading: entry.degree.clone(),
                subtitle: Some(format!("{} - {}", entry.institution, entry.year)),
                paragraphs: vec![entry.details.clone()],
                bullets: Vec::new(),
            },
            Self::WorkExperience(entry) => IslandCard {
                heading: entry.role.clone(),
                subtitle: Some(format!("{} | {}", entry.company, entry.period)),
                paragraphs: Vec::new(),
                bullets: entry.highlights.clone(),
            },
            Self::Raw(value) => IslandCard {
                heading: String::new(),
                subtitle: None,
                paragraphs: vec![value.to_string()],
                bullets: Vec::new(),
            },
        }
    }
}

/// Presentation-ready text for a single island card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IslandCard {
    pub heading: String,
    pub subtitle: Option<String>,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
}
