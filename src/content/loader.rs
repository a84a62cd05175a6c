//! Reads the map and resume descriptors from disk with env-overridable paths.
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use bevy::prelude::*;
use serde::de::DeserializeOwned;

use super::{
    errors::ContentError,
    types::{HouseContent, MapDescriptor, NpcContent, ResumeDescriptor},
};

const DEFAULT_MAP_PATH: &str = "assets/data/map.json";
const DEFAULT_RESUME_PATH: &str = "assets/data/resume.json";
const MAP_PATH_VAR: &str = "VILLAGE_MAP_PATH";
const RESUME_PATH_VAR: &str = "VILLAGE_RESUME_PATH";

/// Static content consumed by the village: layout plus optional resume data.
#[derive(Resource, Debug, Clone, Default)]
pub struct VillageContent {
    pub map: MapDescriptor,
    resume: Option<ResumeDescriptor>,
}

impl VillageContent {
    pub fn new(map: MapDescriptor, resume: Option<ResumeDescriptor>) -> Self {
        Self { map, resume }
    }

    /// Loads both descriptors, falling back to the built-in map and to no resume.
    pub fn load_or_default() -> Self {
        let map_path = path_from_env(MAP_PATH_VAR, DEFAULT_MAP_PATH);
        let map = match read_json::<MapDescriptor>(&map_path) {
            Ok(map) => map,
            Err(err) => {
                warn!("{}. Falling back to the built-in village layout.", err);
                MapDescriptor::default()
            }
        };

        let resume_path = path_from_env(RESUME_PATH_VAR, DEFAULT_RESUME_PATH);
        let resume = match read_json::<ResumeDescriptor>(&resume_path) {
            Ok(resume) => Some(resume),
            Err(err) if err.is_missing() => {
                warn!(
                    "No resume content at {}; interactions will be ignored.",
                    err.path().display()
                );
                None
            }
            Err(err) => {
                warn!("{}. Interactions will be ignored.", err);
                None
            }
        };

        info!(
            "Village content loaded: {} houses, resume {}",
            map.houses.len(),
            if resume.is_some() { "present" } else { "absent" }
        );

        Self::new(map, resume)
    }

    pub fn house(&self, key: &str) -> Option<&HouseContent> {
        self.resume.as_ref()?.houses.get(key)
    }

    pub fn npc(&self) -> Option<&NpcContent> {
        self.resume.as_ref()?.npc.as_ref()
    }

    /// Display name for the NPC, used before any dialogue is opened.
    pub fn npc_name(&self) -> &str {
        self.npc().map(|npc| npc.name.as_str()).unwrap_or("NPC")
    }
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let data = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &data)
}

fn parse_json<T: DeserializeOwned>(path: &Path, data: &str) -> Result<T, ContentError> {
    serde_json::from_str(data).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_read_error() {
        let path = Path::new("definitely/not/here.json");
        let err = read_json::<MapDescriptor>(path).unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.path(), &path.to_path_buf());
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = parse_json::<ResumeDescriptor>(Path::new("resume.json"), "{ \"houses\": 3 }")
            .unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn lookups_are_absent_without_resume() {
        let content = VillageContent::new(MapDescriptor::default(), None);
        assert!(content.house("aboutMe").is_none());
        assert!(content.npc().is_none());
        assert_eq!(content.npc_name(), "NPC");
    }

    #[test]
    fn lookups_resolve_from_resume() {
        let resume: ResumeDescriptor = serde_json::from_str(
            r#"{
                "houses": { "aboutMe": { "title": "About Me", "entries": [] } },
                "npc": { "name": "Sihong", "dialogue": ["Hi"] }
            }"#,
        )
        .expect("resume should parse");
        let content = VillageContent::new(MapDescriptor::default(), Some(resume));

        assert_eq!(content.house("aboutMe").map(|h| h.title.as_str()), Some("About Me"));
        assert!(content.house("education").is_none());
        assert_eq!(content.npc_name(), "Sihong");
    }
}
