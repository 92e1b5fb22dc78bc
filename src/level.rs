//! Static level data.
//!
//! Levels are authored in JSON (`assets/data/levels.json`). The file is
//! embedded into the binary as the default table; `GameConfig::levels_path`
//! swaps in a different file without rebuilding.

use crate::collectible::PowerUpKind;
use crate::collision::Aabb;
use crate::error::{GameError, Result};
use crate::platform::PlatformKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_LEVELS: &str = include_str!("../assets/data/levels.json");
const EMBEDDED_LEVELS_NAME: &str = "<embedded levels.json>";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    #[serde(rename = "type")]
    pub kind: PlatformKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSpec {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpSpec {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "type")]
    pub kind: PowerUpKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub next_level: String,
}

impl CheckpointSpec {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

fn default_start() -> PointSpec {
    PointSpec { x: 100.0, y: 500.0 }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    #[serde(default)]
    pub ground: Vec<PlatformSpec>,
    #[serde(default)]
    pub platforms: Vec<PlatformSpec>,
    #[serde(default)]
    pub coins: Vec<PointSpec>,
    #[serde(default)]
    pub power_ups: Vec<PowerUpSpec>,
    #[serde(default)]
    pub goombas: Vec<PointSpec>,
    pub checkpoint: CheckpointSpec,
    /// Total level width in pixels
    pub width: f32,
    /// Where the player appears on load and after losing a life
    #[serde(default = "default_start")]
    pub start: PointSpec,
}

impl LevelSpec {
    /// Ground segments followed by platforms, in definition order
    pub fn all_platforms(&self) -> impl Iterator<Item = &PlatformSpec> {
        self.ground.iter().chain(self.platforms.iter())
    }
}

/// Level id → level data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    levels: HashMap<String, LevelSpec>,
}

impl LevelTable {
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_LEVELS, EMBEDDED_LEVELS_NAME)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let table: LevelTable = serde_json::from_str(content).map_err(|source| GameError::Json {
            path: origin.to_string(),
            source,
        })?;
        table.validate()?;
        log::info!("Loaded {} levels from {}", table.len(), origin);
        Ok(table)
    }

    /// Every checkpoint must lead somewhere that exists and every level
    /// needs a positive width. Levels are checked in id order.
    pub fn validate(&self) -> Result<()> {
        let mut ids: Vec<&String> = self.levels.keys().collect();
        ids.sort();

        for id in ids {
            let level = &self.levels[id];
            if !self.levels.contains_key(&level.checkpoint.next_level) {
                return Err(GameError::InvalidLevelTable(format!(
                    "checkpoint of {} points to unknown level {}",
                    id, level.checkpoint.next_level
                )));
            }
            if level.width <= 0.0 {
                return Err(GameError::InvalidLevelTable(format!(
                    "level {} has non-positive width {}",
                    id, level.width
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&LevelSpec> {
        self.levels
            .get(id)
            .ok_or_else(|| GameError::UnknownLevel(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.levels.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_is_valid() {
        let table = LevelTable::embedded().unwrap();
        assert!(table.contains("LEVEL_1"));
        assert!(table.len() >= 2);

        let level = table.get("LEVEL_1").unwrap();
        assert!(!level.ground.is_empty());
        assert!(level.width > 800.0);
    }

    #[test]
    fn test_unknown_level_is_error() {
        let table = LevelTable::embedded().unwrap();
        assert!(matches!(table.get("NOPE"), Err(GameError::UnknownLevel(id)) if id == "NOPE"));
    }

    #[test]
    fn test_dangling_checkpoint_rejected() {
        let json = r#"{
            "ONLY": {
                "checkpoint": { "x": 0, "y": 0, "width": 10, "height": 10, "next_level": "MISSING" },
                "width": 1000
            }
        }"#;
        let result = LevelTable::parse(json, "test");
        assert!(matches!(result, Err(GameError::InvalidLevelTable(_))));
    }

    #[test]
    fn test_non_positive_width_rejected() {
        let json = r#"{
            "FLAT": {
                "checkpoint": { "x": 0, "y": 0, "width": 10, "height": 10, "next_level": "FLAT" },
                "width": 0
            }
        }"#;
        let result = LevelTable::parse(json, "test");
        assert!(matches!(result, Err(GameError::InvalidLevelTable(message)) if message.contains("FLAT")));
    }

    #[test]
    fn test_first_invalid_level_by_id_is_reported() {
        let json = r#"{
            "ZED": {
                "checkpoint": { "x": 0, "y": 0, "width": 10, "height": 10, "next_level": "MISSING" },
                "width": 1000
            },
            "ALPHA": {
                "checkpoint": { "x": 0, "y": 0, "width": 10, "height": 10, "next_level": "ALPHA" },
                "width": -5
            },
            "MID": {
                "checkpoint": { "x": 0, "y": 0, "width": 10, "height": 10, "next_level": "MISSING" },
                "width": 1000
            }
        }"#;
        for _ in 0..5 {
            let result = LevelTable::parse(json, "test");
            assert!(matches!(
                result,
                Err(GameError::InvalidLevelTable(message)) if message == "level ALPHA has non-positive width -5"
            ));
        }
    }

    #[test]
    fn test_type_field_and_default_start() {
        let json = r#"{
            "A": {
                "ground": [{ "x": 0, "y": 550, "width": 400, "type": "ground" }],
                "platforms": [{ "x": 50, "y": 400, "width": 32, "type": "brick" }],
                "power_ups": [{ "x": 10, "y": 10, "type": "flower" }],
                "checkpoint": { "x": 0, "y": 0, "width": 10, "height": 10, "next_level": "A" },
                "width": 1000
            }
        }"#;
        let table = LevelTable::parse(json, "test").unwrap();
        let level = table.get("A").unwrap();

        let kinds: Vec<PlatformKind> = level.all_platforms().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PlatformKind::Ground, PlatformKind::Brick]);
        assert_eq!(level.power_ups[0].kind, PowerUpKind::Flower);
        assert_eq!(level.start, PointSpec { x: 100.0, y: 500.0 });
    }
}
