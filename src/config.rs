//! Game configuration loaded from JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change. `GameConfig::load()` searches the usual places and falls
//! back to the built-in defaults when no file exists.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MARIO_CONFIG";

const LOCAL_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Simulation ticks (and rendered frames) per second
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Mario Bros".to_string(),
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every frame (pixels/frame²)
    pub gravity: f32,
    /// Vertical velocity applied by a jump; negative is up
    pub jump_speed: f32,
    pub walk_speed: f32,
    pub mushroom_speed: f32,
    pub goomba_speed: f32,
    /// Distance from the bottom of the viewport to the player's floor
    pub floor_margin: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: 0.8,
            jump_speed: -15.0,
            walk_speed: 5.0,
            mushroom_speed: 2.0,
            goomba_speed: 2.0,
            floor_margin: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub coin: u32,
    pub mushroom: u32,
    pub flower: u32,
    pub stomp: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            coin: 100,
            mushroom: 1000,
            flower: 2000,
            stomp: 500,
        }
    }
}

/// Frame counts for everything that expires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub invincibility_frames: u32,
    pub goomba_death_frames: u32,
    pub effect_frames: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            invincibility_frames: 300,
            goomba_death_frames: 30,
            effect_frames: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub scoring: ScoringConfig,
    pub timers: TimerConfig,
    pub camera_margin: f32,
    pub starting_lives: u32,
    pub start_level: String,
    pub sprite_dir: String,
    /// Replaces the embedded level table when set
    pub levels_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            scoring: ScoringConfig::default(),
            timers: TimerConfig::default(),
            camera_margin: 200.0,
            starting_lives: 3,
            start_level: "LEVEL_1".to_string(),
            sprite_dir: "assets/sprites".to_string(),
            levels_path: None,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| GameError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads the first config file found, or the defaults.
    ///
    /// Search order: `$MARIO_CONFIG`, `assets/config/game.json`, then
    /// `<user config dir>/mario-bros/game.json`. An explicitly named file
    /// that does not exist is an error; the other locations are optional.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        match select_config_path(explicit, &Self::search_paths(), |path| path.is_file()) {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("mario-bros").join("game.json"));
        }
        paths
    }

    /// Lowest y the player's feet may reach
    pub fn floor_y(&self) -> f32 {
        self.window.height as f32 - self.physics.floor_margin
    }

    pub fn viewport_width(&self) -> f32 {
        self.window.width as f32
    }
}

/// Picks the config file to load.
///
/// An explicit path always wins, whether or not it exists. Otherwise the
/// first candidate that `exists` accepts is used.
fn select_config_path(
    explicit: Option<PathBuf>,
    candidates: &[PathBuf],
    exists: impl Fn(&Path) -> bool,
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }
    candidates.iter().find(|path| exists(path.as_path())).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "physics": { "gravity": 1.0 }, "starting_lives": 5 }"#)
                .unwrap();

        assert_eq!(config.physics.gravity, 1.0);
        assert_eq!(config.physics.jump_speed, -15.0);
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.start_level, "LEVEL_1");
    }

    #[test]
    fn test_floor_is_fifty_above_viewport_bottom() {
        let config = GameConfig::default();
        assert_eq!(config.floor_y(), 550.0);
        assert_eq!(config.viewport_width(), 800.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::load_from_file("does/not/exist.json");
        assert!(matches!(result, Err(GameError::Io { .. })));
    }

    fn candidates() -> Vec<PathBuf> {
        vec![PathBuf::from("local/game.json"), PathBuf::from("user/game.json")]
    }

    #[test]
    fn test_explicit_path_wins_even_if_missing() {
        let chosen = select_config_path(Some(PathBuf::from("env/game.json")), &candidates(), |_| true);
        assert_eq!(chosen, Some(PathBuf::from("env/game.json")));

        let chosen = select_config_path(Some(PathBuf::from("env/game.json")), &candidates(), |_| false);
        assert_eq!(chosen, Some(PathBuf::from("env/game.json")));
    }

    #[test]
    fn test_local_file_before_user_config_dir() {
        let chosen = select_config_path(None, &candidates(), |_| true);
        assert_eq!(chosen, Some(PathBuf::from("local/game.json")));

        let chosen = select_config_path(None, &candidates(), |path| path.starts_with("user"));
        assert_eq!(chosen, Some(PathBuf::from("user/game.json")));
    }

    #[test]
    fn test_no_file_found_means_defaults() {
        assert_eq!(select_config_path(None, &candidates(), |_| false), None);
    }

    #[test]
    fn test_search_paths_start_with_local_config() {
        let paths = GameConfig::search_paths();
        assert_eq!(paths[0], PathBuf::from(LOCAL_CONFIG_PATH));
        assert!(paths.len() <= 2);
    }
}
