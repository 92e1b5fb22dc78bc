//! Fixtures shared by the unit tests.

use crate::config::GameConfig;
use crate::game::Game;
use crate::level::LevelTable;
use crate::sprite::SpriteAtlas;

/// Two small levels that lead into each other.
///
/// TEST_1: ground 0..1000 at y 550, one floating platform, coins at
/// (300, 450) and (340, 450), a mushroom at (500, 518), a flower at
/// (700, 518), one goomba at (800, 518) and the checkpoint at x 1500.
const TEST_LEVELS: &str = r#"{
    "TEST_1": {
        "ground": [{ "x": 0, "y": 550, "width": 1000, "type": "ground" }],
        "platforms": [{ "x": 200, "y": 350, "width": 96, "type": "platform" }],
        "coins": [{ "x": 300, "y": 450 }, { "x": 340, "y": 450 }],
        "power_ups": [
            { "x": 500, "y": 518, "type": "mushroom" },
            { "x": 700, "y": 518, "type": "flower" }
        ],
        "goombas": [{ "x": 800, "y": 518 }],
        "checkpoint": { "x": 1500, "y": 400, "width": 64, "height": 150, "next_level": "TEST_2" },
        "width": 2000
    },
    "TEST_2": {
        "ground": [{ "x": 0, "y": 550, "width": 2000, "type": "ground" }],
        "checkpoint": { "x": 1900, "y": 400, "width": 64, "height": 150, "next_level": "TEST_1" },
        "width": 2000,
        "start": { "x": 50, "y": 300 }
    }
}"#;

pub fn levels() -> LevelTable {
    let table: LevelTable = serde_json::from_str(TEST_LEVELS).unwrap();
    table.validate().unwrap();
    table
}

/// Every sprite 32x32
pub fn atlas() -> SpriteAtlas {
    SpriteAtlas::uniform(32, 32)
}

pub fn config() -> GameConfig {
    GameConfig {
        start_level: "TEST_1".to_string(),
        ..GameConfig::default()
    }
}

/// Fresh game on the title screen with TEST_1 loaded
pub fn game() -> Game {
    Game::new(config(), levels(), atlas()).unwrap()
}
