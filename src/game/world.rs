// GameWorld struct and entity management
//
// GameWorld owns everything that belongs to the current level. The player
// lives outside it because score, lives and power state survive level loads.

use crate::collectible::{Coin, PowerUp};
use crate::collision::Aabb;
use crate::config::GameConfig;
use crate::effect::{Effect, EffectKind};
use crate::error::Result;
use crate::goomba::Goomba;
use crate::level::{LevelSpec, LevelTable};
use crate::physics::{AnimatedOnly, WorldBounds};
use crate::platform::Platform;
use crate::sprite::{SpriteAtlas, SpriteKey};

use super::camera::Camera;

pub struct GameWorld {
    pub level_id: String,
    /// Ground segments first, then platforms, as defined
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub goombas: Vec<Goomba>,
    /// Stomped goombas still showing their dead sprite
    pub dead_goombas: Vec<Goomba>,
    pub effects: Vec<Effect>,
    pub checkpoint: Aabb,
    pub next_level: String,
    pub level_width: f32,
    /// Player spawn point
    pub start: (f32, f32),
    pub camera: Camera,
    effect_frames: u32,
    viewport_width: f32,
    floor_y: f32,
}

impl GameWorld {
    /// Builds the named level from the table.
    pub fn load(id: &str, levels: &LevelTable, atlas: &SpriteAtlas, config: &GameConfig) -> Result<Self> {
        let spec = levels.get(id)?;
        let world = Self::from_spec(id, spec, atlas, config);
        log::info!(
            "Loaded level {}: {} platforms, {} coins, {} power-ups, {} goombas",
            id,
            world.platforms.len(),
            world.coins.len(),
            world.power_ups.len(),
            world.goombas.len()
        );
        Ok(world)
    }

    fn from_spec(id: &str, spec: &LevelSpec, atlas: &SpriteAtlas, config: &GameConfig) -> Self {
        let platforms = spec.all_platforms().map(Platform::from_spec).collect();

        let coin_size = atlas.size(SpriteKey::Coin);
        let coins = spec
            .coins
            .iter()
            .map(|point| Coin::new(point.x, point.y, coin_size, config.scoring.coin))
            .collect();

        let power_ups = spec
            .power_ups
            .iter()
            .map(|power_up| {
                let size = atlas.size(power_up.kind.sprite());
                PowerUp::new(power_up.kind, power_up.x, power_up.y, size, config)
            })
            .collect();

        let goomba_size = atlas.size(SpriteKey::Goomba);
        let goombas = spec
            .goombas
            .iter()
            .map(|point| {
                Goomba::new(
                    point.x,
                    point.y,
                    goomba_size.width as f32,
                    goomba_size.height as f32,
                    config.physics.goomba_speed,
                    config.physics.gravity,
                    config.timers.goomba_death_frames,
                )
            })
            .collect();

        GameWorld {
            level_id: id.to_string(),
            platforms,
            coins,
            power_ups,
            goombas,
            dead_goombas: Vec::new(),
            effects: Vec::new(),
            checkpoint: spec.checkpoint.bounds(),
            next_level: spec.checkpoint.next_level.clone(),
            level_width: spec.width,
            start: (spec.start.x, spec.start.y),
            camera: Camera::new(config.camera_margin),
            effect_frames: config.timers.effect_frames,
            viewport_width: config.viewport_width(),
            floor_y: config.floor_y(),
        }
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds {
            level_width: self.level_width,
            viewport_width: self.viewport_width,
            floor_y: self.floor_y,
        }
    }

    /// Spawns an effect with its top-left corner at `(x, y)`
    pub fn spawn_effect(&mut self, kind: EffectKind, x: f32, y: f32) {
        self.effects.push(Effect::new(kind, x, y, self.effect_frames));
    }

    /// Runs down dead goombas and effects, dropping the expired ones.
    pub fn decay(&mut self) {
        self.dead_goombas.retain_mut(|goomba| goomba.tick_death());
        self.effects.retain_mut(|effect| effect.tick());
    }
}

/// Removes the items at `indices` and returns them in index order.
///
/// `indices` must be ascending and unique, as produced by
/// `check_collisions_with_collection`.
pub fn take_indices<T>(items: &mut Vec<T>, indices: &[usize]) -> Vec<T> {
    let mut taken: Vec<T> = indices.iter().rev().map(|&index| items.remove(index)).collect();
    taken.reverse();
    taken
}
