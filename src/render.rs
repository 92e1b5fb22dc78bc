//! Layered draw-command generation
//!
//! The simulation does not talk to SDL. Each frame it produces a list of
//! `DrawCommand`s in world-to-screen order, and the display surface executes
//! them. Sprites are positioned in world space and shifted by the camera.
//!
//! # Architecture
//!
//! - `Renderable` trait: what to draw for an entity and where
//! - `Layer`: back-to-front ordering for entity kinds
//! - `entity_commands()`: collects, sorts by layer (stable) and offsets
use crate::collectible::{Coin, PowerUp};
use crate::collision::Collidable;
use crate::effect::Effect;
use crate::goomba::Goomba;
use crate::platform::Platform;
use crate::player::Player;
use crate::sprite::{SpriteAtlas, SpriteKey};
use sdl2::pixels::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite {
        key: SpriteKey,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    },
}

/// Back-to-front draw order. Within a layer, collection order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Platforms,
    Collectibles,
    Enemies,
    Effects,
    Player,
}

/// Trait for entities that end up on screen.
pub trait Renderable {
    fn sprite(&self) -> SpriteKey;

    /// World-space top-left corner of the sprite
    fn position(&self) -> (f32, f32);

    fn layer(&self) -> Layer;

    /// Drawn size; the sprite's natural size unless the entity stretches it
    fn draw_size(&self, atlas: &SpriteAtlas) -> (u32, u32) {
        let size = atlas.size(self.sprite());
        (size.width, size.height)
    }
}

impl Renderable for Platform {
    fn sprite(&self) -> SpriteKey {
        self.kind.sprite()
    }

    fn position(&self) -> (f32, f32) {
        let bounds = self.get_bounds();
        (bounds.x, bounds.y)
    }

    fn layer(&self) -> Layer {
        Layer::Platforms
    }

    fn draw_size(&self, _atlas: &SpriteAtlas) -> (u32, u32) {
        let bounds = self.get_bounds();
        (bounds.width as u32, bounds.height as u32)
    }
}

impl Renderable for Coin {
    fn sprite(&self) -> SpriteKey {
        SpriteKey::Coin
    }

    fn position(&self) -> (f32, f32) {
        let bounds = self.get_bounds();
        (bounds.x, bounds.y)
    }

    fn layer(&self) -> Layer {
        Layer::Collectibles
    }
}

impl Renderable for PowerUp {
    fn sprite(&self) -> SpriteKey {
        self.kind.sprite()
    }

    fn position(&self) -> (f32, f32) {
        (self.body.bounds.x, self.body.bounds.y)
    }

    fn layer(&self) -> Layer {
        Layer::Collectibles
    }
}

impl Renderable for Goomba {
    fn sprite(&self) -> SpriteKey {
        Goomba::sprite(self)
    }

    fn position(&self) -> (f32, f32) {
        (self.body.bounds.x, self.body.bounds.y)
    }

    fn layer(&self) -> Layer {
        Layer::Enemies
    }
}

impl Renderable for Effect {
    fn sprite(&self) -> SpriteKey {
        Effect::sprite(self)
    }

    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn layer(&self) -> Layer {
        Layer::Effects
    }
}

impl Renderable for Player {
    fn sprite(&self) -> SpriteKey {
        Player::sprite(self)
    }

    fn position(&self) -> (f32, f32) {
        (self.body.bounds.x, self.body.bounds.y)
    }

    fn layer(&self) -> Layer {
        Layer::Player
    }
}

/// Screen-space sprite command for one entity
pub fn sprite_command(entity: &dyn Renderable, camera_x: f32, atlas: &SpriteAtlas) -> DrawCommand {
    let (x, y) = entity.position();
    let (width, height) = entity.draw_size(atlas);
    DrawCommand::Sprite {
        key: entity.sprite(),
        x: (x - camera_x).floor() as i32,
        y: y.floor() as i32,
        width,
        height,
    }
}

/// Sorts entities back-to-front and turns them into sprite commands.
///
/// `sort_by_key` is stable, so entities sharing a layer keep the order
/// they were passed in (level-definition order for level entities).
pub fn entity_commands(
    entities: Vec<&dyn Renderable>,
    camera_x: f32,
    atlas: &SpriteAtlas,
) -> Vec<DrawCommand> {
    let mut entities = entities;
    entities.sort_by_key(|entity| entity.layer());

    entities
        .into_iter()
        .map(|entity| sprite_command(entity, camera_x, atlas))
        .collect()
}
