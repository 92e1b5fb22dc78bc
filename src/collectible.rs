//! Things the player picks up: coins and power-ups.
//!
//! Coins never move. Mushrooms slide along platforms under gravity and
//! bounce off walls and the screen edges; flowers sit still.

use crate::collision::{Aabb, Collidable};
use crate::config::GameConfig;
use crate::physics::{AnimatedOnly, Body, Capability, PhysicsBody, WorldBounds};
use crate::platform::Platform;
use crate::sprite::{SpriteKey, SpriteSize};
use serde::{Deserialize, Serialize};

pub struct Coin {
    bounds: Aabb,
    pub value: u32,
}

impl Coin {
    pub fn new(x: f32, y: f32, size: SpriteSize, value: u32) -> Self {
        Coin {
            bounds: Aabb::new(x, y, size.width as f32, size.height as f32),
            value,
        }
    }
}

impl Collidable for Coin {
    fn get_bounds(&self) -> Aabb {
        self.bounds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    /// Grants the powered-up state
    Mushroom,
    /// Grants temporary invincibility
    Flower,
}

impl PowerUpKind {
    pub fn sprite(self) -> SpriteKey {
        match self {
            PowerUpKind::Mushroom => SpriteKey::Mushroom,
            PowerUpKind::Flower => SpriteKey::Flower,
        }
    }
}

pub struct PowerUp {
    pub kind: PowerUpKind,
    pub body: Body,
    pub value: u32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, x: f32, y: f32, size: SpriteSize, config: &GameConfig) -> Self {
        let (width, height) = (size.width as f32, size.height as f32);
        match kind {
            PowerUpKind::Mushroom => PowerUp {
                kind,
                body: Body::new(x, y, width, height, config.physics.gravity)
                    .with_velocity(config.physics.mushroom_speed, 0.0),
                value: config.scoring.mushroom,
            },
            PowerUpKind::Flower => PowerUp {
                kind,
                body: Body::new(x, y, width, height, 0.0),
                value: config.scoring.flower,
            },
        }
    }

    pub fn capability(&mut self) -> Capability<'_> {
        match self.kind {
            PowerUpKind::Mushroom => Capability::Physics(self),
            PowerUpKind::Flower => Capability::Animated(self),
        }
    }
}

impl Collidable for PowerUp {
    fn get_bounds(&self) -> Aabb {
        self.body.bounds
    }
}

impl PhysicsBody for PowerUp {
    fn integrate(&mut self) {
        self.body.integrate();
    }

    /// Lands on platforms, bounces off their sides and off the screen edges.
    ///
    /// The horizontal limits are the viewport's, not the level's.
    fn resolve_platforms(&mut self, platforms: &[Platform], bounds: &WorldBounds) {
        self.body.resolve_vertical(platforms);

        if let Some(index) = self.body.side_collision(platforms) {
            let wall = platforms[index].get_bounds();
            if self.body.vx > 0.0 {
                self.body.bounds.set_right(wall.left());
            } else {
                self.body.bounds.set_left(wall.right());
            }
            self.body.reverse_horizontal();
        }

        if self.body.bounds.left() < 0.0 {
            self.body.bounds.set_left(0.0);
            self.body.reverse_horizontal();
        }
        if self.body.bounds.right() > bounds.viewport_width {
            self.body.bounds.set_right(bounds.viewport_width);
            self.body.reverse_horizontal();
        }
    }
}

impl AnimatedOnly for PowerUp {
    /// Stationary power-ups have no lifetime
    fn tick(&mut self) -> bool {
        true
    }
}
