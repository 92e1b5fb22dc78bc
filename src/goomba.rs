use crate::collision::{Aabb, Collidable};
use crate::physics::{Body, PhysicsBody, WorldBounds};
use crate::platform::Platform;
use crate::sprite::SpriteKey;

/// Walking enemy. Patrols whatever it stands on and dies when stomped.
pub struct Goomba {
    pub body: Body,
    pub dead: bool,
    /// Frames left before a dead goomba is removed
    pub death_timer: u32,
}

impl Goomba {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32, gravity: f32, death_frames: u32) -> Self {
        Goomba {
            body: Body::new(x, y, width, height, gravity).with_velocity(speed, 0.0),
            dead: false,
            death_timer: death_frames,
        }
    }

    pub fn stomp(&mut self) {
        self.dead = true;
        self.body.vx = 0.0;
        self.body.vy = 0.0;
    }

    /// Counts down a dead goomba; returns false once it should be removed
    pub fn tick_death(&mut self) -> bool {
        self.death_timer = self.death_timer.saturating_sub(1);
        self.death_timer > 0
    }

    pub fn sprite(&self) -> SpriteKey {
        if self.dead {
            SpriteKey::GoombaDead
        } else {
            SpriteKey::Goomba
        }
    }
}

impl Collidable for Goomba {
    fn get_bounds(&self) -> Aabb {
        self.body.bounds
    }
}

impl PhysicsBody for Goomba {
    fn integrate(&mut self) {
        if !self.dead {
            self.body.integrate();
        }
    }

    /// Turns around at the end of its platform, at walls and at the level edges.
    fn resolve_platforms(&mut self, platforms: &[Platform], bounds: &WorldBounds) {
        if self.dead {
            return;
        }

        let mut turned = false;
        if let Some(contact) = self.body.resolve_vertical(platforms) {
            let support = platforms[contact.platform].get_bounds();
            let at_edge = (self.body.vx > 0.0 && self.body.bounds.right() >= support.right())
                || (self.body.vx < 0.0 && self.body.bounds.left() <= support.left());
            if at_edge {
                self.body.reverse_horizontal();
                turned = true;
            }
        }

        // Walked into a wall: turn, but stay where we are
        if !turned && self.body.side_collision(platforms).is_some() {
            self.body.reverse_horizontal();
        }

        if self.body.bounds.left() < 0.0 {
            self.body.bounds.set_left(0.0);
            self.body.reverse_horizontal();
        }
        if self.body.bounds.right() > bounds.level_width {
            self.body.bounds.set_right(bounds.level_width);
            self.body.reverse_horizontal();
        }
    }
}
