use crate::collision::{Aabb, Collidable};
use crate::config::PhysicsConfig;
use crate::input_system::HeldKeys;
use crate::physics::{Body, ContactKind, PhysicsBody, WorldBounds};
use crate::platform::Platform;
use crate::sprite::SpriteKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Where the player is in the jump state machine.
///
/// Derived from `jumping` and `double_jump_available`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Grounded,
    SingleJump,
    DoubleJump,
}

pub struct Player {
    pub body: Body,
    pub facing: Facing,
    pub jumping: bool,
    pub double_jump_available: bool,
    pub lives: u32,
    pub score: u32,
    pub power_up: bool,
    pub invincible: bool,
    pub invincible_timer: u32,
    jump_speed: f32,
    walk_speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, width: f32, height: f32, physics: &PhysicsConfig, lives: u32) -> Self {
        Player {
            body: Body::new(x, y, width, height, physics.gravity),
            facing: Facing::Right,
            jumping: false,
            double_jump_available: true,
            lives,
            score: 0,
            power_up: false,
            invincible: false,
            invincible_timer: 0,
            jump_speed: physics.jump_speed,
            walk_speed: physics.walk_speed,
        }
    }

    pub fn jump_state(&self) -> JumpState {
        match (self.jumping, self.double_jump_available) {
            (false, _) => JumpState::Grounded,
            (true, true) => JumpState::SingleJump,
            (true, false) => JumpState::DoubleJump,
        }
    }

    /// Starts a jump or a double jump. Returns false when neither is allowed.
    pub fn jump(&mut self) -> bool {
        match self.jump_state() {
            JumpState::Grounded => {
                self.body.vy = self.jump_speed;
                self.jumping = true;
                self.double_jump_available = true;
                true
            }
            JumpState::SingleJump => {
                self.body.vy = self.jump_speed;
                self.double_jump_available = false;
                true
            }
            JumpState::DoubleJump => false,
        }
    }

    /// Horizontal speed comes straight from the held keys; right wins ties.
    pub fn apply_input(&mut self, held: HeldKeys) {
        self.body.vx = 0.0;
        if held.left {
            self.body.vx = -self.walk_speed;
        }
        if held.right {
            self.body.vx = self.walk_speed;
        }
    }

    pub fn land(&mut self) {
        self.body.vy = 0.0;
        self.jumping = false;
        self.double_jump_available = true;
    }

    /// Bounce off a stomped enemy
    pub fn bounce(&mut self) {
        self.body.vy = self.jump_speed / 2.0;
    }

    /// Moves the player without touching velocity or jump state
    pub fn place_at(&mut self, x: f32, y: f32) {
        self.body.bounds.x = x;
        self.body.bounds.y = y;
    }

    /// Back to `(x, y)` at rest, as after losing a life
    pub fn respawn(&mut self, x: f32, y: f32) {
        self.place_at(x, y);
        self.body.vx = 0.0;
        self.body.vy = 0.0;
        self.jumping = false;
        self.double_jump_available = true;
    }

    /// Takes one life and returns how many remain
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn grant_invincibility(&mut self, frames: u32) {
        self.invincible = true;
        self.invincible_timer = frames;
    }

    /// Called once per frame
    pub fn tick_invincibility(&mut self) {
        if !self.invincible {
            return;
        }
        self.invincible_timer = self.invincible_timer.saturating_sub(1);
        if self.invincible_timer == 0 {
            self.invincible = false;
            log::debug!("Invincibility wore off");
        }
    }

    /// Bottom-center of the player's box
    pub fn feet(&self) -> (f32, f32) {
        let bounds = self.body.bounds;
        (bounds.center_x(), bounds.bottom())
    }

    pub fn sprite(&self) -> SpriteKey {
        if self.jumping {
            return SpriteKey::MarioJump;
        }
        match self.facing {
            Facing::Right => SpriteKey::MarioRight,
            Facing::Left => SpriteKey::MarioLeft,
        }
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Aabb {
        self.body.bounds
    }
}

impl PhysicsBody for Player {
    fn integrate(&mut self) {
        self.body.integrate();

        if self.body.vx > 0.0 {
            self.facing = Facing::Right;
        } else if self.body.vx < 0.0 {
            self.facing = Facing::Left;
        }
    }

    /// Vertical contact only; the player can pass through platform sides.
    fn resolve_platforms(&mut self, platforms: &[Platform], bounds: &WorldBounds) {
        let contact = self.body.resolve_vertical(platforms);
        if matches!(contact, Some(c) if c.kind == ContactKind::Landed) {
            self.land();
        }

        if self.body.bounds.bottom() > bounds.floor_y {
            self.body.bounds.set_bottom(bounds.floor_y);
            self.land();
        }
    }
}
