use crate::physics::AnimatedOnly;
use crate::sprite::SpriteKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    CoinCollect,
    Jump,
}

/// Short-lived sprite with no collision, e.g. the sparkle left by a coin.
///
/// `(x, y)` is the sprite's top-left corner. Effects are spawned at a point
/// of interest (coin center, player's feet) and drawn from there.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub x: f32,
    pub y: f32,
    /// Frames left on screen
    pub lifetime: u32,
}

impl Effect {
    pub fn new(kind: EffectKind, x: f32, y: f32, lifetime: u32) -> Self {
        Effect { kind, x, y, lifetime }
    }

    pub fn sprite(&self) -> SpriteKey {
        match self.kind {
            EffectKind::CoinCollect => SpriteKey::CoinEffect,
            EffectKind::Jump => SpriteKey::JumpEffect,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.lifetime == 0
    }
}

impl AnimatedOnly for Effect {
    fn tick(&mut self) -> bool {
        self.lifetime = self.lifetime.saturating_sub(1);
        !self.is_finished()
    }
}
