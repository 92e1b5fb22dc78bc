use crate::collision::{Aabb, Collidable};
use crate::level::PlatformSpec;
use crate::sprite::SpriteKey;
use serde::{Deserialize, Serialize};

/// Platform tiles are always this tall; bricks are square.
pub const PLATFORM_HEIGHT: f32 = 32.0;
pub const BRICK_SIZE: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Ground,
    Platform,
    Brick,
}

impl PlatformKind {
    pub fn sprite(self) -> SpriteKey {
        match self {
            PlatformKind::Ground => SpriteKey::Ground,
            PlatformKind::Platform => SpriteKey::Platform,
            PlatformKind::Brick => SpriteKey::Brick,
        }
    }
}

/// Static, solid piece of level geometry. Never moves after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub kind: PlatformKind,
    bounds: Aabb,
}

impl Platform {
    /// Ground and platform pieces stretch to `width`; bricks ignore it.
    pub fn new(kind: PlatformKind, x: f32, y: f32, width: f32) -> Self {
        let (width, height) = match kind {
            PlatformKind::Brick => (BRICK_SIZE, BRICK_SIZE),
            PlatformKind::Ground | PlatformKind::Platform => (width, PLATFORM_HEIGHT),
        };
        Platform {
            kind,
            bounds: Aabb::new(x, y, width, height),
        }
    }

    pub fn from_spec(spec: &PlatformSpec) -> Self {
        Platform::new(spec.kind, spec.x, spec.y, spec.width)
    }
}

impl Collidable for Platform {
    fn get_bounds(&self) -> Aabb {
        self.bounds
    }
}
