use crate::error::Result;

/// Every image the game draws, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    MarioRight,
    MarioLeft,
    MarioJump,
    Goomba,
    GoombaDead,
    Brick,
    Ground,
    Platform,
    Coin,
    Mushroom,
    Flower,
    CoinEffect,
    JumpEffect,
    Heart,
    CoinIcon,
}

impl SpriteKey {
    pub const COUNT: usize = 15;

    pub const ALL: [SpriteKey; SpriteKey::COUNT] = [
        SpriteKey::MarioRight,
        SpriteKey::MarioLeft,
        SpriteKey::MarioJump,
        SpriteKey::Goomba,
        SpriteKey::GoombaDead,
        SpriteKey::Brick,
        SpriteKey::Ground,
        SpriteKey::Platform,
        SpriteKey::Coin,
        SpriteKey::Mushroom,
        SpriteKey::Flower,
        SpriteKey::CoinEffect,
        SpriteKey::JumpEffect,
        SpriteKey::Heart,
        SpriteKey::CoinIcon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpriteKey::MarioRight => "mario_right",
            SpriteKey::MarioLeft => "mario_left",
            SpriteKey::MarioJump => "mario_jump",
            SpriteKey::Goomba => "goomba",
            SpriteKey::GoombaDead => "goomba_dead",
            SpriteKey::Brick => "brick",
            SpriteKey::Ground => "ground",
            SpriteKey::Platform => "platform",
            SpriteKey::Coin => "coin",
            SpriteKey::Mushroom => "mushroom",
            SpriteKey::Flower => "flower",
            SpriteKey::CoinEffect => "coin_effect",
            SpriteKey::JumpEffect => "jump_effect",
            SpriteKey::Heart => "heart",
            SpriteKey::CoinIcon => "coin_icon",
        }
    }

    /// Where the pixels for this key come from.
    ///
    /// `mario_left` has no file of its own; it is `mario_right` mirrored.
    pub fn source(self) -> SpriteSource {
        match self {
            SpriteKey::MarioLeft => SpriteSource {
                key: SpriteKey::MarioRight,
                flip_horizontal: true,
            },
            other => SpriteSource {
                key: other,
                flip_horizontal: false,
            },
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.source().key.name())
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSource {
    pub key: SpriteKey,
    pub flip_horizontal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub fn new(width: u32, height: u32) -> Self {
        SpriteSize { width, height }
    }
}

/// Source of named images with known pixel sizes.
///
/// The simulation never touches pixels, only sizes; drawing goes through
/// `DrawCommand`s that the display surface resolves back to textures.
pub trait AssetProvider {
    fn sprite_size(&self, key: SpriteKey) -> Result<SpriteSize>;
}

/// Pixel sizes of every sprite, resolved once at startup.
///
/// Building the atlas asks the provider for every key, so missing art fails
/// here instead of in the middle of a frame. After that, lookups cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAtlas {
    sizes: [SpriteSize; SpriteKey::COUNT],
}

impl SpriteAtlas {
    pub fn from_provider(provider: &dyn AssetProvider) -> Result<Self> {
        let mut sizes = [SpriteSize::default(); SpriteKey::COUNT];
        for key in SpriteKey::ALL {
            sizes[key.index()] = provider.sprite_size(key)?;
        }
        log::debug!("Resolved {} sprite sizes", SpriteKey::COUNT);
        Ok(SpriteAtlas { sizes })
    }

    pub fn size(&self, key: SpriteKey) -> SpriteSize {
        self.sizes[key.index()]
    }

    /// Atlas where every sprite has the same size
    #[cfg(test)]
    pub fn uniform(width: u32, height: u32) -> Self {
        SpriteAtlas {
            sizes: [SpriteSize::new(width, height); SpriteKey::COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    struct OnlyMario;

    impl AssetProvider for OnlyMario {
        fn sprite_size(&self, key: SpriteKey) -> Result<SpriteSize> {
            match key.source().key {
                SpriteKey::MarioRight => Ok(SpriteSize::new(30, 40)),
                other => Err(GameError::MissingSprite {
                    key: other.name().to_string(),
                    reason: "not in test provider".to_string(),
                }),
            }
        }
    }

    struct Everything;

    impl AssetProvider for Everything {
        fn sprite_size(&self, key: SpriteKey) -> Result<SpriteSize> {
            Ok(SpriteSize::new(key.index() as u32 + 1, 16))
        }
    }

    #[test]
    fn test_all_keys_are_listed_once() {
        for (index, key) in SpriteKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), index);
        }
    }

    #[test]
    fn test_mario_left_is_flipped_right() {
        let source = SpriteKey::MarioLeft.source();
        assert_eq!(source.key, SpriteKey::MarioRight);
        assert!(source.flip_horizontal);
        assert_eq!(SpriteKey::MarioLeft.file_name(), "mario_right.png");
        assert_eq!(SpriteKey::GoombaDead.file_name(), "goomba_dead.png");
    }

    #[test]
    fn test_atlas_fails_fast_on_missing_sprite() {
        let result = SpriteAtlas::from_provider(&OnlyMario);
        assert!(matches!(result, Err(GameError::MissingSprite { .. })));
    }

    #[test]
    fn test_atlas_remembers_provider_sizes() {
        let atlas = SpriteAtlas::from_provider(&Everything).unwrap();
        assert_eq!(atlas.size(SpriteKey::MarioRight), SpriteSize::new(1, 16));
        assert_eq!(atlas.size(SpriteKey::CoinIcon), SpriteSize::new(15, 16));
    }
}
