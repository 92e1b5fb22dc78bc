//! SDL2 display and input surface.
//!
//! Everything that touches SDL lives here: the window canvas, loaded
//! textures, the event pump and frame pacing. The game loop only sees the
//! [`Surface`] trait, so it runs the same against a scripted surface in
//! tests.

use crate::error::{GameError, Result};
use crate::input_system::{GameAction, HeldKeys, InputContext, InputSystem};
use crate::render::DrawCommand;
use crate::sprite::{AssetProvider, SpriteKey, SpriteSize};
use crate::text::draw_simple_text;
use sdl2::EventPump;
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

/// Where frames go and where input comes from.
pub trait Surface {
    /// Drains pending events into actions for the given context
    fn poll_actions(&mut self, context: InputContext) -> Vec<GameAction>;

    fn held_keys(&self) -> HeldKeys;

    fn draw(&mut self, commands: &[DrawCommand]) -> Result<()>;

    fn present(&mut self);

    /// Sleeps out the rest of the current frame
    fn wait_for_next_frame(&mut self);
}

/// Sprite textures loaded from `<sprite_dir>/<name>.png`.
///
/// Keys that are drawn from another key's image (`mario_left`) have no
/// texture of their own.
pub struct SdlAssets<'a> {
    textures: HashMap<SpriteKey, Texture<'a>>,
}

impl<'a> SdlAssets<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, sprite_dir: impl AsRef<Path>) -> Result<Self> {
        let sprite_dir = sprite_dir.as_ref();
        let mut textures = HashMap::new();

        for key in SpriteKey::ALL {
            let source = key.source().key;
            if textures.contains_key(&source) {
                continue;
            }

            let path = sprite_dir.join(source.file_name());
            let texture = texture_creator
                .load_texture(&path)
                .map_err(|reason| GameError::MissingSprite {
                    key: source.name().to_string(),
                    reason: format!("{}: {}", path.display(), reason),
                })?;
            log::debug!("Loaded sprite {} from {}", source.name(), path.display());
            textures.insert(source, texture);
        }

        log::info!("Loaded {} sprite textures from {}", textures.len(), sprite_dir.display());
        Ok(SdlAssets { textures })
    }

    fn texture(&self, key: SpriteKey) -> Result<&Texture<'a>> {
        let source = key.source().key;
        self.textures.get(&source).ok_or_else(|| GameError::MissingSprite {
            key: source.name().to_string(),
            reason: "texture not loaded".to_string(),
        })
    }
}

impl AssetProvider for SdlAssets<'_> {
    fn sprite_size(&self, key: SpriteKey) -> Result<SpriteSize> {
        let query = self.texture(key)?.query();
        Ok(SpriteSize::new(query.width, query.height))
    }
}

/// Sleeps so that frames start at a fixed rate.
pub struct FrameClock {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        FrameClock {
            frame_duration: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Time still left in the current frame
    pub fn remaining(&self) -> Duration {
        self.frame_duration.saturating_sub(self.frame_start.elapsed())
    }

    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

pub struct SdlSurface<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    assets: &'a SdlAssets<'a>,
    input: InputSystem,
    clock: FrameClock,
}

impl<'a> SdlSurface<'a> {
    pub fn new(canvas: Canvas<Window>, event_pump: EventPump, assets: &'a SdlAssets<'a>, fps: u32) -> Self {
        SdlSurface {
            canvas,
            event_pump,
            assets,
            input: InputSystem::new(),
            clock: FrameClock::new(fps),
        }
    }

    fn execute(&mut self, command: &DrawCommand) -> Result<()> {
        match command {
            DrawCommand::Clear(color) => {
                self.canvas.set_draw_color(*color);
                self.canvas.clear();
            }
            DrawCommand::Sprite {
                key,
                x,
                y,
                width,
                height,
            } => {
                let assets = self.assets;
                let texture = assets.texture(*key)?;
                let dest = Rect::new(*x, *y, *width, *height);
                self.canvas
                    .copy_ex(texture, None, Some(dest), 0.0, None, key.source().flip_horizontal, false)
                    .map_err(GameError::Sdl)?;
            }
            DrawCommand::Text {
                text,
                x,
                y,
                color,
                scale,
            } => {
                draw_simple_text(&mut self.canvas, text, *x, *y, *color, *scale).map_err(GameError::Sdl)?;
            }
        }
        Ok(())
    }
}

impl Surface for SdlSurface<'_> {
    fn poll_actions(&mut self, context: InputContext) -> Vec<GameAction> {
        self.input.set_context(context);
        self.input.poll_events(&mut self.event_pump)
    }

    fn held_keys(&self) -> HeldKeys {
        InputSystem::held_keys(&self.event_pump)
    }

    fn draw(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    fn wait_for_next_frame(&mut self) {
        self.clock.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_from_fps() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_duration, Duration::from_secs(1) / 60);
        assert!(clock.remaining() <= clock.frame_duration);

        // Zero fps would divide by zero
        assert_eq!(FrameClock::new(0).frame_duration, Duration::from_secs(1));
    }
}
