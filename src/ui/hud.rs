use crate::render::DrawCommand;
use crate::sprite::{SpriteAtlas, SpriteKey};
use crate::text::text_width;
use sdl2::pixels::Color;

/// Configuration for HUD appearance
#[derive(Debug, Clone)]
pub struct HudStyle {
    /// Top-left of the first line
    pub origin: (i32, i32),
    pub line_spacing: i32,
    pub text_color: Color,
    pub text_scale: u32,
    /// Gap between a line of text and its icon
    pub icon_gap: i32,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            origin: (10, 10),
            line_spacing: 30,
            text_color: Color::RGB(255, 255, 255),
            text_scale: 3,
            icon_gap: 10,
        }
    }
}

/// Score, lives and level id in the top-left corner.
///
/// The coin icon sits after the score line and the heart after the lives
/// line.
pub struct Hud {
    style: HudStyle,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            style: HudStyle::default(),
        }
    }

    pub fn draw_commands(&self, score: u32, lives: u32, level_id: &str, atlas: &SpriteAtlas) -> Vec<DrawCommand> {
        let lines = [
            (format!("SCORE: {}", score), Some(SpriteKey::CoinIcon)),
            (format!("LIVES: {}", lives), Some(SpriteKey::Heart)),
            (format!("LEVEL: {}", level_id), None),
        ];

        let (x, top) = self.style.origin;
        let mut commands = Vec::new();
        for (row, (text, icon)) in lines.into_iter().enumerate() {
            let y = top + row as i32 * self.style.line_spacing;

            if let Some(key) = icon {
                let size = atlas.size(key);
                commands.push(DrawCommand::Sprite {
                    key,
                    x: x + text_width(&text, self.style.text_scale) as i32 + self.style.icon_gap,
                    y,
                    width: size.width,
                    height: size.height,
                });
            }

            commands.push(DrawCommand::Text {
                text,
                x,
                y,
                color: self.style.text_color,
                scale: self.style.text_scale,
            });
        }
        commands
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
