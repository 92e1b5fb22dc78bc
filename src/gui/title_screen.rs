//! Title Screen Component
//!
//! Shown while the game is in the menu state. Space starts the game; the
//! component itself has no state beyond its style.

use crate::render::DrawCommand;
use crate::text::text_width;
use sdl2::pixels::Color;

pub const TITLE: &str = "MARIO BROS";
pub const PROMPT: &str = "PRESS SPACE TO START";

/// Configuration for title screen appearance
#[derive(Debug, Clone)]
pub struct TitleScreenStyle {
    pub background: Color,
    pub title_color: Color,
    pub title_scale: u32,
    pub prompt_color: Color,
    pub prompt_scale: u32,
}

impl Default for TitleScreenStyle {
    fn default() -> Self {
        TitleScreenStyle {
            background: Color::RGB(0, 0, 0),
            title_color: Color::RGB(255, 255, 255),
            title_scale: 6,
            prompt_color: Color::RGB(255, 255, 255),
            prompt_scale: 3,
        }
    }
}

pub struct TitleScreen {
    style: TitleScreenStyle,
}

impl TitleScreen {
    pub fn new() -> Self {
        TitleScreen {
            style: TitleScreenStyle::default(),
        }
    }

    /// Title a third of the way down, prompt at the middle; both centered.
    pub fn draw_commands(&self, screen_width: u32, screen_height: u32) -> Vec<DrawCommand> {
        let center = |text: &str, scale: u32| {
            (screen_width as i32 - text_width(text, scale) as i32) / 2
        };

        vec![
            DrawCommand::Clear(self.style.background),
            DrawCommand::Text {
                text: TITLE.to_string(),
                x: center(TITLE, self.style.title_scale),
                y: screen_height as i32 / 3,
                color: self.style.title_color,
                scale: self.style.title_scale,
            },
            DrawCommand::Text {
                text: PROMPT.to_string(),
                x: center(PROMPT, self.style.prompt_scale),
                y: screen_height as i32 / 2,
                color: self.style.prompt_color,
                scale: self.style.prompt_scale,
            },
        ]
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}
