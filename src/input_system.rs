use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};

/// High-level actions produced by discrete input events
///
/// The game loop only sees these, never raw SDL events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Window closed
    Quit,
    /// Leave the title screen
    StartGame,
    Jump,
    /// Back to the title screen
    ReturnToMenu,
}

/// Input context determines which actions a key can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Menu,
    Playing,
}

/// Continuous (held) keys, sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Translates SDL2 events into `GameAction`s for the current context
///
/// Space means "start" on the title screen and "jump" while playing; the
/// context decides which.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Drains all pending SDL events. Call once per frame.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.translate_key(key) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    pub fn translate_key(&self, key: Keycode) -> Option<GameAction> {
        match (self.context, key) {
            (InputContext::Menu, Keycode::Space) => Some(GameAction::StartGame),
            (InputContext::Playing, Keycode::Space) => Some(GameAction::Jump),
            (InputContext::Playing, Keycode::Escape) => Some(GameAction::ReturnToMenu),
            _ => None,
        }
    }

    pub fn held_keys(event_pump: &EventPump) -> HeldKeys {
        let keyboard = event_pump.keyboard_state();
        HeldKeys {
            left: keyboard.is_scancode_pressed(Scancode::Left),
            right: keyboard.is_scancode_pressed(Scancode::Right),
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
