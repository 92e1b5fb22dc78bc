// Shared enums used throughout the game

use crate::input_system::InputContext;

/// Top-level mode of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title screen
    Menu,
    Playing,
}

impl GameState {
    /// Which key bindings apply in this state
    pub fn input_context(self) -> InputContext {
        match self {
            GameState::Menu => InputContext::Menu,
            GameState::Playing => InputContext::Playing,
        }
    }
}

/// Outcome of the player touching enemies in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    None,
    /// Landed on the enemy at this index of the live collection
    Stomped(usize),
    /// Ran into an enemy and lost a life
    Damaged { lives_left: u32 },
}
