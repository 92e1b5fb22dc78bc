// Game module - Contains all game logic and state management
//
// This module contains:
// - types.rs: Shared enums (game state, enemy contact outcome)
// - camera.rs: Horizontal scrolling camera
// - world.rs: GameWorld struct and per-level entity management
// - interactions.rs: Pickups, stomps, damage and the checkpoint
// - session.rs: Game struct, state machine and per-frame update

// Module declarations
pub mod camera;
pub mod interactions;
pub mod session;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use session::Game;

use crate::display::Surface;
use crate::error::Result;

/// Runs frames until the player quits.
///
/// Each frame: poll input for the current state, update, draw, present,
/// then wait out the rest of the frame.
pub fn run(game: &mut Game, surface: &mut impl Surface) -> Result<()> {
    log::info!("Entering game loop");
    let mut frames: u64 = 0;

    while game.running {
        let actions = surface.poll_actions(game.input_context());
        let held = surface.held_keys();
        game.tick(&actions, held)?;

        if !game.running {
            break;
        }

        surface.draw(&game.draw_commands())?;
        surface.present();
        surface.wait_for_next_frame();
        frames += 1;
    }

    log::info!("Left game loop after {} frames", frames);
    Ok(())
}
