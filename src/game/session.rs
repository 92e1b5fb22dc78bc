// Game session: state machine and per-frame update
//
// One `tick` is one frame. Menu frames only look for the start key; playing
// frames run input, physics, invincibility countdown, interactions, decay,
// checkpoint and camera in that order.

use crate::config::GameConfig;
use crate::effect::EffectKind;
use crate::error::Result;
use crate::gui::TitleScreen;
use crate::input_system::{GameAction, HeldKeys, InputContext};
use crate::level::LevelTable;
use crate::physics::step_bodies;
use crate::player::Player;
use crate::render::{entity_commands, DrawCommand, Renderable};
use crate::sprite::{SpriteAtlas, SpriteKey};
use crate::ui::Hud;
use sdl2::pixels::Color;

use super::interactions;
use super::types::{EnemyContact, GameState};
use super::world::GameWorld;

const PLAYING_BACKGROUND: Color = Color::RGB(0, 0, 255);

pub struct Game {
    pub config: GameConfig,
    levels: LevelTable,
    atlas: SpriteAtlas,
    pub state: GameState,
    pub player: Player,
    pub world: GameWorld,
    pub running: bool,
    title_screen: TitleScreen,
    hud: Hud,
}

impl Game {
    /// Starts on the title screen with the configured start level loaded.
    pub fn new(config: GameConfig, levels: LevelTable, atlas: SpriteAtlas) -> Result<Self> {
        let world = GameWorld::load(&config.start_level, &levels, &atlas, &config)?;

        let mario = atlas.size(SpriteKey::MarioRight);
        let mut player = Player::new(
            0.0,
            0.0,
            mario.width as f32,
            mario.height as f32,
            &config.physics,
            config.starting_lives,
        );
        player.place_at(world.start.0, world.start.1);

        Ok(Game {
            config,
            levels,
            atlas,
            state: GameState::Menu,
            player,
            world,
            running: true,
            title_screen: TitleScreen::new(),
            hud: Hud::new(),
        })
    }

    /// Replaces the world with `id` and puts the player at its start.
    ///
    /// Velocity, jump state, lives and score carry over.
    pub fn load_level(&mut self, id: &str) -> Result<()> {
        self.world = GameWorld::load(id, &self.levels, &self.atlas, &self.config)?;
        self.player.place_at(self.world.start.0, self.world.start.1);
        Ok(())
    }

    pub fn input_context(&self) -> InputContext {
        self.state.input_context()
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            log::info!("Game state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// Advances one frame.
    pub fn tick(&mut self, actions: &[GameAction], held: HeldKeys) -> Result<()> {
        if actions.contains(&GameAction::Quit) {
            log::info!("Quit requested");
            self.running = false;
            return Ok(());
        }

        match self.state {
            GameState::Menu => {
                if actions.contains(&GameAction::StartGame) {
                    self.set_state(GameState::Playing);
                }
                Ok(())
            }
            GameState::Playing => self.update_playing(actions, held),
        }
    }

    fn update_playing(&mut self, actions: &[GameAction], held: HeldKeys) -> Result<()> {
        // Leaving for the menu wins over anything else queued this frame
        if actions.contains(&GameAction::ReturnToMenu) {
            self.set_state(GameState::Menu);
            return Ok(());
        }

        self.player.apply_input(held);

        for action in actions {
            if *action == GameAction::Jump && self.player.jump() {
                let (x, y) = self.player.feet();
                self.world.spawn_effect(EffectKind::Jump, x, y);
            }
        }

        let bounds = self.world.bounds();
        step_bodies(
            &mut self.player,
            &mut self.world.goombas,
            &mut self.world.power_ups,
            &self.world.platforms,
            &bounds,
        );
        self.player.tick_invincibility();

        interactions::collect_coins(&mut self.player, &mut self.world);
        interactions::collect_power_ups(&mut self.player, &mut self.world, &self.config);

        match interactions::resolve_enemy_contact(&mut self.player, &mut self.world, &self.config) {
            EnemyContact::Damaged { lives_left: 0 } => return self.game_over(),
            EnemyContact::Damaged { .. } => {
                let (x, y) = self.world.start;
                self.player.respawn(x, y);
            }
            EnemyContact::Stomped(index) => log::debug!("Stomped goomba {}", index),
            EnemyContact::None => {}
        }

        self.world.decay();

        // Uses last frame's camera offset
        if let Some(next) = interactions::reached_checkpoint(&self.player, &self.world) {
            log::info!("Checkpoint reached: {} -> {}", self.world.level_id, next);
            self.load_level(&next)?;
        }

        let target = self.player.body.bounds;
        self.world
            .camera
            .update(&target, self.world.level_width, self.config.viewport_width());

        Ok(())
    }

    /// Out of lives: back to the title with a fresh score and the current
    /// level rebuilt.
    fn game_over(&mut self) -> Result<()> {
        log::info!("Game over with score {}", self.player.score);
        self.set_state(GameState::Menu);
        self.player.lives = self.config.starting_lives;
        self.player.score = 0;
        let id = self.world.level_id.clone();
        self.load_level(&id)
    }

    /// Everything to draw this frame, back to front.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let window = &self.config.window;
        match self.state {
            GameState::Menu => self.title_screen.draw_commands(window.width, window.height),
            GameState::Playing => {
                let world = &self.world;
                let mut entities: Vec<&dyn Renderable> = Vec::new();
                entities.extend(world.platforms.iter().map(|p| p as &dyn Renderable));
                entities.extend(world.coins.iter().map(|c| c as &dyn Renderable));
                entities.extend(world.power_ups.iter().map(|p| p as &dyn Renderable));
                entities.extend(world.goombas.iter().map(|g| g as &dyn Renderable));
                entities.extend(world.dead_goombas.iter().map(|g| g as &dyn Renderable));
                entities.extend(world.effects.iter().map(|e| e as &dyn Renderable));
                entities.push(&self.player);

                let mut commands = vec![DrawCommand::Clear(PLAYING_BACKGROUND)];
                commands.extend(entity_commands(entities, world.camera.x, &self.atlas));
                commands.extend(self.hud.draw_commands(
                    self.player.score,
                    self.player.lives,
                    &world.level_id,
                    &self.atlas,
                ));
                commands
            }
        }
    }
}
