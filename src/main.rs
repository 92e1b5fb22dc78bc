mod collectible;
mod collision;
mod config;
mod display;
mod effect;
mod error;
mod game;
mod goomba;
mod gui;
mod input_system;
mod level;
mod physics;
mod platform;
mod player;
mod render;
mod sprite;
mod text;
mod ui;

#[cfg(test)]
mod test_support;

use config::GameConfig;
use display::{SdlAssets, SdlSurface};
use error::{GameError, Result};
use game::Game;
use level::LevelTable;
use sprite::SpriteAtlas;

fn load_levels(config: &GameConfig) -> Result<LevelTable> {
    let levels = match &config.levels_path {
        Some(path) => LevelTable::load_from_file(path)?,
        None => LevelTable::embedded()?,
    };

    if !levels.contains(&config.start_level) {
        return Err(GameError::UnknownLevel(config.start_level.clone()));
    }
    Ok(levels)
}

fn try_main() -> Result<()> {
    let config = GameConfig::load()?;
    let levels = load_levels(&config)?;

    let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::Sdl)?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(GameError::sdl)?;

    let canvas = window.into_canvas().build().map_err(GameError::sdl)?;
    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

    let assets = SdlAssets::load(&texture_creator, &config.sprite_dir)?;
    let atlas = SpriteAtlas::from_provider(&assets)?;

    log::info!(
        "Window {}x{} at {} fps",
        config.window.width,
        config.window.height,
        config.window.fps
    );

    let fps = config.window.fps;
    let mut game = Game::new(config, levels, atlas)?;
    let mut surface = SdlSurface::new(canvas, event_pump, &assets, fps);

    game::run(&mut game, &mut surface)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = try_main() {
        log::error!("{}", error);
        std::process::exit(1);
    }

    log::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_embedded_levels() {
        let levels = load_levels(&GameConfig::default()).unwrap();
        assert!(levels.contains("LEVEL_1"));
    }

    #[test]
    fn test_missing_start_level_rejected() {
        let config = GameConfig {
            start_level: "LEVEL_99".to_string(),
            ..GameConfig::default()
        };
        assert!(matches!(load_levels(&config), Err(GameError::UnknownLevel(_))));
    }
}
