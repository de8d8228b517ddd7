//! Asteroids demo
//!
//! Runs the game headless on a scripted platform: the ship thrusts, turns and
//! fires for a fixed number of frames, then the run reports what was drawn.

mod actors;
mod assets;
mod components;
mod config;
mod game;

use actor_engine::foundation::logging;
use actor_engine::prelude::*;
use assets::FallbackTextureLoader;
use config::GameConfig;
use game::AsteroidsGame;

const CONFIG_PATH: &str = "asteroids.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = GameConfig::load(CONFIG_PATH);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => GameConfig::default(),
    };

    logging::init(&config.engine.log_filter);
    log::info!("Starting Asteroids demo");
    match loaded {
        Ok(Some(_)) => log::info!("Loaded config from {}", CONFIG_PATH),
        Ok(None) => log::info!("No config at {}, using defaults", CONFIG_PATH),
        Err(e) => log::warn!("Failed to load {}: {}; using defaults", CONFIG_PATH, e),
    }

    let loader = FallbackTextureLoader::new(&config.demo.asset_root);
    let mut engine = Engine::with_parts(config.engine.clone(), SystemClock::new(), loader)?;
    let mut platform = demo_platform(config.demo.frames);
    let mut game = AsteroidsGame::new(config.gameplay.clone(), config.demo.seed);

    match engine.run(&mut game, &mut platform) {
        Ok(()) => {
            let recorder = platform.recorder();
            log::info!(
                "Asteroids demo completed: {} frames presented, {} draw calls, {} asteroids destroyed",
                recorder.frames_presented(),
                recorder.total_draw_calls(),
                game.stats().asteroids_destroyed.get()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Asteroids demo failed: {:?}", e);
            Err(e.into())
        }
    }
}

/// Input script: thrust, turn both ways, and keep firing
fn demo_platform(frames: u64) -> ScriptedPlatform {
    ScriptedPlatform::new()
        .quit_after(frames)
        .hold_key(KeyCode::W, 1..90)
        .hold_key(KeyCode::A, 60..120)
        .hold_key(KeyCode::D, 150..200)
        .hold_key(KeyCode::Space, 20..frames.max(20))
}
