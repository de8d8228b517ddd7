//! Asteroids application

use crate::actors::{self, GameStats};
use crate::assets::{self, GameTextures};
use crate::config::GameplayConfig;
use actor_engine::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

/// Frames between periodic status lines
const STATUS_INTERVAL: u64 = 60;

/// Ship, asteroid field and parallax background
pub struct AsteroidsGame {
    gameplay: GameplayConfig,
    seed: u64,
    stats: Rc<GameStats>,
    frames: u64,
}

impl AsteroidsGame {
    /// Create the game; `seed` fixes asteroid placement
    pub fn new(gameplay: GameplayConfig, seed: u64) -> Self {
        Self {
            gameplay,
            seed,
            stats: Rc::new(GameStats::default()),
            frames: 0,
        }
    }

    /// Counters collected while running
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }
}

impl Application for AsteroidsGame {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Initializing Asteroids...");
        let window = &engine.config().window;
        let playfield = Vec2::new(window.width as f32, window.height as f32);

        let textures = GameTextures::load(&mut engine.textures);
        let far = assets::load_layers(&mut engine.textures, &assets::FAR_BACKGROUND);
        let near = assets::load_layers(&mut engine.textures, &assets::NEAR_BACKGROUND);
        if textures.ship.is_none() {
            return Err(AppError::Asset(format!("ship texture {} is required", assets::SHIP)));
        }

        engine.world.add_actor(actors::background(playfield, &far, &near));
        engine
            .world
            .add_actor(actors::ship(playfield, &textures, &self.gameplay, Rc::clone(&self.stats)));

        let mut rng = StdRng::seed_from_u64(self.seed);
        for _ in 0..self.gameplay.asteroid_count {
            engine
                .world
                .add_actor(actors::asteroid(&mut rng, playfield, textures.asteroid, &self.gameplay));
        }

        log::info!(
            "Spawned {} asteroids, {} textures cached",
            self.gameplay.asteroid_count,
            engine.textures.len()
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        self.frames += 1;
        let remaining = actors::asteroids_remaining(&engine.world);

        if self.frames % STATUS_INTERVAL == 0 {
            log::debug!(
                "Frame {}: {} actors, {} asteroids left, {} shots fired",
                self.frames,
                engine.world.len(),
                remaining,
                self.stats.shots_fired.get()
            );
        }

        if remaining == 0 {
            log::info!("All asteroids destroyed after {} frames", self.frames);
            engine.quit();
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!(
            "Asteroids finished: {} shots fired, {} asteroids destroyed, {} actors left",
            self.stats.shots_fired.get(),
            self.stats.asteroids_destroyed.get(),
            engine.world.len()
        );
    }
}
