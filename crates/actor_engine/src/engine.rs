//! Frame loop driver
//!
//! One frame is: poll events, feed the keyboard snapshot to actors, wait for
//! the next frame slot, update the world with the clamped delta time, run the
//! application hook, then clear, draw and present. A quit request (window
//! event, Escape, or [`Engine::quit`]) lets the current frame finish and stops
//! the loop before the next one.

use crate::application::Application;
use crate::assets::{ImageTextureLoader, TextureCache, TextureLoader};
use crate::config::{ConfigError, EngineConfig};
use crate::events::Event;
use crate::foundation::time::{Clock, FrameTimer, SystemClock};
use crate::input::KeyCode;
use crate::platform::Platform;
use crate::world::World;
use thiserror::Error;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Frames keep running
    Running,
    /// Terminal: the loop exits after the current frame
    Stopped,
}

/// Main engine struct
///
/// The engine owns the world and the texture cache and drives the frame loop
/// against a [`Platform`].
pub struct Engine {
    /// All actors and the draw-order list
    pub world: World,

    /// Texture cache
    pub textures: TextureCache,

    config: EngineConfig,
    clock: Box<dyn Clock>,
    timer: FrameTimer,
    state: LoopState,
    shut_down: bool,
}

impl Engine {
    /// Create an engine on the system clock, loading textures from disk
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_parts(config, SystemClock::new(), ImageTextureLoader::new())
    }

    /// Create an engine with an injected clock and texture loader
    pub fn with_parts(
        config: EngineConfig,
        clock: impl Clock + 'static,
        loader: impl TextureLoader + 'static,
    ) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        config.validate()?;

        let mut world = World::new();
        world.set_isolate_panics(config.frame.isolate_actor_panics);

        let mut timer = FrameTimer::new(config.frame.min_frame_interval(), config.frame.max_delta_seconds);
        timer.reset(clock.now());

        Ok(Self {
            world,
            textures: TextureCache::new(loader),
            config,
            clock: Box::new(clock),
            timer,
            state: LoopState::Running,
            shut_down: false,
        })
    }

    /// Run the application until the loop stops, then tear down once
    pub fn run<A: Application>(&mut self, app: &mut A, platform: &mut dyn Platform) -> Result<(), EngineError> {
        self.state = LoopState::Running;
        self.shut_down = false;

        if let Err(e) = app.initialize(self) {
            log::error!("Application initialization failed: {}", e);
            app.cleanup(self);
            self.shutdown();
            return Err(EngineError::Application(format!("App initialization: {}", e)));
        }

        log::info!("Starting main loop...");
        self.timer.reset(self.clock.now());

        let result = loop {
            match self.run_frame(app, platform) {
                Ok(LoopState::Running) => {}
                Ok(LoopState::Stopped) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        app.cleanup(self);
        self.shutdown();
        log::info!(
            "Engine shutdown complete after {} frames ({:.2}s simulated)",
            self.timer.frame_count(),
            self.timer.total_time()
        );
        result
    }

    /// Run a single frame and report whether the loop should continue
    pub fn run_frame<A: Application>(
        &mut self,
        app: &mut A,
        platform: &mut dyn Platform,
    ) -> Result<LoopState, EngineError> {
        for event in platform.poll_events() {
            match event {
                Event::Quit => self.quit(),
                Event::Resized { width, height } => log::debug!("Window resized to {}x{}", width, height),
                Event::KeyDown(_) | Event::KeyUp(_) => {}
            }
            app.handle_event(self, &event)
                .map_err(|e| EngineError::Application(format!("App event: {}", e)))?;
        }

        let keys = platform.keyboard_state();
        if self.config.quit_on_escape && keys.is_down(KeyCode::Escape) {
            self.quit();
        }
        self.world.process_input(&keys);

        let delta_time = self.timer.tick(self.clock.as_mut());
        self.world.update_frame(delta_time);
        app.update(self, delta_time)
            .map_err(|e| EngineError::Application(format!("App update: {}", e)))?;

        let renderer = platform.renderer();
        renderer.clear(self.config.clear_color);
        self.world.render(renderer);
        renderer.present();

        Ok(self.state)
    }

    /// Destroy all actors and release cached textures; later calls do nothing
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.world.clear();
        self.textures.clear();
        self.state = LoopState::Stopped;
        self.shut_down = true;
    }

    /// Request engine shutdown after the current frame
    pub fn quit(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Engine shutdown requested");
        }
        self.state = LoopState::Stopped;
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Delta time of the most recent frame
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Get the world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the texture cache
    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    /// Get mutable access to the texture cache
    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Application error
    #[error("Application error: {0}")]
    Application(String),
}
