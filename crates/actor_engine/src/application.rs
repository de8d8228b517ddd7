//! Application trait and related types

use crate::engine::{Engine, EngineError};
use crate::events::Event;
use thiserror::Error;

/// Main application trait
///
/// Implement this trait to create a game or application on top of the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Use this to load textures and spawn
    /// the initial actors. An error aborts startup; the engine still runs
    /// [`cleanup`](Application::cleanup) and its own teardown before returning it.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after the actor update sweep.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Clamped time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        let _ = (engine, delta_time);
        Ok(())
    }

    /// Handle a window event
    ///
    /// Called for every polled event, after the engine has reacted to it.
    fn handle_event(&mut self, engine: &mut Engine, event: &Event) -> Result<(), AppError> {
        let _ = (engine, event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called exactly once when the engine shuts down, before actors and
    /// textures are released.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Asset loading error
    #[error("Asset error: {0}")]
    Asset(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
