//! # Actor Engine
//!
//! A small 2D game runtime built around actors and components.
//!
//! ## Features
//!
//! - **Actor/Component model**: actors own ordered components plus an optional behavior hook
//! - **Deferred lifecycle**: actors spawned mid-frame wait a frame, dead actors are purged between frames
//! - **Draw-order list**: renderable components drawn back to front, independent of actor order
//! - **Frame pacing**: minimum frame interval and clamped delta time through an injectable clock
//! - **Headless by default**: scripted platform and recording renderer for tests and demos
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use actor_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let texture = engine.textures.get_texture("assets/ship.png");
//!         engine.world.add_actor(
//!             Actor::new()
//!                 .with_position(Vec2::new(512.0, 384.0))
//!                 .with_component(SpriteComponent::new().with_texture(texture)),
//!         );
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default())?;
//!     let mut platform = ScriptedPlatform::new().quit_after(60);
//!     engine.run(&mut MyApp, &mut platform)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod assets;
pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod platform;
pub mod render;
pub mod world;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineError, LoopState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{Texture, TextureCache, TextureHandle},
        config::{Config, EngineConfig, FrameConfig, WindowConfig},
        events::Event,
        foundation::{
            math::{Rect, Transform2D, Vec2},
            time::{Clock, ManualClock, SystemClock},
        },
        input::{KeyCode, KeyboardState},
        platform::{Platform, ScriptedPlatform},
        render::{Color, RecordingRenderer, RenderContext},
        world::components::{
            intersect, AnimSpriteComponent, BackgroundSpriteComponent, CircleComponent, InputComponent,
            MoveComponent, SpriteComponent, TileLayer, TileMapComponent,
        },
        world::{Actor, ActorId, ActorState, Behavior, Capabilities, Component, World},
        AppError, Application, Engine, EngineError, LoopState,
    };
}
