//! Actor/component runtime
//!
//! [`World`] owns actors; each [`Actor`] owns its components. Renderable
//! components are tracked separately, by id, in the world's draw-order list.

pub mod actor;
pub mod component;
pub mod components;
pub mod registry;

#[cfg(test)]
mod tests;

pub use actor::{Actor, ActorId, ActorState, Behavior};
pub use component::{
    AsAny, Capabilities, Component, ComponentError, ComponentId, DEFAULT_DRAW_ORDER, DEFAULT_UPDATE_ORDER,
};
pub use registry::{SpriteKey, World};
