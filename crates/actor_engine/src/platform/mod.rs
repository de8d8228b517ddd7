//! Platform collaborators
//!
//! Window creation, event pumping, keyboard polling and frame presentation are
//! outside the core. The frame loop only needs the three operations grouped in
//! [`Platform`].

pub mod headless;

pub use headless::ScriptedPlatform;

use crate::events::Event;
use crate::input::KeyboardState;
use crate::render::RenderContext;

/// Everything the frame loop asks of the host platform
pub trait Platform {
    /// Drain pending window events without blocking
    fn poll_events(&mut self) -> Vec<Event>;

    /// Current keyboard snapshot, polled once per frame
    fn keyboard_state(&self) -> KeyboardState;

    /// Render context used for this frame's output
    fn renderer(&mut self) -> &mut dyn RenderContext;
}
