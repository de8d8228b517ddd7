//! Discrete window events delivered once per frame

use crate::input::KeyCode;

/// Events yielded by the platform's non-blocking poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The window was closed or the process asked to stop
    Quit,

    /// A key went down this frame
    KeyDown(KeyCode),

    /// A key went up this frame
    KeyUp(KeyCode),

    /// The window was resized
    Resized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

impl Event {
    /// Whether this event asks the frame loop to stop
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Quit)
    }
}
