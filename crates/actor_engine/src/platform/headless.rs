//! Scripted, window-less platform
//!
//! Replays a fixed input script: keys held over frame ranges, arbitrary queued
//! events, and a quit on a chosen frame. Output goes to a [`RecordingRenderer`].

use super::Platform;
use crate::events::Event;
use crate::input::{KeyCode, KeyboardState};
use crate::render::{RecordingRenderer, RenderContext};
use std::collections::VecDeque;
use std::ops::Range;

#[derive(Debug, Clone)]
struct ScriptedKey {
    key: KeyCode,
    frames: Range<u64>,
}

/// Headless platform driven by a script
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    frame: u64,
    quit_on_frame: Option<u64>,
    script: Vec<ScriptedKey>,
    queued: VecDeque<Event>,
    keyboard: KeyboardState,
    renderer: RecordingRenderer,
}

impl ScriptedPlatform {
    /// Platform that never quits on its own
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit [`Event::Quit`] on the `frames`-th poll, so exactly `frames` frames run
    pub fn quit_after(mut self, frames: u64) -> Self {
        self.quit_on_frame = Some(frames.max(1));
        self
    }

    /// Hold `key` during the given frame numbers (1-based, end exclusive)
    pub fn hold_key(mut self, key: KeyCode, frames: Range<u64>) -> Self {
        self.script.push(ScriptedKey { key, frames });
        self
    }

    /// Queue an event for the next poll
    pub fn push_event(&mut self, event: Event) {
        self.queued.push_back(event);
    }

    /// Number of frames polled so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Recorded output
    pub fn recorder(&self) -> &RecordingRenderer {
        &self.renderer
    }

    fn scripted_keyboard(&self, frame: u64) -> KeyboardState {
        let mut state = KeyboardState::new();
        for entry in self.script.iter().filter(|entry| entry.frames.contains(&frame)) {
            state.set(entry.key, true);
        }
        state
    }
}

impl Platform for ScriptedPlatform {
    fn poll_events(&mut self) -> Vec<Event> {
        self.frame += 1;

        let next = self.scripted_keyboard(self.frame);
        let mut events: Vec<Event> = self.queued.drain(..).collect();
        for entry in &self.script {
            let key = entry.key;
            if next.is_down(key) && !self.keyboard.is_down(key) && !events.contains(&Event::KeyDown(key)) {
                events.push(Event::KeyDown(key));
            } else if !next.is_down(key) && self.keyboard.is_down(key) && !events.contains(&Event::KeyUp(key)) {
                events.push(Event::KeyUp(key));
            }
        }
        self.keyboard = next;

        if self.quit_on_frame == Some(self.frame) {
            events.push(Event::Quit);
        }
        events
    }

    fn keyboard_state(&self) -> KeyboardState {
        self.keyboard
    }

    fn renderer(&mut self) -> &mut dyn RenderContext {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_is_emitted_on_requested_frame() {
        let mut platform = ScriptedPlatform::new().quit_after(3);

        assert!(platform.poll_events().is_empty());
        assert!(platform.poll_events().is_empty());
        assert_eq!(platform.poll_events(), vec![Event::Quit]);
        assert!(platform.poll_events().is_empty());
    }

    #[test]
    fn test_held_keys_follow_script() {
        let mut platform = ScriptedPlatform::new().hold_key(KeyCode::Space, 2..4);

        platform.poll_events();
        assert!(!platform.keyboard_state().is_down(KeyCode::Space));

        assert_eq!(platform.poll_events(), vec![Event::KeyDown(KeyCode::Space)]);
        assert!(platform.keyboard_state().is_down(KeyCode::Space));

        assert!(platform.poll_events().is_empty());
        assert!(platform.keyboard_state().is_down(KeyCode::Space));

        assert_eq!(platform.poll_events(), vec![Event::KeyUp(KeyCode::Space)]);
        assert!(!platform.keyboard_state().is_down(KeyCode::Space));
    }

    #[test]
    fn test_queued_events_are_drained_once() {
        let mut platform = ScriptedPlatform::new();
        platform.push_event(Event::Resized { width: 800, height: 600 });

        assert_eq!(platform.poll_events(), vec![Event::Resized { width: 800, height: 600 }]);
        assert!(platform.poll_events().is_empty());
        assert_eq!(platform.frame(), 2);
    }
}
