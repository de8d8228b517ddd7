//! Keyboard input snapshot
//!
//! The platform produces one [`KeyboardState`] per frame. Actors and
//! components read it; nothing in the core mutates it.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Number of distinct key codes
    pub const COUNT: usize = KeyCode::Right as usize + 1;

    fn index(self) -> usize {
        self as usize
    }
}

/// Read-only snapshot of which keys are held down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [bool; KeyCode::COUNT],
}

impl KeyboardState {
    /// Snapshot with every key released
    pub fn new() -> Self {
        Self {
            keys: [false; KeyCode::COUNT],
        }
    }

    /// Snapshot with exactly the given keys held
    pub fn with_pressed(pressed: &[KeyCode]) -> Self {
        let mut state = Self::new();
        for &key in pressed {
            state.set(key, true);
        }
        state
    }

    /// Whether `key` is held
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys[key.index()]
    }

    /// Mark `key` as held or released
    pub fn set(&mut self, key: KeyCode, down: bool) {
        self.keys[key.index()] = down;
    }

    /// Whether any key is held
    pub fn any_down(&self) -> bool {
        self.keys.iter().any(|&down| down)
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<KeyCode> for KeyboardState {
    type Output = bool;

    fn index(&self, key: KeyCode) -> &bool {
        &self.keys[key.index()]
    }
}
