//! Keyboard-driven movement

use super::movement::MoveComponent;
use crate::foundation::math::Transform2D;
use crate::input::{KeyCode, KeyboardState};
use crate::world::component::{Capabilities, Component};
use serde::{Deserialize, Serialize};

/// Keys steering an [`InputComponent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Move along the facing direction
    pub forward: KeyCode,
    /// Move against the facing direction
    pub back: KeyCode,
    /// Turn clockwise on screen
    pub clockwise: KeyCode,
    /// Turn counter-clockwise on screen
    pub counter_clockwise: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::W,
            back: KeyCode::S,
            clockwise: KeyCode::D,
            counter_clockwise: KeyCode::A,
        }
    }
}

/// Movement whose forward and angular speed are set from the keyboard
#[derive(Debug, Clone, Default)]
pub struct InputComponent {
    movement: MoveComponent,
    bindings: KeyBindings,
    max_forward_speed: f32,
    max_angular_speed: f32,
}

impl InputComponent {
    /// Input-driven movement with the given top speeds
    pub fn new(max_forward_speed: f32, max_angular_speed: f32) -> Self {
        Self {
            movement: MoveComponent::new(),
            bindings: KeyBindings::default(),
            max_forward_speed,
            max_angular_speed,
        }
    }

    /// Builder pattern: Set key bindings
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Key bindings
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Top forward speed
    pub fn max_forward_speed(&self) -> f32 {
        self.max_forward_speed
    }

    /// Set top forward speed
    pub fn set_max_forward_speed(&mut self, speed: f32) {
        self.max_forward_speed = speed;
    }

    /// Top angular speed
    pub fn max_angular_speed(&self) -> f32 {
        self.max_angular_speed
    }

    /// Set top angular speed
    pub fn set_max_angular_speed(&mut self, speed: f32) {
        self.max_angular_speed = speed;
    }

    /// Underlying movement
    pub fn movement(&self) -> &MoveComponent {
        &self.movement
    }

    /// Underlying movement, mutably (for forces)
    pub fn movement_mut(&mut self) -> &mut MoveComponent {
        &mut self.movement
    }
}

impl Component for InputComponent {
    fn update_order(&self) -> i32 {
        self.movement.update_order()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE | Capabilities::INPUT
    }

    fn update(&mut self, owner: &mut Transform2D, delta_time: f32) {
        self.movement.integrate(owner, delta_time);
    }

    fn process_input(&mut self, _owner: &mut Transform2D, keys: &KeyboardState) {
        let mut forward_speed = 0.0;
        if keys.is_down(self.bindings.forward) {
            forward_speed += self.max_forward_speed;
        }
        if keys.is_down(self.bindings.back) {
            forward_speed -= self.max_forward_speed;
        }
        self.movement.forward_speed = forward_speed;

        let mut angular_speed = 0.0;
        if keys.is_down(self.bindings.clockwise) {
            angular_speed -= self.max_angular_speed;
        }
        if keys.is_down(self.bindings.counter_clockwise) {
            angular_speed += self.max_angular_speed;
        }
        self.movement.angular_speed = angular_speed;
    }
}
