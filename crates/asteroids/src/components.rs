//! Game-specific components

use actor_engine::foundation::math::{Transform2D, Vec2};
use actor_engine::world::Component;

/// Runs after movement so wrapping sees this frame's position
pub const WRAP_UPDATE_ORDER: i32 = 150;

/// Teleports its actor to the opposite edge when it leaves the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapAround {
    /// Playfield size; the playfield spans `0..size` on both axes
    pub size: Vec2,
}

impl WrapAround {
    /// Wrap within a playfield of the given size
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }
}

impl Component for WrapAround {
    fn update_order(&self) -> i32 {
        WRAP_UPDATE_ORDER
    }

    fn update(&mut self, owner: &mut Transform2D, _delta_time: f32) {
        owner.position.x = owner.position.x.rem_euclid(self.size.x);
        owner.position.y = owner.position.y.rem_euclid(self.size.y);
    }
}
