//! Circle collider

use crate::foundation::math::{Transform2D, Vec2};
use crate::world::actor::Actor;
use crate::world::component::{Capabilities, Component};

/// Circular bounds centred on the owning actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleComponent {
    radius: f32,
}

impl CircleComponent {
    /// Circle with an unscaled radius
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Unscaled radius
    pub fn base_radius(&self) -> f32 {
        self.radius
    }

    /// Set unscaled radius
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Radius scaled by the owner's scale
    pub fn radius(&self, owner: &Transform2D) -> f32 {
        self.radius * owner.scale
    }

    /// Centre of the circle, the owner's position
    pub fn center(&self, owner: &Transform2D) -> Vec2 {
        owner.position
    }
}

impl Component for CircleComponent {
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }
}

/// Whether two circles overlap; touching counts as overlapping
pub fn circles_intersect(a: &CircleComponent, a_owner: &Transform2D, b: &CircleComponent, b_owner: &Transform2D) -> bool {
    let distance_sq = (a.center(a_owner) - b.center(b_owner)).norm_squared();
    let radii = a.radius(a_owner) + b.radius(b_owner);
    distance_sq <= radii * radii
}

/// Whether the first circle colliders of two actors overlap
///
/// Returns false when either actor has no [`CircleComponent`].
pub fn intersect(a: &Actor, b: &Actor) -> bool {
    match (a.component::<CircleComponent>(), b.component::<CircleComponent>()) {
        (Some(circle_a), Some(circle_b)) => circles_intersect(circle_a, a.transform(), circle_b, b.transform()),
        _ => false,
    }
}
