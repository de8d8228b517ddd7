//! Force-driven movement component
//!
//! Integrates accumulated forces into velocity and position once per frame,
//! and applies the actor's angular and forward speed on top.

use crate::foundation::math::{near_zero, Transform2D, Vec2};
use crate::world::component::{Component, ComponentError};

/// Update order of movement, ahead of the default so behaviors see the moved transform
pub const MOVE_UPDATE_ORDER: i32 = 10;

/// Component for actors that move
#[derive(Debug, Clone)]
pub struct MoveComponent {
    /// Rotation speed in radians per second, positive is counter-clockwise
    pub angular_speed: f32,

    /// Speed along the actor's facing, in units per second
    pub forward_speed: f32,

    /// Maximum velocity magnitude produced by forces
    pub max_speed: f32,

    mass: f32,
    sum_of_forces: Vec2,
    velocity: Vec2,
    update_order: i32,
}

impl MoveComponent {
    /// Create a movement component at rest with mass 0.1 and max speed 300
    pub fn new() -> Self {
        Self {
            angular_speed: 0.0,
            forward_speed: 0.0,
            max_speed: 300.0,
            mass: 0.1,
            sum_of_forces: Vec2::zeros(),
            velocity: Vec2::zeros(),
            update_order: MOVE_UPDATE_ORDER,
        }
    }

    /// Builder pattern: Set mass, rejecting non-positive values
    pub fn with_mass(mut self, mass: f32) -> Result<Self, ComponentError> {
        self.set_mass(mass)?;
        Ok(self)
    }

    /// Builder pattern: Set maximum speed
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed.max(0.0);
        self
    }

    /// Builder pattern: Set forward speed
    pub fn with_forward_speed(mut self, speed: f32) -> Self {
        self.forward_speed = speed;
        self
    }

    /// Builder pattern: Set angular speed
    pub fn with_angular_speed(mut self, speed: f32) -> Self {
        self.angular_speed = speed;
        self
    }

    /// Builder pattern: Set initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder pattern: Override the update order
    pub fn with_update_order(mut self, update_order: i32) -> Self {
        self.update_order = update_order;
        self
    }

    /// Set mass; must be finite and greater than zero
    pub fn set_mass(&mut self, mass: f32) -> Result<(), ComponentError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(ComponentError::InvalidMass(mass));
        }
        self.mass = mass;
        Ok(())
    }

    /// Mass
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set maximum speed
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed.max(0.0);
    }

    /// Accumulate a force for the next integration step only
    pub fn add_force(&mut self, force: Vec2) {
        self.sum_of_forces += force;
    }

    /// Forces accumulated since the last step
    pub fn sum_of_forces(&self) -> Vec2 {
        self.sum_of_forces
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Set velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Stop all movement and drop pending forces
    pub fn stop(&mut self) {
        self.velocity = Vec2::zeros();
        self.sum_of_forces = Vec2::zeros();
        self.angular_speed = 0.0;
        self.forward_speed = 0.0;
    }

    /// Apply one integration step to `owner`
    pub fn integrate(&mut self, owner: &mut Transform2D, delta_time: f32) {
        let acceleration = self.sum_of_forces / self.mass;
        self.sum_of_forces = Vec2::zeros();

        self.velocity += acceleration * delta_time;
        let speed = self.velocity.magnitude();
        if speed > self.max_speed {
            self.velocity *= self.max_speed / speed;
        }
        owner.position += self.velocity * delta_time;

        if !near_zero(self.angular_speed) {
            owner.rotation += self.angular_speed * delta_time;
        }

        if !near_zero(self.forward_speed) {
            owner.position += owner.forward() * self.forward_speed * delta_time;
        }
    }
}

impl Default for MoveComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MoveComponent {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, owner: &mut Transform2D, delta_time: f32) {
        self.integrate(owner, delta_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rejects_non_positive_mass() {
        let mut movement = MoveComponent::new();
        assert_eq!(movement.set_mass(0.0), Err(ComponentError::InvalidMass(0.0)));
        assert!(movement.set_mass(-1.0).is_err());
        assert!(movement.set_mass(f32::NAN).is_err());
        assert_eq!(movement.mass(), 0.1);

        assert!(MoveComponent::new().with_mass(2.0).is_ok());
    }

    #[test]
    fn test_forces_sum_within_one_step() {
        let mut movement = MoveComponent::new().with_mass(1.0).unwrap();
        let mut owner = Transform2D::identity();

        movement.add_force(Vec2::new(10.0, 0.0));
        movement.add_force(Vec2::new(0.0, 20.0));
        movement.integrate(&mut owner, 0.5);

        assert_relative_eq!(movement.velocity().x, 5.0);
        assert_relative_eq!(movement.velocity().y, 10.0);
        assert_relative_eq!(owner.position.x, 2.5);
        assert_relative_eq!(owner.position.y, 5.0);
        assert_eq!(movement.sum_of_forces(), Vec2::zeros());
    }

    #[test]
    fn test_forces_do_not_carry_over() {
        let mut movement = MoveComponent::new().with_mass(1.0).unwrap();
        let mut owner = Transform2D::identity();

        movement.add_force(Vec2::new(4.0, 0.0));
        movement.integrate(&mut owner, 1.0);
        let velocity_after_push = movement.velocity();

        movement.integrate(&mut owner, 1.0);

        assert_eq!(movement.velocity(), velocity_after_push);
        assert_relative_eq!(owner.position.x, 8.0);
    }

    #[test]
    fn test_velocity_is_clamped() {
        let mut movement = MoveComponent::new().with_max_speed(100.0);
        let mut owner = Transform2D::identity();

        movement.add_force(Vec2::new(1000.0, 0.0));
        movement.integrate(&mut owner, 1.0);

        assert_relative_eq!(movement.velocity().magnitude(), 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_forward_and_angular_speed() {
        let mut movement = MoveComponent::new()
            .with_angular_speed(FRAC_PI_2)
            .with_forward_speed(10.0);
        let mut owner = Transform2D::identity();

        movement.integrate(&mut owner, 1.0);

        // Rotated a quarter turn counter-clockwise, then moved up the screen
        assert_relative_eq!(owner.rotation, FRAC_PI_2);
        assert_relative_eq!(owner.position.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(owner.position.y, -10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_near_zero_speeds_are_ignored() {
        let mut movement = MoveComponent::new()
            .with_angular_speed(0.0005)
            .with_forward_speed(-0.0005);
        let mut owner = Transform2D::identity();

        movement.integrate(&mut owner, 1.0);

        assert_eq!(owner, Transform2D::identity());
    }

    #[test]
    fn test_default_update_order() {
        assert_eq!(Component::update_order(&MoveComponent::new()), MOVE_UPDATE_ORDER);
    }
}
