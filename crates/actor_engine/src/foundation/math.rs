//! Math utilities and types
//!
//! Provides the 2D math types used by actors, components and the renderer.
//! Screen space is y-down, so an actor facing rotation `0` looks along +X and
//! positive rotation turns counter-clockwise on screen.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Tolerance used when deciding whether a speed is effectively zero
pub const NEAR_ZERO: f32 = 0.001;

/// Returns true when `value` is within [`NEAR_ZERO`] of zero
pub fn near_zero(value: f32) -> bool {
    value.abs() <= NEAR_ZERO
}

/// World transform of an actor: position, rotation and uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Position in world (screen) space
    pub position: Vec2,

    /// Rotation in radians
    pub rotation: f32,

    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Unit vector the actor is facing (y-down screen space)
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.rotation.cos(), -self.rotation.sin())
    }

    /// Move by `offset`
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    /// Rotate by `angle` radians
    pub fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
    }

    /// Rotation expressed in clockwise degrees, as screen renderers expect
    pub fn screen_angle_degrees(&self) -> f32 {
        -self.rotation.to_degrees()
    }
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle of the given size centred on `center`
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    /// Centre point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}
