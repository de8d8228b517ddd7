//! Rendering contracts
//!
//! The core never talks to a GPU. It issues `clear`, one `draw` per visible
//! renderable component in draw order, then `present`, once per frame, through
//! the [`RenderContext`] trait. Window-backed implementations live outside the
//! engine; [`RecordingRenderer`] is the headless implementation used by tests
//! and the demo.

pub mod draw_order;
pub mod headless;

pub use draw_order::{DrawEntry, DrawOrderList};
pub use headless::{DrawCommand, RecordingRenderer};

use crate::assets::TextureHandle;
use crate::foundation::math::Rect;
use serde::{Deserialize, Serialize};

/// RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Frame-buffer operations the core depends on
pub trait RenderContext {
    /// Clear the back buffer
    fn clear(&mut self, color: Color);

    /// Draw a texture into `dest`
    fn draw(&mut self, texture: TextureHandle, dest: Rect);

    /// Draw a texture into `dest`, rotated clockwise by `angle_degrees` about its centre
    fn draw_rotated(&mut self, texture: TextureHandle, dest: Rect, angle_degrees: f32) {
        let _ = angle_degrees;
        self.draw(texture, dest);
    }

    /// Draw the `source` region of a texture (in texels) into `dest`
    fn draw_region(&mut self, texture: TextureHandle, source: Rect, dest: Rect);

    /// Present the finished frame
    fn present(&mut self);
}
