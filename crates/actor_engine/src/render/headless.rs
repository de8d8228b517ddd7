//! Headless render context that records draw calls instead of rasterizing

use super::{Color, RenderContext};
use crate::assets::TextureHandle;
use crate::foundation::math::Rect;

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Texture that was drawn
    pub texture: TextureHandle,

    /// Destination rectangle
    pub dest: Rect,

    /// Clockwise rotation in degrees
    pub angle_degrees: f32,

    /// Texture region drawn, `None` for the whole texture
    pub source: Option<Rect>,
}

/// Render context that keeps the draw calls of the current and last presented frame
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    clear_color: Option<Color>,
    current: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
    total_draw_calls: u64,
}

impl RecordingRenderer {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls issued since the last `present`
    pub fn pending_commands(&self) -> &[DrawCommand] {
        &self.current
    }

    /// Draw calls of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Color passed to the most recent `clear`
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    /// Number of presented frames
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Draw calls across all frames
    pub fn total_draw_calls(&self) -> u64 {
        self.total_draw_calls
    }
}

impl RenderContext for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.clear_color = Some(color);
        self.current.clear();
    }

    fn draw(&mut self, texture: TextureHandle, dest: Rect) {
        self.draw_rotated(texture, dest, 0.0);
    }

    fn draw_rotated(&mut self, texture: TextureHandle, dest: Rect, angle_degrees: f32) {
        self.total_draw_calls += 1;
        self.current.push(DrawCommand {
            texture,
            dest,
            angle_degrees,
            source: None,
        });
    }

    fn draw_region(&mut self, texture: TextureHandle, source: Rect, dest: Rect) {
        self.total_draw_calls += 1;
        self.current.push(DrawCommand {
            texture,
            dest,
            angle_degrees: 0.0,
            source: Some(source),
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.current);
        self.frames_presented += 1;
    }
}
