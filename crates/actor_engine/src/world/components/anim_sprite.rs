//! Sprite that cycles through a sequence of textures

use super::sprite::draw_texture;
use crate::assets::Texture;
use crate::foundation::math::Transform2D;
use crate::render::RenderContext;
use crate::world::component::{Capabilities, Component, DEFAULT_DRAW_ORDER};

/// Default animation rate in frames per second
pub const DEFAULT_ANIM_FPS: f32 = 24.0;

/// Looping flip-book animation
#[derive(Debug, Clone)]
pub struct AnimSpriteComponent {
    textures: Vec<Texture>,
    current_frame: f32,
    anim_fps: f32,
    draw_order: i32,
}

impl AnimSpriteComponent {
    /// Empty animation at 24 fps with the default draw order
    pub fn new() -> Self {
        Self::with_draw_order(DEFAULT_DRAW_ORDER)
    }

    /// Empty animation with an explicit draw order
    pub fn with_draw_order(draw_order: i32) -> Self {
        Self {
            textures: Vec::new(),
            current_frame: 0.0,
            anim_fps: DEFAULT_ANIM_FPS,
            draw_order,
        }
    }

    /// Builder pattern: Set the frames
    pub fn with_textures(mut self, textures: Vec<Texture>) -> Self {
        self.set_textures(textures);
        self
    }

    /// Builder pattern: Set the frame rate
    pub fn with_anim_fps(mut self, anim_fps: f32) -> Self {
        self.set_anim_fps(anim_fps);
        self
    }

    /// Replace the frames and restart from the first one
    pub fn set_textures(&mut self, textures: Vec<Texture>) {
        self.textures = textures;
        self.current_frame = 0.0;
    }

    /// Frames per second
    pub fn anim_fps(&self) -> f32 {
        self.anim_fps
    }

    /// Set frames per second; playback only runs forward, so negative rates become zero
    pub fn set_anim_fps(&mut self, anim_fps: f32) {
        self.anim_fps = anim_fps.max(0.0);
    }

    /// Fractional position in the frame sequence
    pub fn current_frame(&self) -> f32 {
        self.current_frame
    }

    /// Texture currently shown
    pub fn current_texture(&self) -> Option<Texture> {
        self.textures.get(self.current_frame as usize).copied()
    }
}

impl Default for AnimSpriteComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AnimSpriteComponent {
    fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE | Capabilities::RENDER
    }

    fn draw_order(&self) -> i32 {
        self.draw_order
    }

    fn update(&mut self, _owner: &mut Transform2D, delta_time: f32) {
        if self.textures.is_empty() {
            return;
        }

        let count = self.textures.len() as f32;
        let mut frame = (self.current_frame + self.anim_fps * delta_time).rem_euclid(count);
        // rem_euclid can round up to exactly `count`
        if frame >= count {
            frame -= count;
        }
        self.current_frame = frame;
    }

    fn draw(&self, owner: &Transform2D, renderer: &mut dyn RenderContext) {
        if let Some(texture) = self.current_texture() {
            draw_texture(texture, owner, renderer);
        }
    }
}
