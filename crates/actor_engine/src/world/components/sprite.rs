//! Single-texture sprite component

use crate::assets::Texture;
use crate::foundation::math::{Rect, Transform2D};
use crate::render::RenderContext;
use crate::world::component::{Capabilities, Component, DEFAULT_DRAW_ORDER};

/// Draws one texture centred on its actor, scaled and rotated with it
#[derive(Debug, Clone)]
pub struct SpriteComponent {
    texture: Option<Texture>,
    draw_order: i32,
}

impl SpriteComponent {
    /// Sprite with the default draw order and no texture
    pub fn new() -> Self {
        Self::with_draw_order(DEFAULT_DRAW_ORDER)
    }

    /// Sprite with an explicit draw order
    pub fn with_draw_order(draw_order: i32) -> Self {
        Self {
            texture: None,
            draw_order,
        }
    }

    /// Builder pattern: Set the texture
    pub fn with_texture(mut self, texture: Option<Texture>) -> Self {
        self.texture = texture;
        self
    }

    /// Replace the texture; `None` hides the sprite
    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.texture = texture;
    }

    /// Current texture
    pub fn texture(&self) -> Option<Texture> {
        self.texture
    }

    /// Texture width in pixels, zero without a texture
    pub fn tex_width(&self) -> u32 {
        self.texture.map_or(0, |texture| texture.width)
    }

    /// Texture height in pixels, zero without a texture
    pub fn tex_height(&self) -> u32 {
        self.texture.map_or(0, |texture| texture.height)
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw `texture` centred on `owner`, scaled and rotated with it
pub(crate) fn draw_texture(texture: Texture, owner: &Transform2D, renderer: &mut dyn RenderContext) {
    let dest = Rect::centered(
        owner.position,
        texture.width as f32 * owner.scale,
        texture.height as f32 * owner.scale,
    );
    renderer.draw_rotated(texture.handle, dest, owner.screen_angle_degrees());
}

impl Component for SpriteComponent {
    fn capabilities(&self) -> Capabilities {
        Capabilities::RENDER
    }

    fn draw_order(&self) -> i32 {
        self.draw_order
    }

    fn draw(&self, owner: &Transform2D, renderer: &mut dyn RenderContext) {
        if let Some(texture) = self.texture {
            draw_texture(texture, owner, renderer);
        }
    }
}
