//! Horizontally scrolling background
//!
//! Layers are laid side by side one screen apart. Each frame every layer moves
//! by `scroll_speed * dt`; a layer that has left the screen on the left wraps
//! to the far right, behind the other layers.

use crate::assets::Texture;
use crate::foundation::math::{Rect, Transform2D, Vec2};
use crate::render::RenderContext;
use crate::world::component::{Capabilities, Component};

/// Draw order used for backgrounds, behind regular sprites
pub const BACKGROUND_DRAW_ORDER: i32 = 10;

#[derive(Debug, Clone, Copy)]
struct Layer {
    texture: Texture,
    offset: Vec2,
}

/// Scrolling background made of screen-sized layers
#[derive(Debug, Clone)]
pub struct BackgroundSpriteComponent {
    layers: Vec<Layer>,
    screen_size: Vec2,
    scroll_speed: f32,
    draw_order: i32,
}

impl BackgroundSpriteComponent {
    /// Background for a screen of the given size, drawn at order 10
    pub fn new(screen_size: Vec2) -> Self {
        Self::with_draw_order(screen_size, BACKGROUND_DRAW_ORDER)
    }

    /// Background with an explicit draw order
    pub fn with_draw_order(screen_size: Vec2, draw_order: i32) -> Self {
        Self {
            layers: Vec::new(),
            screen_size,
            scroll_speed: 0.0,
            draw_order,
        }
    }

    /// Builder pattern: Set layer textures
    pub fn with_textures(mut self, textures: &[Texture]) -> Self {
        self.set_textures(textures);
        self
    }

    /// Builder pattern: Set scroll speed, negative scrolls left
    pub fn with_scroll_speed(mut self, speed: f32) -> Self {
        self.scroll_speed = speed;
        self
    }

    /// Replace the layers, laid out left to right one screen apart
    pub fn set_textures(&mut self, textures: &[Texture]) {
        self.layers = textures
            .iter()
            .enumerate()
            .map(|(i, texture)| Layer {
                texture: *texture,
                offset: Vec2::new(i as f32 * self.screen_size.x, 0.0),
            })
            .collect();
    }

    /// Scroll speed in pixels per second
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Set scroll speed in pixels per second
    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.scroll_speed = speed;
    }

    /// Screen size each layer is stretched to
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// Set the screen size
    pub fn set_screen_size(&mut self, size: Vec2) {
        self.screen_size = size;
    }

    /// Horizontal offsets of the layers
    pub fn offsets(&self) -> Vec<f32> {
        self.layers.iter().map(|layer| layer.offset.x).collect()
    }
}

impl Component for BackgroundSpriteComponent {
    fn capabilities(&self) -> Capabilities {
        Capabilities::UPDATE | Capabilities::RENDER
    }

    fn draw_order(&self) -> i32 {
        self.draw_order
    }

    fn update(&mut self, _owner: &mut Transform2D, delta_time: f32) {
        let wrap_to = (self.layers.len() as f32 - 1.0) * self.screen_size.x - 1.0;
        for layer in &mut self.layers {
            layer.offset.x += self.scroll_speed * delta_time;
            if layer.offset.x < -self.screen_size.x {
                layer.offset.x = wrap_to;
            }
        }
    }

    fn draw(&self, owner: &Transform2D, renderer: &mut dyn RenderContext) {
        for layer in &self.layers {
            let dest = Rect::centered(
                owner.position + layer.offset,
                self.screen_size.x,
                self.screen_size.y,
            );
            renderer.draw(layer.texture.handle, dest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::TextureHandle;
    use crate::render::RecordingRenderer;
    use approx::assert_relative_eq;

    fn layers(count: usize) -> Vec<Texture> {
        vec![
            Texture {
                handle: TextureHandle::default(),
                width: 1024,
                height: 768,
            };
            count
        ]
    }

    #[test]
    fn test_layers_start_one_screen_apart() {
        let background = BackgroundSpriteComponent::new(Vec2::new(1024.0, 768.0)).with_textures(&layers(3));
        assert_eq!(background.offsets(), vec![0.0, 1024.0, 2048.0]);
        assert_eq!(background.draw_order(), BACKGROUND_DRAW_ORDER);
    }

    #[test]
    fn test_scrolls_and_wraps() {
        let mut background = BackgroundSpriteComponent::new(Vec2::new(100.0, 50.0))
            .with_textures(&layers(2))
            .with_scroll_speed(-60.0);
        let mut owner = Transform2D::identity();

        background.update(&mut owner, 1.0);
        assert_eq!(background.offsets(), vec![-60.0, 40.0]);

        background.update(&mut owner, 1.0);
        // First layer passed -100 and wrapped to (2 - 1) * 100 - 1
        let offsets = background.offsets();
        assert_relative_eq!(offsets[0], 99.0);
        assert_relative_eq!(offsets[1], -20.0);
    }

    #[test]
    fn test_draws_each_layer_at_screen_size() {
        let background = BackgroundSpriteComponent::new(Vec2::new(100.0, 50.0)).with_textures(&layers(2));
        let owner = Transform2D::from_position(Vec2::new(50.0, 25.0));
        let mut renderer = RecordingRenderer::new();

        background.draw(&owner, &mut renderer);

        let commands = renderer.pending_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].dest, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(commands[1].dest, Rect::new(100.0, 0.0, 100.0, 50.0));
    }
}
