//! Reusable components
//!
//! - Movement: [`MoveComponent`], [`InputComponent`]
//! - Rendering: [`SpriteComponent`], [`AnimSpriteComponent`], [`BackgroundSpriteComponent`],
//!   [`TileMapComponent`]
//! - Collision: [`CircleComponent`] and [`intersect`]

pub mod anim_sprite;
pub mod background;
pub mod collision;
pub mod input;
pub mod movement;
pub mod sprite;
pub mod tile_map;

pub use anim_sprite::{AnimSpriteComponent, DEFAULT_ANIM_FPS};
pub use background::{BackgroundSpriteComponent, BACKGROUND_DRAW_ORDER};
pub use collision::{circles_intersect, intersect, CircleComponent};
pub use input::{InputComponent, KeyBindings};
pub use movement::{MoveComponent, MOVE_UPDATE_ORDER};
pub use sprite::SpriteComponent;
pub use tile_map::{TileLayer, TileMapComponent, DEFAULT_TILE_SIZE, TILE_MAP_DRAW_ORDER};
