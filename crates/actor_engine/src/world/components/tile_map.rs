//! Layered tile map drawn from a tile atlas
//!
//! Each layer is a grid of tile indices into the atlas, read left to right and
//! top to bottom. Negative indices leave the cell empty. Layers draw in the
//! order they were added, so the first layer ends up at the back.

use crate::assets::Texture;
use crate::config::ConfigError;
use crate::foundation::math::{Rect, Transform2D};
use crate::render::RenderContext;
use crate::world::component::{Capabilities, Component};
use serde::{Deserialize, Serialize};

/// Draw order used for tile maps, behind scrolling backgrounds
pub const TILE_MAP_DRAW_ORDER: i32 = 5;

/// Edge length of one atlas tile in texels
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// One grid of tile indices
///
/// Loadable as TOML or RON through [`crate::config::Config`], or from CSV text
/// with [`TileLayer::from_csv`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileLayer {
    /// Rows of tile indices, top row first
    pub tiles: Vec<Vec<i32>>,
}

impl TileLayer {
    /// Layer from rows of tile indices
    pub fn new(tiles: Vec<Vec<i32>>) -> Self {
        Self { tiles }
    }

    /// Parse comma-separated rows; blank lines are skipped
    pub fn from_csv(text: &str) -> Result<Self, ConfigError> {
        let mut tiles = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let cells = line
                .split(',')
                .enumerate()
                .map(|(column, cell)| {
                    let cell = cell.trim();
                    cell.parse::<i32>().map_err(|e| {
                        ConfigError::Parse(format!("tile '{}' at row {}, column {}: {}", cell, row + 1, column + 1, e))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            tiles.push(cells);
        }
        Ok(Self { tiles })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.len()
    }
}

/// Renderable stack of tile layers
#[derive(Debug, Clone)]
pub struct TileMapComponent {
    atlas: Option<Texture>,
    tile_size: u32,
    layers: Vec<TileLayer>,
    draw_order: i32,
}

impl TileMapComponent {
    /// Empty map with 32 texel tiles, drawn at order 5
    pub fn new() -> Self {
        Self::with_draw_order(TILE_MAP_DRAW_ORDER)
    }

    /// Empty map with an explicit draw order
    pub fn with_draw_order(draw_order: i32) -> Self {
        Self {
            atlas: None,
            tile_size: DEFAULT_TILE_SIZE,
            layers: Vec::new(),
            draw_order,
        }
    }

    /// Builder pattern: Set the tile atlas
    pub fn with_atlas(mut self, atlas: Option<Texture>) -> Self {
        self.atlas = atlas;
        self
    }

    /// Builder pattern: Set the tile edge length in texels (at least 1)
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size.max(1);
        self
    }

    /// Builder pattern: Add a layer on top of the existing ones
    pub fn with_layer(mut self, layer: TileLayer) -> Self {
        self.add_layer(layer);
        self
    }

    /// Replace the tile atlas
    pub fn set_atlas(&mut self, atlas: Option<Texture>) {
        self.atlas = atlas;
    }

    /// Current tile atlas
    pub fn atlas(&self) -> Option<Texture> {
        self.atlas
    }

    /// Tile edge length in texels
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Add a layer on top of the existing ones
    pub fn add_layer(&mut self, layer: TileLayer) {
        self.layers.push(layer);
    }

    /// Read a CSV layer from disk and add it on top
    pub fn load_csv(&mut self, path: &str) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let layer = TileLayer::from_csv(&text)?;
        log::debug!("Loaded tile layer '{}' ({} rows)", path, layer.rows());
        self.add_layer(layer);
        Ok(())
    }

    /// Layers, back to front
    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// Atlas region of a tile index, `None` if empty or outside the atlas
    pub fn tile_source(&self, tile: i32) -> Option<Rect> {
        let atlas = self.atlas?;
        let columns = atlas.width / self.tile_size;
        let rows = atlas.height / self.tile_size;
        let tile = u32::try_from(tile).ok()?;
        if columns == 0 || tile >= columns * rows {
            return None;
        }

        let size = self.tile_size as f32;
        Some(Rect::new(
            (tile % columns) as f32 * size,
            (tile / columns) as f32 * size,
            size,
            size,
        ))
    }
}

impl Default for TileMapComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TileMapComponent {
    fn capabilities(&self) -> Capabilities {
        Capabilities::RENDER
    }

    fn draw_order(&self) -> i32 {
        self.draw_order
    }

    /// The owner's position is the map's top-left corner; scale stretches tiles
    fn draw(&self, owner: &Transform2D, renderer: &mut dyn RenderContext) {
        let Some(atlas) = self.atlas else {
            return;
        };

        let cell = self.tile_size as f32 * owner.scale;
        for layer in &self.layers {
            for (row, tiles) in layer.tiles.iter().enumerate() {
                for (column, &tile) in tiles.iter().enumerate() {
                    if let Some(source) = self.tile_source(tile) {
                        let dest = Rect::new(
                            owner.position.x + column as f32 * cell,
                            owner.position.y + row as f32 * cell,
                            cell,
                            cell,
                        );
                        renderer.draw_region(atlas.handle, source, dest);
                    }
                }
            }
        }
    }
}
