//! Image loading utilities for texture data
//!
//! Provides PNG loading through the `image` crate, plus a placeholder loader
//! that fabricates solid-color textures for headless runs.

use super::{AssetError, TextureData, TextureLoader};
use std::path::{Path, PathBuf};

/// Loads textures from disk, resolving paths against an optional root directory
#[derive(Debug, Clone, Default)]
pub struct ImageTextureLoader {
    root: Option<PathBuf>,
}

impl ImageTextureLoader {
    /// Load paths as given
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => PathBuf::from(path),
        }
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load(&mut self, path: &str) -> Result<TextureData, AssetError> {
        let resolved = self.resolve(path);
        if !Path::new(&resolved).exists() {
            return Err(AssetError::NotFound(resolved.display().to_string()));
        }

        log::debug!("Loading image from: {:?}", resolved);

        let img = image::open(&resolved)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", resolved.display(), e)))?;

        // Renderers expect RGBA8
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(TextureData {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}

/// Produces a solid-color texture of fixed size for any path
#[derive(Debug, Clone)]
pub struct PlaceholderTextureLoader {
    width: u32,
    height: u32,
    color: [u8; 4],
}

impl PlaceholderTextureLoader {
    /// Create a loader producing `width` x `height` textures of `color`
    pub fn new(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            color,
        }
    }
}

impl Default for PlaceholderTextureLoader {
    fn default() -> Self {
        Self::new(64, 64, [255, 0, 255, 255])
    }
}

impl TextureLoader for PlaceholderTextureLoader {
    fn load(&mut self, path: &str) -> Result<TextureData, AssetError> {
        log::trace!("Generating placeholder texture for {}", path);
        let img = image::RgbaImage::from_pixel(self.width, self.height, image::Rgba(self.color));
        Ok(TextureData {
            width: self.width,
            height: self.height,
            pixels: img.into_raw(),
        })
    }
}
