//! Texture loading and caching
//!
//! Paths are opaque strings handed to a [`TextureLoader`]. The cache keeps one
//! handle per path; repeated lookups of the same path return the same handle.
//! Load failures are not fatal: they are logged and reported as `None`, and the
//! caller decides whether to carry on without the texture.

pub mod image_loader;

pub use image_loader::{ImageTextureLoader, PlaceholderTextureLoader};

use slotmap::SlotMap;
use std::collections::HashMap;
use thiserror::Error;

slotmap::new_key_type! {
    /// Stable handle to a loaded texture
    pub struct TextureHandle;
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file does not exist
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The file exists but could not be decoded
    #[error("Asset load failed: {0}")]
    LoadFailed(String),
}

/// Decoded RGBA8 pixel data
#[derive(Debug, Clone)]
pub struct TextureData {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Raw RGBA pixels, row major
    pub pixels: Vec<u8>,
}

/// Lightweight, copyable reference to a cached texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    /// Cache handle passed to the renderer
    pub handle: TextureHandle,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

/// Source of texture data
pub trait TextureLoader {
    /// Load and decode the texture at `path`
    fn load(&mut self, path: &str) -> Result<TextureData, AssetError>;
}

/// Path-keyed texture cache
pub struct TextureCache {
    loader: Box<dyn TextureLoader>,
    textures: SlotMap<TextureHandle, TextureData>,
    by_path: HashMap<String, TextureHandle>,
}

impl TextureCache {
    /// Create a cache that loads misses through `loader`
    pub fn new(loader: impl TextureLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            textures: SlotMap::with_key(),
            by_path: HashMap::new(),
        }
    }

    /// Return the cached texture for `path`, loading it on first use
    ///
    /// Failures are logged and return `None`; they are not cached, so a later
    /// call retries the load.
    pub fn get_texture(&mut self, path: &str) -> Option<Texture> {
        if let Some(&handle) = self.by_path.get(path) {
            log::trace!("Texture cache hit: {}", path);
            return self.texture(handle);
        }

        match self.loader.load(path) {
            Ok(data) => {
                log::debug!("Loaded texture {} ({}x{})", path, data.width, data.height);
                let handle = self.textures.insert(data);
                self.by_path.insert(path.to_string(), handle);
                self.texture(handle)
            }
            Err(e) => {
                log::warn!("Failed to load texture {}: {}", path, e);
                None
            }
        }
    }

    /// Look up a texture by handle
    pub fn texture(&self, handle: TextureHandle) -> Option<Texture> {
        self.textures.get(handle).map(|data| Texture {
            handle,
            width: data.width,
            height: data.height,
        })
    }

    /// Pixel data for a handle, for renderers that upload it
    pub fn data(&self, handle: TextureHandle) -> Option<&TextureData> {
        self.textures.get(handle)
    }

    /// Number of cached textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Release every cached texture
    pub fn clear(&mut self) {
        if !self.textures.is_empty() {
            log::debug!("Releasing {} cached textures", self.textures.len());
        }
        self.textures.clear();
        self.by_path.clear();
    }
}
