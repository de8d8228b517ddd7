//! Game asset paths and texture loading

use actor_engine::assets::{
    AssetError, ImageTextureLoader, PlaceholderTextureLoader, Texture, TextureCache, TextureData, TextureLoader,
};

/// Player ship
pub const SHIP: &str = "Ship.png";

/// Laser bolt
pub const LASER: &str = "Laser.png";

/// Asteroid
pub const ASTEROID: &str = "Asteroid.png";

/// Far background layers
pub const FAR_BACKGROUND: [&str; 2] = ["Farback01.png", "Farback02.png"];

/// Near background layers
pub const NEAR_BACKGROUND: [&str; 2] = ["Stars.png", "Stars.png"];

/// Loads textures from disk and substitutes a placeholder for missing files
///
/// Corrupt files still fail, so they show up in the log as load failures.
pub struct FallbackTextureLoader {
    disk: ImageTextureLoader,
    placeholder: PlaceholderTextureLoader,
}

impl FallbackTextureLoader {
    /// Load from `root`, falling back to magenta squares
    pub fn new(root: &str) -> Self {
        Self {
            disk: ImageTextureLoader::with_root(root),
            placeholder: PlaceholderTextureLoader::default(),
        }
    }
}

impl TextureLoader for FallbackTextureLoader {
    fn load(&mut self, path: &str) -> Result<TextureData, AssetError> {
        match self.disk.load(path) {
            Err(AssetError::NotFound(missing)) => {
                log::debug!("Texture {} missing, using placeholder", missing);
                self.placeholder.load(path)
            }
            other => other,
        }
    }
}

/// Textures shared by spawned actors
#[derive(Debug, Clone, Copy)]
pub struct GameTextures {
    /// Player ship
    pub ship: Option<Texture>,
    /// Laser bolt
    pub laser: Option<Texture>,
    /// Asteroid
    pub asteroid: Option<Texture>,
}

impl GameTextures {
    /// Fetch every sprite texture through the cache
    pub fn load(cache: &mut TextureCache) -> Self {
        Self {
            ship: cache.get_texture(SHIP),
            laser: cache.get_texture(LASER),
            asteroid: cache.get_texture(ASTEROID),
        }
    }
}

/// Fetch a list of layer textures, skipping the ones that fail to load
pub fn load_layers(cache: &mut TextureCache, paths: &[&str]) -> Vec<Texture> {
    paths.iter().filter_map(|path| cache.get_texture(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_become_placeholders() {
        let mut cache = TextureCache::new(FallbackTextureLoader::new("no/such/dir"));

        let textures = GameTextures::load(&mut cache);

        assert!(textures.ship.is_some());
        assert_eq!(textures.ship.map(|t| (t.width, t.height)), Some((64, 64)));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_shared_layer_path_is_cached_once() {
        let mut cache = TextureCache::new(FallbackTextureLoader::new("no/such/dir"));

        let layers = load_layers(&mut cache, &NEAR_BACKGROUND);

        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].handle, layers[1].handle);
        assert_eq!(cache.len(), 1);
    }
}
