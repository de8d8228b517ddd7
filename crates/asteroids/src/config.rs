//! Game configuration

use actor_engine::config::{Config, ConfigError, EngineConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings
    pub engine: EngineConfig,

    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Headless demo settings
    pub demo: DemoConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Asteroids in the opening wave
    pub asteroid_count: u32,

    /// Asteroid speed in pixels per second
    pub asteroid_speed: f32,

    /// Asteroid collision radius
    pub asteroid_radius: f32,

    /// Ship speed in pixels per second
    pub ship_max_speed: f32,

    /// Ship turn rate in radians per second
    pub ship_rotation_speed: f32,

    /// Laser speed in pixels per second
    pub laser_speed: f32,

    /// Laser lifetime in seconds
    pub laser_lifetime: f32,

    /// Minimum time between shots in seconds
    pub fire_cooldown: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            asteroid_count: 20,
            asteroid_speed: 150.0,
            asteroid_radius: 40.0,
            ship_max_speed: 300.0,
            ship_rotation_speed: std::f32::consts::TAU,
            laser_speed: 800.0,
            laser_lifetime: 1.0,
            fire_cooldown: 0.5,
        }
    }
}

/// Scripted, window-less run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Frames to run before quitting
    pub frames: u64,

    /// Directory textures are loaded from
    pub asset_root: String,

    /// Seed for asteroid placement
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 300,
            asset_root: "assets".to_string(),
            seed: 7,
        }
    }
}

impl GameConfig {
    /// Load configuration from `path`; `Ok(None)` when the file does not exist
    pub fn load(path: &str) -> Result<Option<Self>, ConfigError> {
        if !Path::new(path).exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [gameplay]
            asteroid_count = 3

            [demo]
            frames = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.gameplay.asteroid_count, 3);
        assert_eq!(config.gameplay.laser_lifetime, 1.0);
        assert_eq!(config.demo.frames, 10);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        assert!(matches!(GameConfig::load("definitely/not/here.toml"), Ok(None)));
    }

    #[test]
    fn test_unsupported_extension_is_an_error() {
        let path = std::env::temp_dir().join(format!("asteroids_{}.json", std::process::id()));
        std::fs::write(&path, "{}").unwrap();

        let result = GameConfig::load(&path.to_string_lossy());

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
        let _ = std::fs::remove_file(&path);
    }
}
