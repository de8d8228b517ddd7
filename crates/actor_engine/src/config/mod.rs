//! Configuration system
//!
//! Engine settings are plain serde structs. Any `Serialize + Deserialize +
//! Default` type gets file loading and saving in TOML or RON through the
//! [`Config`] trait.

pub use serde::{Deserialize, Serialize};

use crate::render::Color;
use std::time::Duration;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

impl<T> Config for T where T: Serialize + for<'de> Deserialize<'de> + Default {}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of its valid range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Actor Engine".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Frame pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Minimum wall time between two frames, in milliseconds
    pub min_frame_interval_ms: u64,

    /// Upper bound on the delta time handed to actors, in seconds
    pub max_delta_seconds: f32,

    /// Catch panics from individual actor updates and kill the offending actor
    pub isolate_actor_panics: bool,
}

impl FrameConfig {
    /// Minimum frame interval as a [`Duration`]
    pub fn min_frame_interval(&self) -> Duration {
        Duration::from_millis(self.min_frame_interval_ms)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            min_frame_interval_ms: 16,
            max_delta_seconds: 0.05,
            isolate_actor_panics: true,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Stop the loop when Escape is held
    pub quit_on_escape: bool,

    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,

    /// Color the back buffer is cleared to each frame
    pub clear_color: Color,

    /// Window configuration
    pub window: WindowConfig,

    /// Frame pacing
    pub frame: FrameConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quit_on_escape: true,
            log_filter: "info".to_string(),
            clear_color: Color::BLACK,
            window: WindowConfig::default(),
            frame: FrameConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reject values the frame loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frame.max_delta_seconds > 0.0) || !self.frame.max_delta_seconds.is_finite() {
            return Err(ConfigError::Invalid {
                field: "frame.max_delta_seconds",
                reason: format!("must be a positive number, got {}", self.frame.max_delta_seconds),
            });
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!("size must be non-zero, got {}x{}", self.window.width, self.window.height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("actor_engine_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame.min_frame_interval(), Duration::from_millis(16));
        assert_eq!(config.frame.max_delta_seconds, 0.05);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
            quit_on_escape = false

            [frame]
            max_delta_seconds = 0.1
            "#,
        )
        .unwrap();

        assert!(!config.quit_on_escape);
        assert_eq!(config.frame.max_delta_seconds, 0.1);
        assert_eq!(config.frame.min_frame_interval_ms, 16);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.frame.max_delta_seconds = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "frame.max_delta_seconds", .. })
        ));

        let mut config = EngineConfig::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "window", .. })));
    }

    #[test]
    fn test_save_and_load_toml_file() {
        let path = temp_path("engine.toml");
        let mut config = EngineConfig::default();
        config.window.title = "Saved".to_string();
        config.clear_color = Color::rgb(10, 20, 30);

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_and_load_ron_file() {
        let path = temp_path("engine.ron");
        let mut config = EngineConfig::default();
        config.frame.isolate_actor_panics = false;

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = EngineConfig::default().save_to_file(&temp_path("engine.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
