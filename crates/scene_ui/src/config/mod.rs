//! Configuration system

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::assets::TextureParams;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from file, or defaults when the file does not exist
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("No config at {}, using defaults", path);
            Ok(Self::default())
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
}

/// Widget tree configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Sampling parameters used when a widget loads its own texture
    pub texture_params: TextureParams,

    /// Edge length of the quad used when a rect's texture fails to load
    pub placeholder_size: f32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            texture_params: TextureParams::clamped(),
            placeholder_size: 1.0,
        }
    }
}

impl Config for UIConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::WrapMode;

    fn temp_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("scene_ui_{}_{}", std::process::id(), name));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_uses_clamp_sampling() {
        let config = UIConfig::default();
        assert_eq!(config.texture_params.wrap_mode, WrapMode::ClampToEdge);
        assert!(!config.texture_params.generate_mipmaps);
        assert_eq!(config.placeholder_size, 1.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("ui.toml");
        let mut config = UIConfig::default();
        config.placeholder_size = 4.0;

        config.save_to_file(&path).unwrap();
        let loaded = UIConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_ron_falls_back_to_defaults() {
        let path = temp_path("ui.ron");
        std::fs::write(&path, "(placeholder_size: 2.0)").unwrap();
        let loaded = UIConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.placeholder_size, 2.0);
        assert_eq!(loaded.texture_params, TextureParams::clamped());
    }

    #[test]
    fn test_unsupported_extension() {
        let path = temp_path("settings.ini");
        std::fs::write(&path, "placeholder_size = 2.0").unwrap();
        let result = UIConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(p)) if p == path));
        assert!(matches!(
            UIConfig::default().save_to_file(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(!std::path::Path::new(&path).exists());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = UIConfig::load_or_default(&temp_path("missing.toml")).unwrap();
        assert_eq!(loaded, UIConfig::default());
    }
}
