//! Configuration system
//!
//! Config structs are plain serde types with sensible defaults; the
//! [`Config`] trait adds file round-tripping, picking TOML or RON by file
//! extension.

use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, parsed, or has
    /// an unsupported extension.
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
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if serialization or the write fails, or the
    /// extension is unsupported.
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

/// Configuration for the [`Core`](crate::core::Core) loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application name, used in lifecycle log messages
    pub app_name: String,

    /// Stop the loop after this many frames; 0 means run until the
    /// application requests a stop
    pub max_frames: u64,

    /// Log frame statistics at shutdown
    pub log_frame_stats: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "node_engine".to_string(),
            max_frames: 0,
            log_frame_stats: true,
        }
    }
}

impl Config for CoreConfig {}

/// Configuration for a single [`Scene`](crate::ecs::Scene)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Maximum number of live nodes in the scene
    pub max_nodes: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { max_nodes: 10_000 }
    }
}

impl Config for SceneConfig {}
