//! Configuration loading and management

use super::schema::Config;
use super::validate::validate_config;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Configuration loader
///
/// Loads `config.json` from the config directory if one exists, then
/// applies environment-variable overrides on top.
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader rooted at the working directory
    pub fn new() -> Self {
        Self {
            config_dir: PathBuf::from("."),
        }
    }

    /// Create a new config loader with a custom config directory
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            config_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load configuration from file and environment
    pub fn load(&self) -> crate::Result<Config> {
        let config_path = self.config_dir.join("config.json");
        let mut merged = serde_json::to_value(Config::default())?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_value: Value = serde_json::from_str(&content)?;
            merge_values(&mut merged, file_value);
        }

        let mut config: Config = serde_json::from_value(merged)?;
        apply_env_overrides(&mut config);
        validate_config(&config)?;
        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                if let Some(existing) = base_map.get_mut(&key) {
                    merge_values(existing, value);
                } else {
                    base_map.insert(key, value);
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value;
        }
    }
}

fn apply_env_overrides(config: &mut Config) {
    // GOOGLE_API_KEY serves both the map view and the model provider,
    // matching how the front end and provider were originally keyed.
    if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
        config.maps.api_key = Some(key.clone());
        config.agent.api_key = Some(key);
    }
    if let Ok(key) = std::env::var("GOOGLE_MAPS_API_KEY") {
        config.maps.api_key = Some(key);
    }
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        config.agent.api_key = Some(key);
    }
    if let Ok(model) = std::env::var("ITINERA_MODEL") {
        config.agent.model = model;
    }
    if let Ok(path) = std::env::var("ITINERA_DATA_PATH") {
        config.itinerary.path = path;
    }
    if let Ok(dir) = std::env::var("ITINERA_STATIC_DIR") {
        config.server.static_dir = dir;
    }
    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
}
