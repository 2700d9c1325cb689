//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration for itinera
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Itinerary dataset configuration
    #[serde(default)]
    pub itinerary: ItineraryConfig,
    /// Google Maps configuration
    #[serde(default)]
    pub maps: MapsConfig,
    /// Model-provider configuration
    #[serde(default)]
    pub agent: AgentConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the prebuilt front-end bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "frontend/build".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Itinerary dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryConfig {
    /// Path to the itinerary JSON file
    #[serde(default = "default_itinerary_path")]
    pub path: String,
}

fn default_itinerary_path() -> String {
    "itinerary_data.json".to_string()
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            path: default_itinerary_path(),
        }
    }
}

/// Google Maps configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapsConfig {
    /// API key for the map view; the maps-key endpoint returns 500 without it
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Model-provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// API key for the model provider
    #[serde(default)]
    pub api_key: Option<String>,
    /// Override for the provider API base URL
    #[serde(default)]
    pub api_base: Option<String>,
    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,
    /// Application name used as the default session namespace
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_app_name() -> String {
    "itinera".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            model: default_model(),
            app_name: default_app_name(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
