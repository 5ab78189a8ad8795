//! Configuration models and loaders for the satellite hops route planner.

use std::fs::File;
use std::path::Path;

use hops_core::constants::DEFAULT_RELAY_CAPACITY;
use serde::Deserialize;
use thiserror::Error;

/// Run settings for a single route computation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RouteConfig {
    #[serde(default = "default_relay_capacity")]
    pub relay_capacity: usize,
    #[serde(default)]
    pub altitude_model: AltitudeModelConfig,
    #[serde(default)]
    pub strategy: SearchStrategyConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Whether relay altitude raises the Cartesian radius.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeModelConfig {
    #[default]
    Surface,
    Raised,
}

/// Route search behaviour after a dead-end branch.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategyConfig {
    /// Keep failed hops in the route and continue scanning.
    #[default]
    FirstFit,
    /// Remove a failed branch before trying the next candidate.
    Backtracking,
}

fn default_relay_capacity() -> usize {
    DEFAULT_RELAY_CAPACITY
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            relay_capacity: default_relay_capacity(),
            altitude_model: AltitudeModelConfig::default(),
            strategy: SearchStrategyConfig::default(),
            log_level: default_log_level(),
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("relay capacity must be at least 1")]
    ZeroCapacity,
}

/// Load route settings from a TOML (by extension) or YAML file.
pub fn load_route_config<P: AsRef<Path>>(path: P) -> Result<RouteConfig, ConfigError> {
    let path = path.as_ref();
    let config: RouteConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    if config.relay_capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    Ok(config)
}
