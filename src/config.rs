use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::{EmopickError, EmopickResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub behavior: BehaviorConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Maximum number of results shown for any query
    pub max_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub window_width: i32,
    pub opacity: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { max_results: 20 }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            window_width: 420,
            opacity: 0.95,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("emopick")
            .join("config.toml")
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_path();

        let mut config = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("[Emopick] Failed to parse config: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    eprintln!("[Emopick] Failed to read config: {}", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        self.behavior.max_results = self.behavior.max_results.clamp(1, 100);
        self.appearance.window_width = self.appearance.window_width.clamp(320, 1200);
        self.appearance.opacity = self.appearance.opacity.clamp(0.5, 1.0);
    }

    /// Save config to file
    pub fn save(&self) -> EmopickResult<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| EmopickError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.behavior.max_results, 20);
        assert_eq!(config.appearance.window_width, 420);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("[behavior]\nmax_results = 5\n").unwrap();
        assert_eq!(config.behavior.max_results, 5);
        // Missing sections fall back to defaults
        assert_eq!(config.appearance.window_width, 420);
    }

    #[test]
    fn test_validate_clamps() {
        let mut config: Config = toml::from_str("[behavior]\nmax_results = 0\n").unwrap();
        config.validate();
        assert_eq!(config.behavior.max_results, 1);

        let mut config: Config = toml::from_str("[appearance]\nopacity = 2.0\n").unwrap();
        config.validate();
        assert_eq!(config.appearance.opacity, 1.0);
    }
}
