use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::pane_width::AnchorConfig;
use crate::theme::Theme;
use crate::transition::DemoVariant;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_pane_width: f32,
    pub start_anchor: f32,
    pub end_anchor: f32,
    pub divider_width: f32,
    pub theme: Theme,
    pub demo: DemoVariant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pane_width: 360.0,
            start_anchor: 360.0,
            end_anchor: 360.0,
            divider_width: 8.0,
            theme: Theme::default(),
            demo: DemoVariant::default(),
        }
    }
}

impl Config {
    pub fn anchors(&self) -> AnchorConfig {
        AnchorConfig {
            start_anchor: self.start_anchor,
            end_anchor: self.end_anchor,
        }
    }

    /// Get the config file path (~/.config/pane-stage/config.yaml)
    pub fn config_path() -> Option<PathBuf> {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path.push("pane-stage");
            path.push("config.yaml");
            Some(path)
        } else {
            None
        }
    }

    /// Load config from file, or fall back to defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(content) => match serde_yaml::from_str(&content) {
                        Ok(config) => {
                            info!("Loaded config from {:?}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file: {}", e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file: {}", e);
                    }
                }
            } else {
                info!("Config file not found at {:?}, using defaults", path);
            }
        }

        Self::default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), String> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create config directory: {}", e))?;
            }

            let yaml = serde_yaml::to_string(self)
                .map_err(|e| format!("Failed to serialize config: {}", e))?;

            fs::write(&path, yaml).map_err(|e| format!("Failed to write config file: {}", e))?;

            info!("Saved config to {:?}", path);
            Ok(())
        } else {
            Err("Could not determine config path".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let yaml = r#"
start_anchor: 240.0
demo: fade-only
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.start_anchor, 240.0);
        assert_eq!(config.demo, DemoVariant::FadeOnly);
        // untouched fields keep their defaults
        assert_eq!(config.end_anchor, 360.0);
        assert_eq!(config.divider_width, 8.0);
    }

    #[test]
    fn test_anchors_mirror_config_fields() {
        let config = Config {
            start_anchor: 100.0,
            end_anchor: 200.0,
            ..Config::default()
        };
        let anchors = config.anchors();
        assert_eq!(anchors.start_anchor, 100.0);
        assert_eq!(anchors.end_anchor, 200.0);
    }
}
