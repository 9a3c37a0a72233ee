use std::fs;
use std::path::Path;

use macroquad::window::Conf;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Grid;

pub const CONFIG_PATH: &str = "snake_config.json";

/// Window and grid settings for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_width: i32,
    pub ticks_per_second: u32,
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1080,
            screen_height: 600,
            cell_width: 60,
            ticks_per_second: 10,
            title: "Snake".to_owned(),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists; any failure falls back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width <= 0 {
            return Err(ConfigError::CellWidth(self.cell_width));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::TickRate);
        }
        let fits = |side: i32| side > 0 && side % self.cell_width == 0;
        if !fits(self.screen_width) || !fits(self.screen_height) {
            return Err(ConfigError::Geometry {
                width: self.screen_width,
                height: self.screen_height,
                cell_width: self.cell_width,
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.screen_width, self.screen_height, self.cell_width)
    }

    pub fn tick_interval(&self) -> f64 {
        1.0 / self.ticks_per_second as f64
    }

    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.screen_width,
            window_height: self.screen_height,
            window_resizable: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_window() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid(), Grid::new(1080, 600, 60));
        assert!((config.tick_interval() - 0.1).abs() < 1e-9);

        let conf = config.window_conf();
        assert_eq!(conf.window_title, "Snake");
        assert_eq!(conf.window_width, 1080);
        assert_eq!(conf.window_height, 600);
        assert!(!conf.window_resizable);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "cell_width": 40 }"#).unwrap();
        assert_eq!(config.cell_width, 40);
        assert_eq!(config.screen_width, 1080);
        assert_eq!(config.title, "Snake");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_misaligned_surface() {
        let config = GameConfig {
            screen_width: 1000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Geometry { width: 1000, .. })
        ));
    }

    #[test]
    fn rejects_bad_cell_width_and_rate() {
        let config = GameConfig {
            cell_width: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::CellWidth(0))));

        let config = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TickRate)));
    }

    #[test]
    fn load_round_trips_through_file() {
        let path =
            std::env::temp_dir().join(format!("snake_config_{}.json", std::process::id()));
        let config = GameConfig {
            screen_width: 600,
            screen_height: 400,
            cell_width: 20,
            ticks_per_second: 15,
            title: "Tiny".to_owned(),
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_or_broken_file_falls_back() {
        let missing = std::env::temp_dir().join("snake_config_does_not_exist.json");
        assert_eq!(GameConfig::load_or_default(&missing), GameConfig::default());

        let broken = std::env::temp_dir()
            .join(format!("snake_config_broken_{}.json", std::process::id()));
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(GameConfig::load(&broken), Err(ConfigError::Parse(_))));
        assert_eq!(GameConfig::load_or_default(&broken), GameConfig::default());
        fs::remove_file(&broken).unwrap();
    }
}
