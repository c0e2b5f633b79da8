//! Settings for a play session
//!
//! Values come from an optional JSON file; command-line flags override them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::game::GameConfig;
use crate::persistence::high_score::DEFAULT_HIGH_SCORE_FILE;
use crate::render::Theme;

/// Everything a session needs besides the game rules themselves
///
/// # Example
///
/// ```json
/// {
///   "game": { "arena": "patrol", "speed": "fast" },
///   "theme": "neon",
///   "sound": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub theme: Theme,
    /// Ring the terminal bell on game events
    pub sound: bool,
    /// Where the best score is kept between runs
    pub high_score_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            theme: Theme::default(),
            sound: true,
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: AppConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate().context("Invalid game settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ArenaPreset, Speed};
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(
            &path,
            r#"{ "game": { "arena": "pillars", "grid_width": 30 }, "theme": "midnight" }"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.game.arena, ArenaPreset::Pillars);
        assert_eq!(config.game.grid_width, 30);
        assert_eq!(config.game.grid_height, 20);
        assert_eq!(config.game.speed, Speed::Normal);
        assert_eq!(config.theme, Theme::Midnight);
        assert!(config.sound);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_load_bad_json_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "theme": "sepia" }"#).unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_validate_reports_grid_errors() {
        let mut config = AppConfig::default();
        config.game.grid_width = 3;
        assert!(config.validate().is_err());
    }
}
