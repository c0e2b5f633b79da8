use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::arena::ArenaPreset;

/// Smallest grid side that still fits the starting snake and the arena presets
pub const MIN_GRID_SIZE: usize = 8;
/// Largest grid side; beyond this the board no longer fits a terminal
pub const MAX_GRID_SIZE: usize = 60;

/// How fast the game ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    /// 180ms per tick
    Slow,
    /// 120ms per tick
    #[default]
    Normal,
    /// 80ms per tick
    Fast,
    /// 50ms per tick
    Insane,
}

impl Speed {
    /// Get the tick interval for this speed
    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(180),
            Self::Normal => Duration::from_millis(120),
            Self::Fast => Duration::from_millis(80),
            Self::Insane => Duration::from_millis(50),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::Insane => "Insane",
        }
    }

    /// Next speed in the cycle, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Slow => Self::Normal,
            Self::Normal => Self::Fast,
            Self::Fast => Self::Insane,
            Self::Insane => Self::Slow,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food eaten
    pub food_score: u32,
    /// Obstacle layout
    pub arena: ArenaPreset,
    /// Tick rate
    pub speed: Speed,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            food_score: 10,
            arena: ArenaPreset::Classic,
            speed: Speed::Normal,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject configurations the engine cannot start a round with
    pub fn validate(&self) -> Result<()> {
        for (name, side) in [("width", self.grid_width), ("height", self.grid_height)] {
            if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&side) {
                bail!(
                    "grid {} must be between {} and {}, got {}",
                    name,
                    MIN_GRID_SIZE,
                    MAX_GRID_SIZE,
                    side
                );
            }
        }

        if self.initial_snake_length == 0 {
            bail!("initial snake length must be at least 1");
        }

        // The snake starts at the centre and extends to the left
        if self.initial_snake_length > self.grid_width / 2 + 1 {
            bail!(
                "initial snake length {} does not fit a grid {} cells wide",
                self.initial_snake_length,
                self.grid_width
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_score, 10);
        assert_eq!(config.speed.tick_interval(), Duration::from_millis(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        assert!(GameConfig::new(4, 20).validate().is_err());
        assert!(GameConfig::new(20, 200).validate().is_err());

        let mut config = GameConfig::small();
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        config.initial_snake_length = 7;
        assert!(config.validate().is_err());

        config.initial_snake_length = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_speed_cycle() {
        let mut speed = Speed::Slow;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(speed);
            speed = speed.next();
        }
        assert_eq!(speed, Speed::Slow);
        assert_eq!(
            seen,
            vec![Speed::Slow, Speed::Normal, Speed::Fast, Speed::Insane]
        );
        assert!(Speed::Fast.tick_interval() < Speed::Slow.tick_interval());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "arena": "patrol", "speed": "fast" }"#).unwrap();
        assert_eq!(config.arena, ArenaPreset::Patrol);
        assert_eq!(config.speed, Speed::Fast);
        assert_eq!(config.grid_width, 20);
    }
}
