use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use term_snake::audio::TerminalBell;
use term_snake::config::AppConfig;
use term_snake::game::{ArenaPreset, Speed};
use term_snake::modes::HumanMode;
use term_snake::render::Theme;

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Snake for the terminal")]
struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Obstacle layout
    #[arg(long, value_enum)]
    arena: Option<ArenaPreset>,

    /// Tick rate
    #[arg(long, value_enum)]
    speed: Option<Speed>,

    /// Colour scheme
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Start with the terminal bell off
    #[arg(long)]
    mute: bool,

    /// Where the best score is stored
    #[arg(long)]
    high_score_file: Option<PathBuf>,
}

impl Cli {
    /// Build the session config: file first, then flag overrides
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(width) = self.width {
            config.game.grid_width = width;
        }
        if let Some(height) = self.height {
            config.game.grid_height = height;
        }
        if let Some(arena) = self.arena {
            config.game.arena = arena;
        }
        if let Some(speed) = self.speed {
            config.game.speed = speed;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.mute {
            config.sound = false;
        }
        if let Some(path) = self.high_score_file {
            config.high_score_file = path;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; the board is drawn on stdout
    pretty_env_logger::init();

    let config = Cli::parse().into_config()?;
    info!("config: {:?}", config);

    let sound = Box::new(TerminalBell::new(std::io::stdout(), config.sound));
    let mut human_mode = HumanMode::new(config, sound);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "term_snake",
            "--width",
            "30",
            "--arena",
            "cross",
            "--speed",
            "slow",
            "--theme",
            "neon",
            "--mute",
        ]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.game.grid_width, 30);
        assert_eq!(config.game.grid_height, 20);
        assert_eq!(config.game.arena, ArenaPreset::Cross);
        assert_eq!(config.game.speed, Speed::Slow);
        assert_eq!(config.theme, Theme::Neon);
        assert!(!config.sound);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let cli = Cli::parse_from(["term_snake", "--height", "2"]);
        assert!(cli.into_config().is_err());
    }
}
