use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = ".snake-high-score";

/// A best score stored as a decimal integer in a text file
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score
    ///
    /// A missing file means no game has been finished yet and reads as 0.
    /// An unreadable or garbled file is logged and also reads as 0, so a bad
    /// file never keeps the game from starting.
    pub fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(score) => {
                    debug!("loaded high score {} from {:?}", score, self.path);
                    score
                }
                Err(err) => {
                    warn!("ignoring unparsable high score file {:?}: {}", self.path, err);
                    0
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => 0,
            Err(err) => {
                warn!("could not read high score file {:?}: {}", self.path, err);
                0
            }
        }
    }

    /// Overwrite the stored best score
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        std::fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;
        debug!("saved high score {} to {:?}", score, self.path);
        Ok(())
    }

    /// Save `score` if it beats what is on disk. Returns true when it did.
    pub fn record(&self, score: u32) -> Result<bool> {
        if score <= self.load() {
            return Ok(false);
        }
        self.save(score)?;
        Ok(true)
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}
