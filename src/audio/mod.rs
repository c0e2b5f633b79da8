//! Sound cues for game events
//!
//! A terminal has one sound: the bell. Effects are told apart by how many
//! times it rings.

pub mod bell;

pub use bell::TerminalBell;

use anyhow::Result;

/// Game events that make a noise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Start,
    Eat,
    Pause,
    Resume,
    HighScore,
    GameOver,
}

impl SoundEffect {
    /// Number of bell rings for this effect
    pub fn pulses(&self) -> usize {
        match self {
            Self::Start | Self::Eat => 1,
            Self::Pause | Self::Resume => 0,
            Self::HighScore => 2,
            Self::GameOver => 3,
        }
    }
}

/// Anything that can play sound effects
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect) -> Result<()>;

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Flip the mute switch and return the new state
    fn toggle(&mut self) -> bool {
        let enabled = !self.is_enabled();
        self.set_enabled(enabled);
        enabled
    }
}
