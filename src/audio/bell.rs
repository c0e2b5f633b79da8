use anyhow::{Context, Result};
use std::io::Write;

use super::{SoundEffect, SoundSink};

const BEL: u8 = 0x07;

/// Rings the terminal bell by writing BEL bytes to `out`
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect) -> Result<()> {
        let pulses = effect.pulses();
        if !self.enabled || pulses == 0 {
            return Ok(());
        }

        self.out
            .write_all(&vec![BEL; pulses])
            .context("Failed to ring terminal bell")?;
        self.out.flush().context("Failed to flush terminal bell")?;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulses_written() {
        let mut bell = TerminalBell::new(Vec::new(), true);
        bell.play(SoundEffect::Eat).unwrap();
        bell.play(SoundEffect::GameOver).unwrap();
        assert_eq!(bell.into_inner(), vec![BEL; 4]);
    }

    #[test]
    fn test_silent_effects() {
        let mut bell = TerminalBell::new(Vec::new(), true);
        bell.play(SoundEffect::Pause).unwrap();
        bell.play(SoundEffect::Resume).unwrap();
        assert!(bell.into_inner().is_empty());
    }

    #[test]
    fn test_muted_bell_is_quiet() {
        let mut bell = TerminalBell::new(Vec::new(), true);
        assert!(!bell.toggle());
        bell.play(SoundEffect::HighScore).unwrap();
        assert!(bell.toggle());
        bell.play(SoundEffect::Start).unwrap();
        assert_eq!(bell.into_inner(), vec![BEL]);
    }
}
