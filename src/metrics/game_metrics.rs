use std::time::{Duration, Instant};

/// Per-session bookkeeping: round clock, games played and best score
pub struct GameMetrics {
    /// Set while the round clock is ticking
    running_since: Option<Instant>,
    /// Time banked before the last pause
    banked: Duration,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::with_high_score(0)
    }

    /// Start a session with a best score carried over from disk
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            running_since: None,
            banked: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            high_score,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked
            + self
                .running_since
                .map(|since| since.elapsed())
                .unwrap_or(Duration::ZERO);
    }

    /// Clear the clock for a fresh round; it starts with `resume`
    pub fn on_game_start(&mut self) {
        self.running_since = None;
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
    }

    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
        self.update();
    }

    /// Track a running score; returns true when it beats the session best
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.pause();
        self.games_played += 1;
        self.record_score(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::with_high_score(20);

        assert!(!metrics.record_score(10));
        assert!(metrics.record_score(30));
        assert_eq!(metrics.high_score, 30);

        metrics.on_game_over(30);
        assert_eq!(metrics.high_score, 30);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 30); // Should not decrease
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_clock_waits_for_resume() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);

        metrics.resume();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 50);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut metrics = GameMetrics::new();
        metrics.resume();
        std::thread::sleep(Duration::from_millis(30));
        metrics.pause();
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.on_game_start();
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
    }
}
