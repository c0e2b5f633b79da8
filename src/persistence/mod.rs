//! Local persistence for the best score
//!
//! The only thing kept between runs is a single integer.

pub mod high_score;

pub use high_score::HighScoreStore;
