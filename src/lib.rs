//! Snake for the terminal
//!
//! This library provides:
//! - Core game logic and arena presets (game module)
//! - TUI rendering with colour themes (render module)
//! - Keyboard and swipe input (input module)
//! - Terminal-bell sound cues (audio module)
//! - High-score persistence (persistence module)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod config;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
