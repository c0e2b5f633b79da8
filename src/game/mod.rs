//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The interactive mode drives it one tick at a time.

pub mod action;
pub mod arena;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use arena::{Arena, ArenaPreset, MovingObstacle};
pub use config::{GameConfig, Speed};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{CollisionType, GameState, Phase, Position, Snake};
