pub mod renderer;
pub mod theme;

pub use renderer::{Cell, Hud, Renderer};
pub use theme::{Palette, Theme};
