//! Swipe gestures from mouse or touchpad drags
//!
//! Terminals report touch input as mouse events. A press followed by a
//! release far enough away counts as a swipe along the dominant axis.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

/// Terminal cells are roughly twice as tall as they are wide
const ROW_SCALE: i32 = 2;
/// Shortest drag, in column widths, that counts as a swipe
const MIN_SWIPE: i32 = 2;

#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a mouse event; returns a direction when a swipe completes
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (column, row) = self.origin.take()?;
                let dx = i32::from(event.column) - i32::from(column);
                let dy = (i32::from(event.row) - i32::from(row)) * ROW_SCALE;
                Self::classify(dx, dy)
            }
            _ => None,
        }
    }

    fn classify(dx: i32, dy: i32) -> Option<Direction> {
        if dx.abs().max(dy.abs()) < MIN_SWIPE {
            return None;
        }

        if dx.abs() >= dy.abs() {
            Some(if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            Some(if dy > 0 {
                Direction::Down
            } else {
                Direction::Up
            })
        }
    }
}
