use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    TogglePause,
    Restart,
    ToggleSound,
    CycleArena,
    CycleSpeed,
    CycleTheme,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameAction(Direction::Up.into()),
            KeyCode::Down => KeyAction::GameAction(Direction::Down.into()),
            KeyCode::Left => KeyAction::GameAction(Direction::Left.into()),
            KeyCode::Right => KeyAction::GameAction(Direction::Right.into()),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::GameAction(Direction::Up.into())
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::GameAction(Direction::Down.into())
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::GameAction(Direction::Left.into())
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::GameAction(Direction::Right.into())
            }

            // Controls
            KeyCode::Char(' ') => KeyAction::TogglePause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Restart,
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::ToggleSound,

            // Settings
            KeyCode::Char('1') => KeyAction::CycleArena,
            KeyCode::Char('2') => KeyAction::CycleSpeed,
            KeyCode::Char('3') => KeyAction::CycleTheme,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
