use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::action::Action;
use crate::engine::direction::Direction;

/// Returns true only for actual key presses (ignores repeats/releases).
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

pub fn action_for_key(key: &KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Up => Action::Move(Direction::Up),
        KeyCode::Down => Action::Move(Direction::Down),
        KeyCode::Left => Action::Move(Direction::Left),
        KeyCode::Right => Action::Move(Direction::Right),
        KeyCode::Esc => Action::Quit,
        _ => Action::Invalid,
    }
}
