use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::mapper::KeySource;
use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

/// Map a key code to the direction it steers, arrows and WASD alike
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
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

        if let Some(direction) = direction_for(key.code) {
            return KeyAction::Steer(direction);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Which directional keys are currently held.
///
/// Terminals only report key releases when keyboard enhancement is enabled.
/// Without it a press counts as held for the rest of the frame it arrived in.
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: [bool; 4],
    reports_release: bool,
}

impl KeyboardState {
    pub fn new(reports_release: bool) -> Self {
        Self {
            held: [false; 4],
            reports_release,
        }
    }

    /// Record a key event; non-directional keys are ignored
    pub fn observe(&mut self, key: &KeyEvent) {
        let Some(slot) = direction_for(key.code).and_then(slot) else {
            return;
        };
        self.held[slot] = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => true,
            KeyEventKind::Release => false,
        };
    }

    /// Called once the frame has consumed the held keys
    pub fn end_frame(&mut self) {
        if !self.reports_release {
            self.held = [false; 4];
        }
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
    }
}

impl KeySource for KeyboardState {
    fn is_down(&self, direction: Direction) -> bool {
        slot(direction).is_some_and(|i| self.held[i])
    }
}

fn slot(direction: Direction) -> Option<usize> {
    Direction::PRIORITY.iter().position(|d| *d == direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(up), KeyAction::Steer(Direction::Up));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(down),
            KeyAction::Steer(Direction::Down)
        );

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(left),
            KeyAction::Steer(Direction::Left)
        );

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(right),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), KeyAction::Steer(Direction::Up));

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(a), KeyAction::Steer(Direction::Left));

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(s), KeyAction::Steer(Direction::Down));

        let d = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_quit_and_restart_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);

        let r = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r), KeyAction::Restart);

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);
    }

    #[test]
    fn test_held_until_release() {
        let mut keys = KeyboardState::new(true);
        keys.observe(&KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE));
        keys.end_frame();
        assert!(keys.is_down(Direction::Up));

        keys.observe(&release(KeyCode::Up));
        assert!(!keys.is_down(Direction::Up));
    }

    #[test]
    fn test_press_lasts_one_frame_without_release_events() {
        let mut keys = KeyboardState::new(false);
        keys.observe(&KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert!(keys.is_down(Direction::Left));
        assert!(!keys.is_down(Direction::Right));

        keys.end_frame();
        assert!(!keys.is_down(Direction::Left));
    }

    #[test]
    fn test_none_is_never_held() {
        let mut keys = KeyboardState::new(true);
        keys.observe(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(!keys.is_down(Direction::None));
    }
}
