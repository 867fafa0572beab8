use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Key presses the game core understands.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Restart,
    Other,
}

impl Key {
    /// Returns the heading requested by a directional key.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Restart | Self::Other => None,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Char(' ') => Self::Restart,
            _ => Self::Other,
        }
    }
}

/// Host events the event loop reacts to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Key(Key),
    Resize,
    Quit,
}

/// Returns whether a heading change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates one terminal key event; `None` for releases and repeats.
#[must_use]
pub fn translate_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let is_quit = matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
    if is_quit {
        return Some(InputEvent::Quit);
    }

    Some(InputEvent::Key(Key::from(key.code)))
}

/// Waits up to `timeout` for the next relevant terminal event.
pub fn poll_input(timeout: Duration) -> io::Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(translate_key_event(key)),
        Event::Resize(_, _) => Ok(Some(InputEvent::Resize)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{Direction, InputEvent, Key, direction_change_is_valid, translate_key_event};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_rejected_and_turns_are_allowed() {
        for current in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(!direction_change_is_valid(current, current.opposite()));
            assert!(direction_change_is_valid(current, current));
        }

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Right, Direction::Down));
    }

    #[test]
    fn arrow_keys_and_space_map_to_game_keys() {
        assert_eq!(Key::from(KeyCode::Left), Key::Left);
        assert_eq!(Key::from(KeyCode::Right), Key::Right);
        assert_eq!(Key::from(KeyCode::Up), Key::Up);
        assert_eq!(Key::from(KeyCode::Down), Key::Down);
        assert_eq!(Key::from(KeyCode::Char(' ')), Key::Restart);
        assert_eq!(Key::from(KeyCode::Char('x')), Key::Other);
        assert_eq!(Key::from(KeyCode::Enter), Key::Other);
    }

    #[test]
    fn only_directional_keys_carry_a_direction() {
        assert_eq!(Key::Up.direction(), Some(Direction::Up));
        assert_eq!(Key::Restart.direction(), None);
        assert_eq!(Key::Other.direction(), None);
    }

    #[test]
    fn escape_q_and_ctrl_c_quit() {
        assert_eq!(
            translate_key_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate_key_event(press(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(InputEvent::Key(Key::Other))
        );
    }

    #[test]
    fn key_releases_are_dropped() {
        let mut release = press(KeyCode::Left, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert_eq!(translate_key_event(release), None);
    }
}
