//! Input handling.
//!
//! Maps keys (or plain characters from a line-based terminal) onto the
//! four moves and quit.

use serde::{Deserialize, Serialize};

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// W (up).
    W,
    /// A (left).
    A,
    /// S (down).
    S,
    /// D (right).
    D,
    /// Q (quit).
    Q,
    /// Escape key.
    Escape,
}

impl Key {
    /// Key for a typed character, case-insensitive. Unmapped characters
    /// return `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Self::W),
            'a' => Some(Self::A),
            's' => Some(Self::S),
            'd' => Some(Self::D),
            'q' => Some(Self::Q),
            '\u{1b}' => Some(Self::Escape),
            _ => None,
        }
    }
}

/// One-tile step in a cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveIntent {
    /// y - 1.
    Up,
    /// y + 1.
    Down,
    /// x - 1.
    Left,
    /// x + 1.
    Right,
}

impl MoveIntent {
    /// Every direction.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(dx, dy)` of the step. Y grows downwards.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Move bound to a key (arrows and WASD).
    #[must_use]
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up | Key::W => Some(Self::Up),
            Key::Down | Key::S => Some(Self::Down),
            Key::Left | Key::A => Some(Self::Left),
            Key::Right | Key::D => Some(Self::Right),
            Key::Q | Key::Escape => None,
        }
    }
}

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step one tile.
    Move(MoveIntent),
    /// Leave the game.
    Quit,
}

impl Command {
    /// Command bound to a key.
    #[must_use]
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Q | Key::Escape => Some(Self::Quit),
            other => match MoveIntent::from_key(other) {
                Some(intent) => Some(Self::Move(intent)),
                None => None,
            },
        }
    }

    /// Command for a typed character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Key::from_char(c).and_then(Self::from_key)
    }

    /// Commands in a typed line, in order. Unmapped characters (and
    /// whitespace) are skipped.
    #[must_use]
    pub fn parse_line(line: &str) -> Vec<Self> {
        line.chars().filter_map(Self::from_char).collect()
    }
}
