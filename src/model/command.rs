use serde::Serialize;

/// Logical slide direction selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Key token understood by the devices' `press_key` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Left,
    Right,
}

impl Direction {
    pub fn key(self) -> Key {
        match self {
            Direction::Prev => Key::Left,
            Direction::Next => Key::Right,
        }
    }
}
