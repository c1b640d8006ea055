use serde::{Deserialize, Serialize};

/// One of the four movement directions on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180-degree reversal of this direction
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check whether `other` is the exact reversal of this direction
    pub fn is_opposite(&self, other: Direction) -> bool {
        other == self.opposite()
    }

    /// Cell delta (dcol, drow) for one step in this direction.
    /// Up is towards smaller row indices.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a direction from its config-file name ("up", "down", "left", "right")
    pub fn from_name(name: &str) -> Option<Direction> {
        match name.to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}
