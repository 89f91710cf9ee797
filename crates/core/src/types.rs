//! Value types selecting escape-code suffixes.
//!
//! [`Color`] and [`Direction`] carry no state; each maps to a fixed piece of a
//! control sequence through a lookup ([`Color::offset`], [`Direction::letter`]).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a name does not match any variant, ignoring case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {} name: \"{}\"", .kind, .name)]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

/// One of the eight basic ANSI colors.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every color, ordered by its offset.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Offset added to 30 (foreground) or 40 (background).
    #[must_use]
    pub fn offset(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.to_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| color.name() == lowercase)
            .ok_or_else(|| UnknownName {
                kind: "color",
                name: s.to_string(),
            })
    }
}

/// Direction of a relative cursor movement.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Final byte of the `CSI <n> <letter>` movement sequence.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'A',
            Direction::Down => 'B',
            Direction::Forward => 'C',
            Direction::Backward => 'D',
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|direction| direction.name() == lowercase)
            .ok_or_else(|| UnknownName {
                kind: "direction",
                name: s.to_string(),
            })
    }
}

/// Where a character is drawn relative to the saved cursor position.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorOffset {
    pub direction: Direction,
    pub amount: u16,
}

impl Default for CursorOffset {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            amount: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_offsets_follow_declaration_order() {
        for (index, color) in Color::ALL.iter().enumerate() {
            assert_eq!(usize::from(color.offset()), index);
        }
    }

    #[test]
    fn test_color_from_str_ignores_case() {
        assert_eq!("RED".parse::<Color>(), Ok(Color::Red));
        assert_eq!("Magenta".parse::<Color>(), Ok(Color::Magenta));
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
    }

    #[test]
    fn test_color_from_str_rejects_unknown() {
        let err = "purple".parse::<Color>().unwrap_err();
        assert_eq!(err.kind, "color");
        assert_eq!(err.name, "purple");
        assert_eq!(err.to_string(), "Unknown color name: \"purple\"");
    }

    #[test]
    fn test_direction_letters() {
        let letters: String = Direction::ALL.iter().map(|d| d.letter()).collect();
        assert_eq!(letters, "ABCD");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("Forward".parse::<Direction>(), Ok(Direction::Forward));
        assert_eq!("BACKWARD".parse::<Direction>(), Ok(Direction::Backward));
        assert!("left".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_default_offset_is_one_up() {
        let offset = CursorOffset::default();
        assert_eq!(offset.direction, Direction::Up);
        assert_eq!(offset.amount, 1);
    }
}
