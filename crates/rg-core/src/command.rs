//! Agent command vocabulary.
//!
//! The single-letter wire symbols (`L`, `R`, `M`) are mapped here, at the
//! boundary.  Everything past this point works with typed [`Command`]s.

use std::fmt;

/// A quarter-turn direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    Left,
    Right,
}

/// One step of an agent's command stream.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Rotate 90° anticlockwise in place.
    Left,
    /// Rotate 90° clockwise in place.
    Right,
    /// Move one cell along the current heading.
    Advance,
}

impl Command {
    /// Map a command letter to a `Command`.  Returns `None` for anything
    /// other than `L`, `R` or `M` (case-sensitive).
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            'M' => Some(Command::Advance),
            _   => None,
        }
    }

    /// The command letter for this command.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Command::Left    => 'L',
            Command::Right   => 'R',
            Command::Advance => 'M',
        }
    }

    /// The rotation this command performs, if it is a turn.
    #[inline]
    pub fn rotation(self) -> Option<Rotation> {
        match self {
            Command::Left    => Some(Rotation::Left),
            Command::Right   => Some(Rotation::Right),
            Command::Advance => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
