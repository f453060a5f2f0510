//! Cells in the cellular automaton.

use crate::error::Error;
use derivative::Derivative;
use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
    str::FromStr,
};

/// Possible states of a cell.
///
/// [`Newborn`](State::Newborn) marks a cell that has just been born.
/// When counting neighbors it is treated exactly like [`Alive`](State::Alive).
#[derive(Clone, Copy, Debug, Derivative, PartialEq, Eq, Hash)]
#[derivative(Default)]
pub enum State {
    /// A dead cell.
    #[derivative(Default)]
    Dead,
    /// A living cell.
    Alive,
    /// A living cell which was born in the generation recorded in its tag.
    Newborn,
}

impl State {
    /// Whether the cell is occupied, i.e., [`Alive`](State::Alive)
    /// or [`Newborn`](State::Newborn).
    #[inline]
    pub fn is_alive(self) -> bool {
        self != State::Dead
    }
}

/// Flips the state.
///
/// Any living state becomes [`Dead`](State::Dead),
/// and [`Dead`](State::Dead) becomes [`Newborn`](State::Newborn).
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        if self.is_alive() {
            State::Dead
        } else {
            State::Newborn
        }
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dead" | "d" | "0" => Ok(State::Dead),
            "alive" | "a" | "1" => Ok(State::Alive),
            "new" | "newborn" | "n" | "2" => Ok(State::Newborn),
            _ => Err(Error::InvalidCellState(s.to_string())),
        }
    }
}

impl TryFrom<&str> for State {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<u8> for State {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(State::Dead),
            1 => Ok(State::Alive),
            2 => Ok(State::Newborn),
            _ => Err(Error::InvalidCellState(code.to_string())),
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            State::Dead => "dead",
            State::Alive => "alive",
            State::Newborn => "new",
        };
        f.write_str(s)
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed.
/// Coordinates outside the world wrap around.
pub type Coord = (isize, isize);

/// A cell in the cellular automaton.
///
/// The name `LifeCell` is chosen to avoid ambiguity with
/// [`std::cell::Cell`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LifeCell {
    /// The state of the cell.
    pub state: State,

    /// The generation in which the state of the cell last changed.
    pub born: u64,
}

impl LifeCell {
    /// Creates a new cell with the given state, tagged with `generation`.
    #[inline]
    pub fn new(state: State, generation: u64) -> Self {
        LifeCell {
            state,
            born: generation,
        }
    }

    /// Whether the cell is occupied.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// The character used in the plain text form of a grid.
    pub(crate) fn symbol(&self) -> char {
        match self.state {
            State::Dead => '.',
            State::Alive => 'o',
            State::Newborn => '+',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_predicate() {
        assert!(!State::Dead.is_alive());
        assert!(State::Alive.is_alive());
        assert!(State::Newborn.is_alive());
    }

    #[test]
    fn flip() {
        assert_eq!(!State::Dead, State::Newborn);
        assert_eq!(!State::Alive, State::Dead);
        assert_eq!(!State::Newborn, State::Dead);
    }

    #[test]
    fn parse_state() {
        assert_eq!("dead".parse::<State>(), Ok(State::Dead));
        assert_eq!("Alive".parse::<State>(), Ok(State::Alive));
        assert_eq!(" new ".parse::<State>(), Ok(State::Newborn));
        assert_eq!(State::try_from(2u8), Ok(State::Newborn));
        assert_eq!(
            "zombie".parse::<State>(),
            Err(Error::InvalidCellState(String::from("zombie")))
        );
        assert_eq!(
            State::try_from(7u8),
            Err(Error::InvalidCellState(String::from("7")))
        );
    }
}
