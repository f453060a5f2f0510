//! Totalistic Life-like rules.

use crate::{cells::State, error::Error};
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Totalistic Life-like rules.
///
/// A living cell survives if its number of living neighbors is in `S`,
/// a dead cell is born if its number of living neighbors is in `B`.
/// Everything else dies or stays dead.
///
/// The default rule is Conway's Game of Life, `B3/S23`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// `b[n]` is whether a dead cell with `n` living neighbors is born.
    b: [bool; 9],
    /// `s[n]` is whether a living cell with `n` living neighbors survives.
    s: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Numbers greater than 8 are ignored.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut rule = Life {
            b: [false; 9],
            s: [false; 9],
        };
        for n in b.into_iter().filter(|&n| n <= 8) {
            rule.b[n as usize] = true;
        }
        for n in s.into_iter().filter(|&n| n <= 8) {
            rule.s[n as usize] = true;
        }
        rule
    }

    /// The state of a cell in the next generation,
    /// given its current state and the number of its living neighbors.
    ///
    /// A cell which is born becomes [`Newborn`](State::Newborn);
    /// a surviving cell becomes [`Alive`](State::Alive).
    #[inline]
    pub fn transition(&self, state: State, alives: u8) -> State {
        let alives = alives.min(8) as usize;
        if state.is_alive() {
            if self.s[alives] {
                State::Alive
            } else {
                State::Dead
            }
        } else if self.b[alives] {
            State::Newborn
        } else {
            State::Dead
        }
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::new(vec![3], vec![2, 3])
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Life::parse_rule(input).map_err(Error::ParseRuleError)
    }
}

/// Displays the rule in `B/S` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in (0..=8).filter(|&n| self.b[n]) {
            write!(f, "{}", n)?;
        }
        f.write_str("/S")?;
        for n in (0..=8).filter(|&n| self.s[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway() {
        let rule = Life::default();
        for alives in 0..=8 {
            let survives = alives == 2 || alives == 3;
            let expected = if survives { State::Alive } else { State::Dead };
            assert_eq!(rule.transition(State::Alive, alives), expected);
            assert_eq!(rule.transition(State::Newborn, alives), expected);

            let expected = if alives == 3 {
                State::Newborn
            } else {
                State::Dead
            };
            assert_eq!(rule.transition(State::Dead, alives), expected);
        }
    }

    #[test]
    fn parse() -> Result<(), Error> {
        assert_eq!("B3/S23".parse::<Life>()?, Life::default());
        assert_eq!("23/3".parse::<Life>()?, Life::default());
        assert_eq!("B36/S23".parse::<Life>()?.to_string(), "B36/S23");
        assert!("foo".parse::<Life>().is_err());
        Ok(())
    }
}
