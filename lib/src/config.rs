//! World configuration.

use crate::{error::Error, rules::Life, world::World};
use derivative::Derivative;
use rand::{rngs::StdRng, SeedableRng};

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Derivative, PartialEq)]
#[derivative(Default)]
pub struct Config {
    /// Width.
    #[derivative(Default(value = "20"))]
    pub width: usize,

    /// Height.
    #[derivative(Default(value = "20"))]
    pub height: usize,

    /// The probability that a cell is alive in the initial grid.
    ///
    /// Must be between `0` and `1`.
    #[derivative(Default(value = "0.25"))]
    pub density: f64,

    /// The rule string of the cellular automaton.
    #[derivative(Default(value = "String::from(\"B3/S23\")"))]
    pub rule_string: String,

    /// Seed of the random number generator.
    ///
    /// `None` means that the generator is seeded from the operating system,
    /// so every run gives a different initial grid.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the density of the initial grid.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Creates a new world from the configuration,
    /// with a random initial grid.
    ///
    /// Returns an error if the size or the density is out of range,
    /// or the rule string is invalid.
    pub fn world(&self) -> Result<World, Error> {
        let rule = self.rule_string.parse::<Life>()?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        World::new(rule, rng, self.width, self.height, self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = Config::default();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 20);
        assert_eq!(config.density, 0.25);
        assert_eq!(config.rule_string, "B3/S23");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn invalid() {
        assert_eq!(
            Config::new(0, 5).world().err(),
            Some(Error::NonPositiveError)
        );
        assert_eq!(
            Config::new(5, 5).set_density(1.5).world().err(),
            Some(Error::DensityError(1.5))
        );
        assert!(matches!(
            Config::new(5, 5).set_rule_string("foo").world(),
            Err(Error::ParseRuleError(_))
        ));
    }
}
