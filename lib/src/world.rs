//! The world.

use crate::{
    cells::{LifeCell, State},
    error::Error,
    grid::Grid,
    rules::Life,
};
use log::{debug, trace, warn};
use rand::{rngs::StdRng, Rng};
use std::fmt::{self, Display, Formatter};

/// The world.
///
/// It owns the current grid, the generation counter, the rule,
/// and the random number generator used to fill the initial grid.
///
/// Every operation that returns a [`Grid`] returns a copy,
/// so modifying it never affects the world.
#[derive(Clone, Debug)]
pub struct World {
    /// Width of the grid used by [`restart`](Self::restart).
    width: usize,

    /// Height of the grid used by [`restart`](Self::restart).
    height: usize,

    /// The probability that a cell is alive in a freshly initialized grid.
    density: f64,

    /// Number of generations evolved since the last initialization.
    ///
    /// It also counts the generations of grids evolved by
    /// [`evolve_target`](Self::evolve_target).
    generation: u64,

    /// The current grid.
    grid: Grid,

    /// The rule of the cellular automaton.
    rule: Life,

    rng: StdRng,
}

fn check_density(density: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(Error::DensityError(density))
    }
}

impl World {
    /// Creates a new world with a random grid.
    pub(crate) fn new(
        rule: Life,
        rng: StdRng,
        width: usize,
        height: usize,
        density: f64,
    ) -> Result<Self, Error> {
        check_density(density)?;
        let mut world = World {
            width,
            height,
            density,
            generation: 0,
            grid: Grid::new(width, height)?,
            rule,
            rng,
        };
        world.restart();
        Ok(world)
    }

    /// Replaces the grid with a new random grid of the given size.
    ///
    /// Each cell is independently [`Newborn`](State::Newborn) with
    /// probability `density`, and [`Dead`](State::Dead) otherwise.
    /// The generation counter is reset to `0`.
    ///
    /// Returns an error and leaves the world unchanged if the width
    /// or the height is zero, the grid is too large to allocate,
    /// or the density is not between `0` and `1`.
    pub fn initialize(&mut self, width: usize, height: usize, density: f64) -> Result<Grid, Error> {
        check_density(density)?;
        self.grid = Grid::new(width, height)?;
        self.width = width;
        self.height = height;
        self.density = density;
        Ok(self.restart())
    }

    /// Fills the grid with random cells again, using the stored size
    /// and density, and resets the generation counter to `0`.
    pub fn restart(&mut self) -> Grid {
        let density = self.density;
        let rng = &mut self.rng;
        self.grid = self.grid.map(|_| {
            if rng.gen::<f64>() < density {
                LifeCell::new(State::Newborn, 0)
            } else {
                LifeCell::new(State::Dead, 0)
            }
        });
        self.generation = 0;
        debug!(
            "Initialized a {}x{} world with density {}, population {}",
            self.width,
            self.height,
            self.density,
            self.grid.population()
        );
        self.grid.clone()
    }

    /// Evolves `start` by `generations` generations, advancing `generation`
    /// once per generation.
    ///
    /// Zero generations are treated as one.
    fn run(rule: &Life, generation: &mut u64, start: &Grid, generations: u64) -> Grid {
        *generation += 1;
        let mut grid = start.next_gen(rule, *generation);
        trace!("Generation {}: population {}", generation, grid.population());
        for _ in 1..generations {
            *generation += 1;
            grid = grid.next_gen(rule, *generation);
            trace!("Generation {}: population {}", generation, grid.population());
        }
        grid
    }

    /// Evolves the grid of the world by `generations` generations,
    /// and keeps the result.
    ///
    /// Zero generations are treated as one.
    pub fn evolve(&mut self, generations: u64) -> Grid {
        self.grid = Self::run(&self.rule, &mut self.generation, &self.grid, generations);
        self.grid.clone()
    }

    /// Evolves `target` instead of the grid of the world,
    /// by `generations` generations.
    ///
    /// The grid of the world is left untouched,
    /// but the generation counter still advances.
    ///
    /// Zero generations are treated as one.
    pub fn evolve_target(&mut self, generations: u64, target: &Grid) -> Grid {
        Self::run(&self.rule, &mut self.generation, target, generations)
    }

    /// Sets the state of the cell at `(x, y)`, and tags it with the
    /// current generation.
    ///
    /// Coordinates outside the grid wrap around.
    ///
    /// The state can be given as a [`State`], a string like `"alive"`,
    /// or a number (`0` for dead, `1` for alive, `2` for newborn).
    /// Returns an error and leaves the grid unchanged if the state is invalid.
    pub fn edit<S>(&mut self, x: isize, y: isize, state: S) -> Result<Grid, Error>
    where
        S: TryInto<State>,
        Error: From<S::Error>,
    {
        let state = state.try_into().map_err(|e| {
            let e = Error::from(e);
            warn!("Cannot edit the cell at {:?}: {}", (x, y), e);
            e
        })?;
        self.grid.set((x, y), LifeCell::new(state, self.generation));
        Ok(self.grid.clone())
    }

    /// Flips the cell at `(x, y)` between dead and newborn,
    /// and tags it with the current generation.
    ///
    /// Coordinates outside the grid wrap around.
    pub fn toggle(&mut self, x: isize, y: isize) -> Grid {
        let state = !self.grid.get((x, y)).state;
        self.grid.set((x, y), LifeCell::new(state, self.generation));
        self.grid.clone()
    }

    /// Width of the world.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the world.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The probability that a cell is alive in a freshly initialized grid.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Number of generations evolved since the last initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The rule of the cellular automaton.
    pub fn rule(&self) -> &Life {
        &self.rule
    }

    /// Number of living cells in the current grid.
    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

/// Displays the current grid, after a header line with the generation,
/// the population and the rule.
impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "generation = {}, population = {}, rule = {}",
            self.generation,
            self.population(),
            self.rule
        )?;
        write!(f, "{}", self.grid)
    }
}
