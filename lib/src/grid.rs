//! The grid of cells.
//!
//! The grid lives on a torus: the left neighbor of column `0` is
//! column `width - 1`, and the same for rows.

use crate::{
    cells::{Coord, LifeCell},
    error::Error,
    rules::Life,
};
use std::fmt::{self, Display, Formatter, Write};

/// Relative positions of the eight neighbors of a cell.
///
/// Listed row by row, from the row above to the row below.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed-size grid of cells with toroidal topology.
///
/// The cells are stored row by row. Both the width and the height
/// are always positive.
///
/// Cloning a grid gives a completely independent copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Box<[LifeCell]>,
}

impl Grid {
    /// Creates a grid of dead cells.
    ///
    /// Returns an error if the width or the height is zero,
    /// or if the cells cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::NonPositiveError);
        }
        let size = width
            .checked_mul(height)
            .filter(|_| width <= isize::MAX as usize && height <= isize::MAX as usize)
            .ok_or(Error::SizeError(width, height))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| Error::SizeError(width, height))?;
        cells.resize(size, LifeCell::default());
        Ok(Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a grid of the same size, whose cells are produced by
    /// applying `f` to the cells of this grid, row by row.
    pub(crate) fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&LifeCell) -> LifeCell,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reduces arbitrary coordinates into the grid.
    #[inline]
    pub fn wrap(&self, (x, y): Coord) -> (usize, usize) {
        (
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Gets the cell at the given coordinates, wrapping around the edges.
    pub fn get(&self, coord: Coord) -> LifeCell {
        let (x, y) = self.wrap(coord);
        self.cells[self.index(x, y)]
    }

    /// Replaces the cell at the given coordinates, wrapping around the edges.
    pub fn set(&mut self, coord: Coord, cell: LifeCell) {
        let (x, y) = self.wrap(coord);
        let index = self.index(x, y);
        self.cells[index] = cell;
    }

    /// Iterates over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[LifeCell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[LifeCell] {
        &self.cells
    }

    /// Positions of the eight neighbors of the cell at `(x, y)`.
    ///
    /// The cell itself is never included. On grids narrower or shorter
    /// than three cells some positions appear more than once.
    pub fn neighbors(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        let (x, y) = (x as isize, y as isize);
        NBHD.map(|(dx, dy)| self.wrap((x + dx, y + dy)))
    }

    /// Number of living neighbors of the cell at `(x, y)`.
    ///
    /// [`Newborn`](crate::State::Newborn) cells count as living.
    /// Every entry of [`neighbors`](Self::neighbors) is counted, so on a
    /// grid narrower or shorter than three cells a cell may count itself,
    /// or the same neighbor more than once.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y)
            .iter()
            .filter(|&&(nx, ny)| self.cells[self.index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Computes the next generation.
    ///
    /// Every new state is computed from `self`, which is never modified,
    /// so the order in which cells are visited does not matter.
    /// Cells whose state changes are tagged with `generation`.
    pub(crate) fn next_gen(&self, rule: &Life, generation: u64) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let cell = self.cells[self.index(x, y)];
                let state = rule.transition(cell.state, self.count_neighbors(x, y));
                if state == cell.state {
                    cell
                } else {
                    LifeCell::new(state, generation)
                }
            })
            .collect::<Vec<_>>();
        Grid {
            width: self.width,
            height: self.height,
            cells: cells.into_boxed_slice(),
        }
    }
}

/// Displays the grid in plain text, one row per line.
///
/// * **Dead** cells are represented by `.`;
/// * **Alive** cells are represented by `o`;
/// * **Newborn** cells are represented by `+`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.symbol())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
