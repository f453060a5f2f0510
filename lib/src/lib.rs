//! A Game of Life simulator on a torus.
//!
//! The grid wraps around at every edge. A [`World`] holds one grid and
//! evolves it one synchronous generation at a time.
//!
//! # Example
//!
//! ```rust
//! use torlife_lib::{Config, State};
//!
//! let mut world = Config::new(8, 8).set_density(0.0).world().unwrap();
//! for y in 1..=3 {
//!     world.edit(2, y, State::Alive).unwrap();
//! }
//! let grid = world.evolve(1);
//! assert_eq!(world.generation(), 1);
//! assert!(grid.get((1, 2)).is_alive());
//! assert!(grid.get((3, 2)).is_alive());
//! ```

mod cells;
mod config;
mod error;
mod grid;
pub mod rules;
mod world;

pub use cells::{Coord, LifeCell, State};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use world::World;
