use std::error::Error;
use torlife_lib::{Config, Coord, Grid, LifeCell, State, World};

/// An empty world with the given living cells.
fn world_with(width: usize, height: usize, alive: &[Coord]) -> Result<World, Box<dyn Error>> {
    let mut world = Config::new(width, height).set_density(0.0).world()?;
    for &(x, y) in alive {
        world.edit(x, y, State::Alive)?;
    }
    Ok(world)
}

#[test]
fn block() -> Result<(), Box<dyn Error>> {
    let mut world = world_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)])?;
    let before = world.grid().clone();
    assert_eq!(world.evolve(5), before);
    assert_eq!(world.generation(), 5);
    assert_eq!(world.population(), 4);
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let mut world = world_with(5, 5, &[(2, 1), (2, 2), (2, 3)])?;
    let grid = world.evolve(1);
    assert_eq!(
        grid.to_string(),
        ".....\n\
         .....\n\
         .+o+.\n\
         .....\n\
         .....\n"
    );
    assert_eq!(grid.get((1, 2)), LifeCell::new(State::Newborn, 1));
    assert_eq!(grid.get((2, 2)), LifeCell::new(State::Alive, 0));

    let grid = world.evolve(1);
    assert_eq!(
        grid.to_string(),
        ".....\n\
         ..+..\n\
         ..o..\n\
         ..+..\n\
         .....\n"
    );
    assert_eq!(grid.get((2, 1)), LifeCell::new(State::Newborn, 2));
    assert_eq!(grid.get((1, 2)), LifeCell::new(State::Dead, 2));
    Ok(())
}

#[test]
fn blinker_across_edges() -> Result<(), Box<dyn Error>> {
    let mut world = world_with(5, 5, &[(-1, 0), (0, 0), (1, 0)])?;
    let grid = world.evolve(1);
    assert_eq!(
        grid.to_string(),
        "o....\n\
         +....\n\
         .....\n\
         .....\n\
         +....\n"
    );
    let grid = world.evolve(1);
    assert!(grid.get((4, 0)).is_alive());
    assert!(grid.get((1, 0)).is_alive());
    assert_eq!(grid.population(), 3);
    Ok(())
}

#[test]
fn neighbor_counts() -> Result<(), Box<dyn Error>> {
    const NBHD: [Coord; 8] = [
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];
    for count in 0..=8 {
        let mut world = world_with(5, 5, &NBHD[..count])?;
        world.edit(2, 2, State::Alive)?;
        let expected = if count == 2 || count == 3 {
            State::Alive
        } else {
            State::Dead
        };
        assert_eq!(world.evolve(1).get((2, 2)).state, expected);

        let mut world = world_with(5, 5, &NBHD[..count])?;
        let cell = world.evolve(1).get((2, 2));
        if count == 3 {
            assert_eq!(cell, LifeCell::new(State::Newborn, 1));
        } else {
            assert_eq!(cell.state, State::Dead);
        }
    }
    Ok(())
}

#[test]
fn zero_generations() -> Result<(), Box<dyn Error>> {
    let config = Config::new(12, 10).set_density(0.4).set_seed(7);
    let mut zero = config.world()?;
    let mut one = config.world()?;
    assert_eq!(zero.grid(), one.grid());
    assert_eq!(zero.evolve(0), one.evolve(1));
    assert_eq!(zero.generation(), 1);
    Ok(())
}

#[test]
fn evolve_target() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(10, 10).set_density(0.5).set_seed(1).world()?;
    let stored = world.grid().clone();

    let mut target = Grid::new(8, 6)?;
    for &coord in &[(3, 2), (3, 3), (3, 4)] {
        target.set(coord, LifeCell::new(State::Alive, 0));
    }

    let first = world.evolve_target(3, &target);
    assert_eq!(world.generation(), 3);
    let second = world.evolve_target(3, &target);
    assert_eq!(world.generation(), 6);

    assert_eq!(first.width(), 8);
    assert_eq!(first.height(), 6);
    assert_eq!(
        first.cells().iter().map(|c| c.state).collect::<Vec<_>>(),
        second.cells().iter().map(|c| c.state).collect::<Vec<_>>()
    );
    assert_eq!(world.grid(), &stored);
    Ok(())
}

#[test]
fn returned_grid_is_a_copy() -> Result<(), Box<dyn Error>> {
    let mut world = world_with(4, 4, &[(1, 1)])?;
    let mut grid = world.evolve(1);
    grid.set((0, 0), LifeCell::new(State::Alive, 0));
    assert_eq!(world.grid().get((0, 0)).state, State::Dead);
    Ok(())
}

#[test]
fn edit_wraps() -> Result<(), Box<dyn Error>> {
    let config = Config::new(7, 5).set_seed(3);
    let mut a = config.world()?;
    let mut b = config.world()?;
    assert_eq!(a.edit(-1, -1, State::Alive)?, b.edit(6, 4, State::Alive)?);
    assert_eq!(a.edit(7, 10, "dead")?, b.edit(0, 0, 0u8)?);
    Ok(())
}

#[test]
fn edit_invalid_state() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(5, 5).set_seed(11).world()?;
    let before = world.grid().clone();
    assert_eq!(
        world.edit(1, 1, "zombie"),
        Err(torlife_lib::Error::InvalidCellState(String::from("zombie")))
    );
    assert_eq!(
        world.edit(1, 1, 3u8),
        Err(torlife_lib::Error::InvalidCellState(String::from("3")))
    );
    assert_eq!(world.grid(), &before);
    Ok(())
}

#[test]
fn edit_tags_generation() -> Result<(), Box<dyn Error>> {
    let mut world = world_with(5, 5, &[])?;
    world.evolve(4);
    let grid = world.edit(2, 3, "new")?;
    assert_eq!(grid.get((2, 3)), LifeCell::new(State::Newborn, 4));
    Ok(())
}

#[test]
fn toggle() -> Result<(), Box<dyn Error>> {
    let mut world = world_with(5, 4, &[(1, 1)])?;
    world.evolve(2);

    let grid = world.toggle(-1, 0);
    assert_eq!(grid.get((4, 0)), LifeCell::new(State::Newborn, 2));
    let grid = world.toggle(4, 0);
    assert_eq!(grid.get((4, 0)), LifeCell::new(State::Dead, 2));

    world.edit(0, 0, State::Alive)?;
    assert_eq!(world.toggle(5, 4).get((0, 0)).state, State::Dead);
    Ok(())
}

#[test]
fn initialize() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(4, 4).set_seed(5).world()?;
    world.evolve(3);

    let grid = world.initialize(9, 6, 1.0)?;
    assert_eq!((world.width(), world.height()), (9, 6));
    assert_eq!(world.density(), 1.0);
    assert_eq!(world.generation(), 0);
    assert!(grid
        .cells()
        .iter()
        .all(|&cell| cell == LifeCell::new(State::Newborn, 0)));

    let grid = world.initialize(3, 8, 0.0)?;
    assert_eq!(grid.rows().count(), 8);
    assert!(grid.rows().all(|row| row.len() == 3));
    assert_eq!(grid.population(), 0);

    assert!(world.initialize(0, 8, 0.5).is_err());
    assert!(world.initialize(3, 8, f64::NAN).is_err());
    assert_eq!((world.width(), world.height()), (3, 8));
    Ok(())
}

#[test]
fn half_density() -> Result<(), Box<dyn Error>> {
    for seed in 0..4 {
        let world = Config::new(100, 100)
            .set_density(0.5)
            .set_seed(seed)
            .world()?;
        let population = world.population();
        assert!(
            (4500..=5500).contains(&population),
            "seed {}: population {}",
            seed,
            population
        );
        assert!(world
            .grid()
            .cells()
            .iter()
            .filter(|cell| cell.is_alive())
            .all(|&cell| cell == LifeCell::new(State::Newborn, 0)));
    }
    Ok(())
}

#[test]
fn too_large() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        Config::new(usize::MAX, usize::MAX).world().err(),
        Some(torlife_lib::Error::SizeError(usize::MAX, usize::MAX))
    );

    let mut world = world_with(4, 3, &[(1, 1)])?;
    let before = world.grid().clone();
    assert!(world.initialize(usize::MAX, 2, 0.5).is_err());
    assert_eq!((world.width(), world.height()), (4, 3));
    assert_eq!(world.grid(), &before);
    Ok(())
}

#[test]
fn restart() -> Result<(), Box<dyn Error>> {
    let config = Config::new(20, 20).set_density(0.5).set_seed(42);
    let mut world = config.world()?;
    assert_eq!(world.grid(), config.world()?.grid());

    let first = world.grid().clone();
    world.evolve(2);
    let grid = world.restart();
    assert_eq!(world.generation(), 0);
    assert_eq!((grid.width(), grid.height()), (20, 20));
    assert_ne!(grid, first);
    Ok(())
}

#[test]
fn other_rule() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(5, 5)
        .set_density(0.0)
        .set_rule_string("B2/S")
        .world()?;
    world.edit(1, 2, State::Alive)?;
    world.edit(3, 2, State::Alive)?;
    let grid = world.evolve(1);
    assert_eq!(grid.get((2, 1)).state, State::Newborn);
    assert_eq!(grid.get((2, 3)).state, State::Newborn);
    assert_eq!(grid.get((1, 2)).state, State::Dead);
    assert_eq!(world.rule().to_string(), "B2/S");
    Ok(())
}

#[test]
fn display() -> Result<(), Box<dyn Error>> {
    let world = world_with(3, 2, &[(0, 0), (2, 1)])?;
    assert_eq!(
        world.to_string(),
        "generation = 0, population = 2, rule = B3/S23\n\
         o..\n\
         ..o\n"
    );
    Ok(())
}
