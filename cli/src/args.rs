//! Parsing command-line arguments.
//!
//! Malformed sizes, generation counts and densities are not fatal:
//! they are replaced with default values, and a warning is logged.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Error};
use log::warn;
use torlife_lib::{rules::Life, Config, Coord, World};

/// Default width of the world.
const DEFAULT_WIDTH: u64 = 20;
/// Default height of the world.
const DEFAULT_HEIGHT: u64 = 20;
/// Default number of generations to evolve.
const DEFAULT_GENERATIONS: u64 = 1;
/// Default density of the initial grid.
const DEFAULT_DENSITY: f64 = 0.25;

/// Reads a positive integer.
///
/// A missing value gives `default` silently. A value which is not
/// a positive integer gives `default` with a warning.
pub(crate) fn positive_or_default(name: &str, value: Option<&str>, default: u64) -> u64 {
    let value = match value {
        Some(value) => value,
        None => return default,
    };
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => n as u64,
        _ => {
            warn!(
                "The {} must be a positive integer, got {:?}. Using the default value {}.",
                name, value, default
            );
            default
        }
    }
}

/// Reads a probability between `0` and `1`.
///
/// A missing value gives [`DEFAULT_DENSITY`] silently. Anything else
/// which is not a number between `0` and `1` gives [`DEFAULT_DENSITY`]
/// with a warning.
pub(crate) fn density_or_default(value: Option<&str>) -> f64 {
    let value = match value {
        Some(value) => value,
        None => return DEFAULT_DENSITY,
    };
    match value.trim().parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => p,
        _ => {
            warn!(
                "The density must be a number between 0 and 1, got {:?}. Using the default value {}.",
                value, DEFAULT_DENSITY
            );
            DEFAULT_DENSITY
        }
    }
}

/// Reads coordinates of the form `X,Y`.
fn coord(s: &str) -> Option<Coord> {
    let (x, y) = s.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Reads an edit of the form `X,Y,STATE`.
///
/// The state is kept as a string and checked when the edit is applied.
fn edit(s: &str) -> Option<(Coord, String)> {
    let (xy, state) = s.rsplit_once(',')?;
    Some((coord(xy)?, state.trim().to_string()))
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    matches.get_one::<String>(name).map(String::as_str)
}

/// Creates the world, falling back to the default size with a warning
/// if the requested grid is too large.
fn world_or_default(config: Config) -> Result<World, torlife_lib::Error> {
    match config.world() {
        Err(e @ torlife_lib::Error::SizeError(..)) => {
            warn!(
                "{} Using the default size {}x{}.",
                e, DEFAULT_WIDTH, DEFAULT_HEIGHT
            );
            Config {
                width: DEFAULT_WIDTH as usize,
                height: DEFAULT_HEIGHT as usize,
                ..config
            }
            .world()
        }
        result => result,
    }
}

fn parse_rule(s: &str) -> Result<String, String> {
    s.parse::<Life>()
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: World,
    pub(crate) generations: u64,
    pub(crate) edits: Vec<(Coord, String)>,
    pub(crate) toggles: Vec<Coord>,
    pub(crate) preview: Option<u64>,
    pub(crate) quiet: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let matches = command!()
            .long_about(
                "Conway's Game of Life on a torus\n\
                 \n\
                 The grid wraps around at every edge. The initial grid is random; \
                 cells can be edited or toggled before it evolves.\n\
                 \n\
                 The grid is displayed in plain text.\n\
                 * Dead cells are represented by `.`;\n\
                 * Living cells are represented by `o`;\n\
                 * Cells born in the last generation are represented by `+`.\n",
            )
            .arg(
                Arg::new("X")
                    .allow_negative_numbers(true)
                    .help("Width of the world [default: 20]")
                    .index(1),
            )
            .arg(
                Arg::new("Y")
                    .allow_negative_numbers(true)
                    .help("Height of the world [default: 20]")
                    .index(2),
            )
            .arg(
                Arg::new("GEN")
                    .allow_negative_numbers(true)
                    .help("Number of generations to evolve [default: 1]")
                    .index(3),
            )
            .arg(
                Arg::new("DENSITY")
                    .allow_negative_numbers(true)
                    .help("Probability that a cell is alive in the initial grid [default: 0.25]")
                    .short('d')
                    .long("density"),
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule of the cellular automaton")
                    .long_help(
                        "Rule of the cellular automaton\n\
                         Supports totalistic Life-like rules.\n",
                    )
                    .short('r')
                    .long("rule")
                    .default_value("B3/S23")
                    .value_parser(parse_rule),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random number generator")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("EDIT")
                    .help("Sets the state of a cell before evolving")
                    .long_help(
                        "Sets the state of a cell before evolving\n\
                         The state is one of `dead`, `alive` and `new`. \
                         Coordinates outside the world wrap around.\n",
                    )
                    .short('e')
                    .long("edit")
                    .value_name("X,Y,STATE")
                    .allow_hyphen_values(true)
                    .action(ArgAction::Append),
            )
            .arg(
                Arg::new("TOGGLE")
                    .help("Toggles a cell between dead and alive before evolving")
                    .short('t')
                    .long("toggle")
                    .value_name("X,Y")
                    .allow_hyphen_values(true)
                    .action(ArgAction::Append),
            )
            .arg(
                Arg::new("PREVIEW")
                    .help("Evolves a copy of the grid and prints it before the real run")
                    .long_help(
                        "Evolves a copy of the grid and prints it before the real run\n\
                         The grid itself is not changed, but the generation counter \
                         still advances.\n",
                    )
                    .short('p')
                    .long("preview")
                    .value_name("GEN")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("QUIET")
                    .help("Only prints the final grid")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue),
            )
            .try_get_matches()?;

        let width = positive_or_default("width", value(&matches, "X"), DEFAULT_WIDTH);
        let height = positive_or_default("height", value(&matches, "Y"), DEFAULT_HEIGHT);
        let generations = positive_or_default(
            "generation count",
            value(&matches, "GEN"),
            DEFAULT_GENERATIONS,
        );
        let density = density_or_default(value(&matches, "DENSITY"));

        let mut edits = Vec::new();
        for s in matches.get_many::<String>("EDIT").into_iter().flatten() {
            match edit(s) {
                Some(e) => edits.push(e),
                None => warn!("Ignoring malformed edit {:?}, expected X,Y,STATE.", s),
            }
        }
        let mut toggles = Vec::new();
        for s in matches.get_many::<String>("TOGGLE").into_iter().flatten() {
            match coord(s) {
                Some(c) => toggles.push(c),
                None => warn!("Ignoring malformed toggle {:?}, expected X,Y.", s),
            }
        }

        let rule_string = matches
            .get_one::<String>("RULE")
            .map_or("B3/S23", String::as_str);
        let config = Config::new(width as usize, height as usize)
            .set_density(density)
            .set_rule_string(rule_string)
            .set_seed(matches.get_one::<u64>("SEED").copied());
        let world = world_or_default(config)
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, e))?;

        Ok(Args {
            world,
            generations,
            edits,
            toggles,
            preview: matches.get_one::<u64>("PREVIEW").copied(),
            quiet: matches.get_flag("QUIET"),
        })
    }
}
