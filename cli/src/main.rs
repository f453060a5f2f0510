mod args;

use args::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    run(args);
}

fn run(args: Args) {
    let mut world = args.world;

    for ((x, y), state) in &args.edits {
        // The rejection is already logged by the library.
        world.edit(*x, *y, state.as_str()).ok();
    }
    for &(x, y) in &args.toggles {
        world.toggle(x, y);
    }

    if !args.quiet {
        println!("{}", world);
    }

    if let Some(preview) = args.preview {
        let snapshot = world.grid().clone();
        let grid = world.evolve_target(preview, &snapshot);
        if !args.quiet {
            println!(
                "preview after {} generations, population = {}\n{}",
                preview.max(1),
                grid.population(),
                grid
            );
        }
    }

    world.evolve(args.generations);
    print!("{}", world);
}
