use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use befunge93::grid::Grid;
use befunge93::interpreter::Interpreter;
use befunge93::random::RandomDirections;

#[derive(Parser)]
#[command(name = "befunge93", about = "Befunge-93 interpreter")]
struct Cli {
    /// Program file: up to 25 lines of up to 80 columns.
    program: Option<PathBuf>,

    /// Random seed for the `?` instruction.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many steps if the program has not halted.
    #[arg(long)]
    step_limit: Option<usize>,

    /// Print the loaded program grid and exit without running it.
    #[arg(long)]
    dump: bool,

    /// Log loading and halting details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let Some(path) = cli.program.as_deref() else {
        println!("{}", Cli::command().render_usage());
        return;
    };

    let mut grid = match Grid::load(path) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if cli.dump {
        print!("{}", grid.dump());
        return;
    }

    let directions = match cli.seed {
        Some(seed) => RandomDirections::seeded(seed),
        None => RandomDirections::from_entropy(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut interp = Interpreter::new(&mut grid, stdin.lock(), stdout.lock(), directions);

    let result = match cli.step_limit {
        Some(limit) => interp.run_for(limit).map(|_| ()),
        None => interp.run(),
    };

    if let Err(e) = result {
        eprintln!("\nerror: {e}");
        std::process::exit(1);
    }

    if !interp.is_halted() {
        eprintln!("\nstep limit of {} reached without halting", interp.steps());
        std::process::exit(2);
    }
}
