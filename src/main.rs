use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use wordgrid::{PuzzleSolver, SolverConfig};

/// Usage: wordgrid [config.json] [grid_size]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = match args.first() {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };
    if let Some(size) = args.get(1) {
        config.grid_size = size
            .parse()
            .with_context(|| format!("grid size must be a number, got {:?}", size))?;
    }

    info!("Start...");
    let mut solver = PuzzleSolver::from_config(config)?;
    let outcome = solver.run()?;

    let solution = &outcome.solution;
    println!("{} by {} grid", outcome.grid.size(), outcome.grid.size());
    print!("{}", outcome.grid);
    println!(
        "The number of possible combinations is: {}. The number of unique combinations is: {}.",
        solution.total_candidates, solution.distinct_candidates
    );
    if let (Some(shortest), Some(longest)) = (solution.shortest(), solution.longest()) {
        println!("The number of words in the solution is: {}.", solution.count());
        println!("The shortest word in the solution is: {}.", shortest);
        println!("The longest word in the solution is: {}.", longest);
    }
    println!("The possible words in this grid are {:?}", solution.words);
    println!("Solved in {:.3} ms", outcome.elapsed.as_secs_f64() * 1000.0);
    info!("...Complete");
    Ok(())
}
