use primehit::{Solver, SolverConfig};
use std::error::Error;
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // An optional TOML file configures the solver, the integers are read from stdin.
    let config = match std::env::args().nth(1) {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let numbers = input.split_whitespace()
        .map(|token| token.parse::<i64>())
        .collect::<Result<Vec<i64>, _>>()?;

    let hitting_set = Solver::new(config)?.solve(&numbers)?;
    for p in &hitting_set {
        println!("{}", p);
    }
    Ok(())
}
