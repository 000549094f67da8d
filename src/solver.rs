use crate::config::SolverConfig;
use crate::coverage;
use crate::decompose::decompose_all;
use crate::error::SolveError;
use crate::observer::{SilentObserver, SolveObserver, TracingObserver};
use crate::reduce::{reduce, Reduction};
use crate::strategy::{self, Strategy};
use crate::{exhaustive, genetic, greedy, random, stochastic};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

/// Entry point for computing a minimum prime hitting set of a list of integers.
///
/// The integers are decomposed into their prime factors, the resulting set system is reduced,
/// and, unless the forced elements of the reduction already hit everything, the chosen strategy
/// is run on the rest. Its result is glued together with the forced elements.
///
/// Every solve draws from a fresh random source. Seeding it through
/// [`SolverConfig::random_seed`] makes every strategy reproducible, also across repeated calls
/// on one solver.
pub struct Solver {
    config: SolverConfig,
    observer: Box<dyn SolveObserver>,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Result<Solver, SolveError> {
        config.validate()?;
        let observer: Box<dyn SolveObserver> = if config.verbose {
            Box::new(TracingObserver)
        } else {
            Box::new(SilentObserver)
        };
        Ok(Solver { config, observer })
    }

    pub fn with_observer(mut self, observer: impl SolveObserver + 'static) -> Solver {
        self.observer = Box::new(observer);
        self
    }

    /// Solves with the strategy named in the configuration.
    ///
    /// An unknown name fails with [`SolveError::UnknownStrategy`], unless `best_effort` is set,
    /// in which case the forced elements of the reduction are returned.
    pub fn solve(&mut self, numbers: &[i64]) -> Result<BTreeSet<u64>, SolveError> {
        let name = self.config.strategy.clone();
        match name.parse::<Strategy>() {
            Ok(strategy) => self.solve_with(numbers, strategy),
            Err(SolveError::UnknownStrategy(_)) if self.config.best_effort => {
                let reduction = reduce(&decompose_all(numbers));
                self.observer.fell_back(&name, &reduction.forced);
                Ok(reduction.forced)
            }
            Err(e) => Err(e),
        }
    }

    pub fn solve_with(&mut self, numbers: &[i64], strategy: Strategy) -> Result<BTreeSet<u64>, SolveError> {
        self.observer.solve_started(strategy, numbers.len());
        let reduction = reduce(&decompose_all(numbers));
        self.observer.reduced(&reduction.forced, reduction.remaining.len());
        if reduction.is_solved() && strategy != Strategy::SelfSolve {
            self.observer.solved_by_reduction(&reduction.forced);
            return Ok(reduction.forced);
        }
        let solution = self.run(strategy, &reduction)?;
        let unhit = coverage::unhit(&reduction.remaining, &solution).len();
        if unhit > 0 {
            self.observer.left_unhit(strategy, unhit);
        }
        self.observer.strategy_completed(strategy, &solution);
        Ok(solution)
    }

    /// Runs `strategy` on a reduced instance and returns its result united with the forced elements.
    pub fn run(&self, strategy: Strategy, reduction: &Reduction) -> Result<BTreeSet<u64>, SolveError> {
        let Reduction { forced, remaining } = reduction;
        let config = &self.config;
        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut solution = match strategy {
            Strategy::Exhaustive      => exhaustive::solve(remaining, forced, config.exhaustive_limit)?,
            Strategy::Greedy          => greedy::solve(remaining, forced),
            Strategy::Stochastic      => stochastic::solve(remaining, forced, config.stall_rejections, &mut rng),
            Strategy::MultiStochastic => stochastic::multi_start(remaining, forced, config.multi_start_runs, config.stall_rejections, &mut rng),
            Strategy::Random          => random::solve(remaining, forced, &mut rng),
            Strategy::Genetic         => genetic::solve(remaining, forced, &config.genetic, &mut rng),
            Strategy::SelfSolve       => strategy::self_solve(remaining, forced),
        };
        solution.extend(forced);
        Ok(solution)
    }
}

/// Computes a hitting set of the prime decompositions of `numbers` with the strategy called
/// `strategy`.
///
/// `verbose` toggles progress reports through `tracing`; `rng_seed` makes the randomized
/// strategies reproducible.
pub fn minimum_prime_hitting_set(
    numbers: &[i64],
    strategy: &str,
    verbose: bool,
    rng_seed: Option<u64>,
) -> Result<BTreeSet<u64>, SolveError> {
    let mut config = SolverConfig::new()
        .with_strategy(strategy)
        .with_verbose(verbose);
    config.random_seed = rng_seed;
    Solver::new(config)?.solve(numbers)
}
