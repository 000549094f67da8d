use primehit::coverage;
use primehit::decompose::decompose_all;
use primehit::exhaustive;
use primehit::reduce::reduce;
use primehit::{minimum_prime_hitting_set, SolveError, Solver, SolverConfig, Strategy};
use std::collections::BTreeSet;

const EXAMPLE: [i64; 9] = [2, 3, 5, 10, 25, 15, 9, 4, 38];

// Products of two distinct primes out of a small pool; the reduction leaves a lot to search.
const HARD: [i64; 12] = [6, 15, 35, 77, 143, 221, 323, 437, 46, 58, 87, 145];

fn primes(v: &[u64]) -> BTreeSet<u64> {
    v.iter().cloned().collect()
}

fn solver(strategy: Strategy, seed: u64) -> Solver {
    let config = SolverConfig::new()
        .with_strategy(strategy.name())
        .with_verbose(false)
        .with_random_seed(seed);
    Solver::new(config).unwrap()
}

#[test]
fn example_is_solved_by_every_strategy() {
    for strategy in Strategy::ALL {
        let hs = solver(strategy, 0).solve(&EXAMPLE).unwrap();
        assert_eq!(hs, primes(&[2, 3, 5]), "strategy {}", strategy);
    }
}

#[test]
fn exhaustive_end_to_end() {
    let hs = minimum_prime_hitting_set(&EXAMPLE, "exhaustive", true, None).unwrap();
    assert_eq!(hs.len(), 3);
    assert_eq!(hs, primes(&[2, 3, 5]));
}

#[test]
fn every_real_strategy_hits_everything() {
    let decompositions = decompose_all(&HARD);
    for strategy in Strategy::ALL.iter().cloned().filter(|s| *s != Strategy::SelfSolve) {
        for seed in 0..5 {
            let hs = solver(strategy, seed).solve(&HARD).unwrap();
            assert!(coverage::is_hitting_set(&decompositions, &hs), "strategy {} seed {}", strategy, seed);
        }
    }
}

#[test]
fn exhaustive_is_never_beaten() {
    let optimum = solver(Strategy::Exhaustive, 0).solve(&HARD).unwrap().len();
    let reduction = reduce(&decompose_all(&HARD));
    let minima = exhaustive::all_minimum(&reduction.remaining, &reduction.forced, u64::MAX).unwrap();
    assert!(minima.iter().all(|hs| hs.len() == optimum));
    for strategy in Strategy::ALL.iter().cloned().filter(|s| *s != Strategy::SelfSolve) {
        let hs = solver(strategy, 17).solve(&HARD).unwrap();
        assert!(hs.len() >= optimum, "strategy {}", strategy);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    for strategy in Strategy::ALL.iter().cloned().filter(|s| s.is_randomized()) {
        let a = solver(strategy, 99).solve(&HARD).unwrap();
        let b = solver(strategy, 99).solve(&HARD).unwrap();
        assert_eq!(a, b, "strategy {}", strategy);
    }
}

#[test]
fn empty_and_degenerate_input() {
    for strategy in Strategy::ALL {
        assert!(solver(strategy, 0).solve(&[]).unwrap().is_empty());
        assert!(solver(strategy, 0).solve(&[0, 1, -1, 1]).unwrap().is_empty());
    }
}

#[test]
fn signs_are_ignored() {
    let positive = solver(Strategy::Exhaustive, 0).solve(&HARD).unwrap();
    let negated: Vec<i64> = HARD.iter().map(|n| -n).collect();
    let negative = solver(Strategy::Exhaustive, 0).solve(&negated).unwrap();
    assert_eq!(positive, negative);
}

#[test]
fn unknown_strategy_is_an_error() {
    match minimum_prime_hitting_set(&EXAMPLE, "tabu", false, None) {
        Err(SolveError::UnknownStrategy(name)) => assert_eq!(name, "tabu"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn best_effort_returns_partial_solution() {
    let config = SolverConfig::new()
        .with_strategy("tabu")
        .with_verbose(false)
        .with_best_effort(true);
    // {2} is forced, the triangle {3, 5}, {5, 7}, {3, 7} is left unhit
    let hs = Solver::new(config).unwrap().solve(&[4, 15, 35, 21]).unwrap();
    assert_eq!(hs, primes(&[2]));
}

#[test]
fn exhaustive_guard() {
    let config = SolverConfig::new()
        .with_strategy("exhaustive")
        .with_verbose(false)
        .with_exhaustive_limit(10);
    let err = Solver::new(config).unwrap().solve(&HARD).unwrap_err();
    assert!(matches!(err, SolveError::SearchSpaceTooLarge { limit: 10, .. }));
    assert!(err.to_string().contains("exceeds the limit of 10"));
}

#[test]
fn config_from_toml_drives_solver() {
    let config = SolverConfig::from_toml_str(r#"
        strategy = "genetic"
        random_seed = 5
        verbose = false

        [genetic]
        population_size = 20
    "#).unwrap();
    let mut solver = Solver::new(config).unwrap();
    let hs = solver.solve(&HARD).unwrap();
    assert!(coverage::is_hitting_set(&decompose_all(&HARD), &hs));
}
