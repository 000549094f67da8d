use crate::strategy::Strategy;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Receives the lifecycle events of a solve. Observers never influence the result.
pub trait SolveObserver {
    fn solve_started(&mut self, _strategy: Strategy, _numbers: usize) {}

    /// The reduction is done; `remaining` decompositions are left for the strategy.
    fn reduced(&mut self, _forced: &BTreeSet<u64>, _remaining: usize) {}

    /// The forced elements alone hit every decomposition.
    fn solved_by_reduction(&mut self, _solution: &BTreeSet<u64>) {}

    fn strategy_completed(&mut self, _strategy: Strategy, _solution: &BTreeSet<u64>) {}

    /// The strategy returned a set missing `unhit` of the decompositions left by the reduction.
    /// Only self-solve does this, on instances the reduction did not solve.
    fn left_unhit(&mut self, _strategy: Strategy, _unhit: usize) {}

    /// An unknown strategy was requested in best-effort mode.
    fn fell_back(&mut self, _name: &str, _partial: &BTreeSet<u64>) {}
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentObserver;

impl SolveObserver for SilentObserver {}

/// Reports every event through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SolveObserver for TracingObserver {
    fn solve_started(&mut self, strategy: Strategy, numbers: usize) {
        info!(event = "solve_start", strategy = %strategy, numbers);
    }

    fn reduced(&mut self, forced: &BTreeSet<u64>, remaining: usize) {
        info!(event = "reduced", forced = ?forced, remaining);
    }

    fn solved_by_reduction(&mut self, solution: &BTreeSet<u64>) {
        info!(event = "solved_by_reduction", solution = ?solution, size = solution.len());
    }

    fn strategy_completed(&mut self, strategy: Strategy, solution: &BTreeSet<u64>) {
        info!(event = "strategy_end", strategy = %strategy, exact = strategy.is_exact(), solution = ?solution, size = solution.len());
    }

    fn left_unhit(&mut self, strategy: Strategy, unhit: usize) {
        warn!(event = "left_unhit", strategy = %strategy, unhit, "result does not hit every decomposition");
    }

    fn fell_back(&mut self, name: &str, partial: &BTreeSet<u64>) {
        warn!(event = "best_effort", strategy = name, partial = ?partial, "unknown strategy, returning forced elements");
    }
}
