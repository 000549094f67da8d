use crate::coverage::{self, Universe};
use crate::decompose::Decomposition;
use bit_set::BitSet;
use rand::seq::index;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

/// Random sampling baseline, joined with `forced`.
///
/// Draws one random subset of the elements per unhit decomposition and returns the smallest
/// draw that is a hitting set. If no draw is, all elements are returned.
pub fn solve<R: Rng + ?Sized>(remaining: &[Decomposition], forced: &BTreeSet<u64>, rng: &mut R) -> BTreeSet<u64> {
    let universe = Universe::new(&coverage::unhit(remaining, forced));
    let mut best: Option<BitSet> = None;
    for _ in 0..universe.num_sets() {
        let hs = random_subset(&universe, rng);
        if universe.is_hitting(&hs) && best.as_ref().map_or(true, |b| hs.len() < b.len()) {
            best = Some(hs);
        }
    }
    let best = match best {
        Some(hs) => hs,
        None => {
            debug!(draws = universe.num_sets(), "no feasible draw, falling back to all elements");
            universe.full()
        }
    };
    universe.to_primes(&best, forced)
}

/// A non-empty subset of the elements: its size is uniform in `1..=len`, its members are
/// distinct and uniform.
pub fn random_subset<R: Rng + ?Sized>(universe: &Universe, rng: &mut R) -> BitSet {
    if universe.is_empty() {
        return BitSet::new();
    }
    let amount = rng.gen_range(1..=universe.len());
    index::sample(rng, universe.len(), amount).into_iter().collect()
}
