use crate::coverage::{self, Universe};
use crate::decompose::Decomposition;
use bit_set::BitSet;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Stochastic descent from the union of all elements, joined with `forced`.
///
/// Repeatedly a member of the candidate is drawn with probability proportional to the number of
/// decompositions it occurs in and removed, unless the candidate would stop being a hitting set.
/// The descent ends when a single element is left or after `stall_rejections` removals in a row
/// were rejected.
pub fn solve<R: Rng + ?Sized>(
    remaining: &[Decomposition],
    forced: &BTreeSet<u64>,
    stall_rejections: usize,
    rng: &mut R,
) -> BTreeSet<u64> {
    let universe = Universe::new(&coverage::unhit(remaining, forced));
    universe.to_primes(&descent(&universe, stall_rejections, rng), forced)
}

/// Runs `runs` independent descents and keeps the first smallest result.
pub fn multi_start<R: Rng + ?Sized>(
    remaining: &[Decomposition],
    forced: &BTreeSet<u64>,
    runs: usize,
    stall_rejections: usize,
    rng: &mut R,
) -> BTreeSet<u64> {
    let universe = Universe::new(&coverage::unhit(remaining, forced));
    let mut best: Option<BitSet> = None;
    // TODO: the runs are independent and could be spread over threads with one seeded rng each.
    for run in 0..runs {
        let hs = descent(&universe, stall_rejections, rng);
        debug!(run, size = hs.len(), "descent finished");
        if best.as_ref().map_or(true, |b| hs.len() < b.len()) {
            best = Some(hs);
        }
    }
    let best = best.unwrap_or_else(|| universe.full());
    universe.to_primes(&best, forced)
}

/// One descent on the dense set system, starting from the full element set.
pub fn descent<R: Rng + ?Sized>(universe: &Universe, stall_rejections: usize, rng: &mut R) -> BitSet {
    let mut hs = universe.full();
    let mut rejections = 0;
    while hs.len() > 1 && rejections < stall_rejections {
        let members: Vec<usize> = hs.iter().collect();
        let weights = members.iter().map(|e| universe.count(*e));
        let dist = match WeightedIndex::new(weights) {
            Ok(dist) => dist,
            Err(_) => break, // only elements of no set are left
        };
        let e = members[dist.sample(rng)];
        hs.remove(e);
        if universe.is_hitting(&hs) {
            rejections = 0;
        } else {
            hs.insert(e);
            rejections += 1;
        }
        trace!(size = hs.len(), rejections, "descent step");
    }
    hs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sets(v: &[&[u64]]) -> Vec<Decomposition> {
        v.iter().map(|d| d.iter().cloned().collect()).collect()
    }

    fn primes(v: &[u64]) -> BTreeSet<u64> {
        v.iter().cloned().collect()
    }

    fn instance() -> Vec<Decomposition> {
        sets(&[&[2, 3], &[3, 5], &[5, 7], &[7, 11], &[11, 2], &[13, 2, 5], &[17, 19], &[19, 23, 3]])
    }

    #[test]
    fn descent_is_feasible() {
        let remaining = instance();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let hs = solve(&remaining, &primes(&[29]), 5, &mut rng);
            assert!(hs.contains(&29));
            assert!(coverage::is_hitting_set(&remaining, &hs));
        }
    }

    #[test]
    fn descent_stops_at_single_element() {
        // 3 is in every decomposition, the descent may shrink down to it but never below
        let remaining = sets(&[&[3, 5], &[3, 7], &[3, 11]]);
        let mut rng = StdRng::seed_from_u64(1);
        let hs = solve(&remaining, &BTreeSet::new(), 1_000, &mut rng);
        assert!(coverage::is_hitting_set(&remaining, &hs));
        assert!(!hs.is_empty());
    }

    #[test]
    fn same_seed_same_result() {
        let remaining = instance();
        let a = solve(&remaining, &BTreeSet::new(), 5, &mut StdRng::seed_from_u64(42));
        let b = solve(&remaining, &BTreeSet::new(), 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn multi_start_not_worse_than_its_runs() {
        let remaining = instance();
        let multi = multi_start(&remaining, &BTreeSet::new(), 5, 5, &mut StdRng::seed_from_u64(7));
        let mut rng = StdRng::seed_from_u64(7);
        let universe = Universe::new(&remaining);
        let smallest = (0..5).map(|_| descent(&universe, 5, &mut rng).len()).min().unwrap();
        assert_eq!(multi.len(), smallest);
        assert!(coverage::is_hitting_set(&remaining, &multi));
    }

    #[test]
    fn empty_instance() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(solve(&[], &primes(&[2]), 5, &mut rng), primes(&[2]));
        assert_eq!(multi_start(&[], &primes(&[2]), 5, 5, &mut rng), primes(&[2]));
    }
}
