use crate::coverage::{self, Universe};
use crate::decompose::Decomposition;
use crate::error::SolveError;
use bit_set::BitSet;
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::debug;

/// Returns a *minimum* hitting set of `remaining`, joined with `forced`.
///
/// Decompositions already hit by `forced` are ignored.
///
/// Every combination picking one element per decomposition is a hitting set, and every minimal
/// hitting set arises this way, so enumerating the Cartesian product of the decompositions finds
/// a minimum one. The first smallest combination in enumeration order wins.
///
/// The number of combinations is the product of the decomposition sizes; if it exceeds `limit`
/// the search is refused with [`SolveError::SearchSpaceTooLarge`].
pub fn solve(remaining: &[Decomposition], forced: &BTreeSet<u64>, limit: u64) -> Result<BTreeSet<u64>, SolveError> {
    let remaining = coverage::unhit(remaining, forced);
    let size = check_search_space(&remaining, limit)?;
    let universe = Universe::new(&remaining);
    let mut best: Option<BitSet> = None;
    for_each_combination(&universe, |hs| {
        if best.as_ref().map_or(true, |b| hs.len() < b.len()) {
            best = Some(hs);
        }
    });
    let best = best.unwrap_or_default();
    debug!(combinations = size, size = best.len(), "exhaustive search done");
    Ok(universe.to_primes(&best, forced))
}

/// Returns all distinct minimum hitting sets of `remaining`, each joined with `forced`, in
/// increasing order.
pub fn all_minimum(remaining: &[Decomposition], forced: &BTreeSet<u64>, limit: u64) -> Result<Vec<BTreeSet<u64>>, SolveError> {
    let remaining = coverage::unhit(remaining, forced);
    check_search_space(&remaining, limit)?;
    let universe = Universe::new(&remaining);
    let mut min_size = usize::MAX;
    let mut minima: BTreeSet<BTreeSet<u64>> = BTreeSet::new();
    for_each_combination(&universe, |hs| {
        if hs.len() < min_size {
            min_size = hs.len();
            minima.clear();
        }
        if hs.len() == min_size {
            minima.insert(universe.to_primes(&hs, forced));
        }
    });
    if minima.is_empty() {
        minima.insert(forced.clone());
    }
    Ok(minima.into_iter().collect())
}

/// Number of combinations the enumeration visits, saturating at `u64::MAX`.
pub fn search_space(remaining: &[Decomposition]) -> u64 {
    remaining.iter()
        .fold(1u64, |acc, d| acc.saturating_mul(d.len() as u64))
}

fn check_search_space(remaining: &[Decomposition], limit: u64) -> Result<u64, SolveError> {
    let size = search_space(remaining);
    if size > limit {
        return Err(SolveError::SearchSpaceTooLarge { size, limit });
    }
    Ok(size)
}

/// Calls `f` with the set of elements of every combination; an empty system has the single
/// empty combination.
fn for_each_combination(universe: &Universe, mut f: impl FnMut(BitSet)) {
    if universe.num_sets() == 0 {
        f(BitSet::new());
        return;
    }
    (0..universe.num_sets())
        .map(|i| universe.members(i).iter().cloned())
        .multi_cartesian_product()
        .for_each(|combination| f(combination.into_iter().collect()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(v: &[&[u64]]) -> Vec<Decomposition> {
        v.iter().map(|d| d.iter().cloned().collect()).collect()
    }

    fn primes(v: &[u64]) -> BTreeSet<u64> {
        v.iter().cloned().collect()
    }

    #[test]
    fn finds_minimum() {
        let remaining = sets(&[&[2, 3, 13], &[27, 2, 3], &[11], &[2, 5]]);
        let hs = solve(&remaining, &primes(&[11]), u64::MAX).unwrap();
        assert_eq!(hs, primes(&[2, 11]));
    }

    #[test]
    fn five_cycle_needs_three() {
        let remaining = sets(&[&[2, 3], &[3, 5], &[5, 7], &[7, 11], &[11, 2]]);
        let hs = solve(&remaining, &BTreeSet::new(), u64::MAX).unwrap();
        assert_eq!(hs.len(), 3);
        assert!(coverage::is_hitting_set(&remaining, &hs));
    }

    #[test]
    fn result_is_minimal() {
        let remaining = sets(&[&[2, 3], &[3, 5], &[5, 7], &[7, 2], &[2, 11, 13], &[13, 17]]);
        let forced = primes(&[19]);
        let hs = solve(&remaining, &forced, u64::MAX).unwrap();
        assert!(coverage::is_hitting_set(&remaining, &hs));
        for p in hs.iter().filter(|p| !forced.contains(p)) {
            let mut smaller = hs.clone();
            smaller.remove(p);
            assert!(!coverage::is_hitting_set(&remaining, &smaller));
        }
    }

    #[test]
    fn empty_instance_returns_forced() {
        assert_eq!(solve(&[], &primes(&[2, 7]), 1).unwrap(), primes(&[2, 7]));
        assert_eq!(all_minimum(&[], &primes(&[2]), 1).unwrap(), vec![primes(&[2])]);
    }

    #[test]
    fn refuses_large_search_space() {
        let remaining = sets(&[&[2, 3, 5], &[7, 11, 13], &[17, 19]]);
        assert_eq!(search_space(&remaining), 18);
        match solve(&remaining, &BTreeSet::new(), 17) {
            Err(SolveError::SearchSpaceTooLarge { size, limit }) => {
                assert_eq!(size, 18);
                assert_eq!(limit, 17);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(solve(&remaining, &BTreeSet::new(), 18).is_ok());
    }

    #[test]
    fn enumerates_all_minima() {
        let remaining = sets(&[&[2, 3], &[3, 5], &[2, 5]]);
        let minima = all_minimum(&remaining, &primes(&[7]), u64::MAX).unwrap();
        assert_eq!(minima, vec![primes(&[2, 3, 7]), primes(&[2, 5, 7]), primes(&[3, 5, 7])]);
    }
}
