use crate::coverage;
use crate::decompose::Decomposition;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// The result of reducing an instance: elements which every minimum hitting set may be assumed
/// to contain, and the decompositions that `forced` does not hit yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reduction {
    pub forced: BTreeSet<u64>,
    pub remaining: Vec<Decomposition>,
}

impl Reduction {
    /// True iff `forced` alone hits every decomposition.
    pub fn is_solved(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Shrinks the instance before any search is started.
///
/// The following rules are applied until nothing changes:
/// 1. the sole element of a singleton is forced,
/// 2. supersets (and duplicates) of other decompositions are dropped,
/// 3. decompositions hit by the forced elements are dropped,
/// 4. an element common to all decompositions is forced, which solves the instance,
/// 5. elements occurring in only one decomposition are pruned from it, as long as it keeps an
///    element occurring elsewhere.
///
/// None of the rules excludes every minimum hitting set, thus `forced` together with a minimum
/// hitting set of `remaining` is a minimum hitting set of the input. The order of the surviving
/// decompositions is kept, so reducing `remaining` again yields it unchanged.
pub fn reduce(decompositions: &[Decomposition]) -> Reduction {
    let mut forced = BTreeSet::new();
    let mut remaining: Vec<Decomposition> = decompositions.iter()
        .filter(|d| !d.is_empty())
        .cloned()
        .collect();
    let mut rounds = 0;
    loop {
        rounds += 1;
        let before = remaining.clone();
        forced.extend(forced_elements(&remaining));
        remaining.retain(|d| d.len() > 1);
        remaining = absorb_supersets(&remaining);
        remaining = coverage::unhit(&remaining, &forced);
        if let Some(p) = common_element(&remaining) {
            forced.insert(p);
            remaining = coverage::unhit(&remaining, &forced);
        }
        if remaining.is_empty() {
            break;
        }
        remaining = prune_solo_elements(&remaining);
        if remaining == before {
            break;
        }
    }
    debug!(rounds, forced = forced.len(), remaining = remaining.len(), "reduction reached fixed point");
    Reduction { forced, remaining }
}

/// Returns the elements of all singleton decompositions.
pub fn forced_elements(decompositions: &[Decomposition]) -> BTreeSet<u64> {
    decompositions.iter()
        .filter(|d| d.len() == 1)
        .flat_map(|d| d.iter().cloned())
        .collect()
}

/// Drops every decomposition that is a strict superset of another one, and all but the first
/// of equal decompositions.
pub fn absorb_supersets(decompositions: &[Decomposition]) -> Vec<Decomposition> {
    decompositions.iter()
        .enumerate()
        .filter(|(i, d)| {
            !decompositions.iter().enumerate().any(|(j, other)| {
                (other.len() < d.len() && other.is_subset(d)) || (j < *i && other == *d)
            })
        })
        .map(|(_, d)| d.clone())
        .collect()
}

/// Returns the smallest element contained in every decomposition, if there is one.
///
/// Such an element hits all of them alone. Returns `None` for an empty list.
pub fn common_element(decompositions: &[Decomposition]) -> Option<u64> {
    let (first, rest) = decompositions.split_first()?;
    first.iter()
        .cloned()
        .find(|p| rest.iter().all(|d| d.contains(p)))
}

/// Removes the elements occurring in exactly one decomposition from it, unless all of its
/// elements are of this kind.
///
/// A pruned element can always be swapped for a kept element of the same decomposition without
/// increasing the size of a hitting set.
pub fn prune_solo_elements(decompositions: &[Decomposition]) -> Vec<Decomposition> {
    let counts = occurrences(decompositions);
    let solo = |p: &u64| counts.get(p) == Some(&1);
    decompositions.iter()
        .map(|d| {
            if d.iter().any(solo) && !d.iter().all(solo) {
                d.iter().filter(|p| !solo(*p)).cloned().collect()
            } else {
                d.clone()
            }
        })
        .collect()
}

/// Number of decompositions each element occurs in.
pub fn occurrences(decompositions: &[Decomposition]) -> BTreeMap<u64, usize> {
    let mut counts = BTreeMap::new();
    for p in decompositions.iter().flat_map(|d| d.iter()) {
        *counts.entry(*p).or_insert(0) += 1;
    }
    counts
}
