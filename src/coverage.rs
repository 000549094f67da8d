use crate::decompose::Decomposition;
use bit_set::BitSet;
use std::collections::BTreeSet;

/// Returns the decompositions of `remaining` which share no element with `candidate`, in order.
///
/// The result is empty iff `candidate` hits every decomposition.
pub fn unhit(remaining: &[Decomposition], candidate: &BTreeSet<u64>) -> Vec<Decomposition> {
    remaining.iter()
        .filter(|d| d.is_disjoint(candidate))
        .cloned()
        .collect()
}

/// Returns true iff `candidate` hits every decomposition of `remaining`.
pub fn is_hitting_set(remaining: &[Decomposition], candidate: &BTreeSet<u64>) -> bool {
    remaining.iter().all(|d| !d.is_disjoint(candidate))
}

/// A set system over dense element ids.
///
/// The distinct primes of the instance are numbered `0..len()` in increasing order, so that
/// candidates can be kept as bit sets. Iterating a candidate thus visits its primes in
/// increasing order.
pub struct Universe {
    elements: Vec<u64>,
    sets: Vec<BitSet>,
    members: Vec<Vec<usize>>,
    counts: Vec<usize>,
}

impl Universe {
    pub fn new(remaining: &[Decomposition]) -> Universe {
        let elements: Vec<u64> = remaining.iter()
            .flat_map(|d| d.iter().cloned())
            .collect::<BTreeSet<u64>>()
            .into_iter()
            .collect();
        let mut counts = vec![0; elements.len()];
        let mut sets = Vec::with_capacity(remaining.len());
        let mut members = Vec::with_capacity(remaining.len());
        for d in remaining {
            let ids: Vec<usize> = d.iter()
                .filter_map(|p| elements.binary_search(p).ok())
                .collect();
            let mut set = BitSet::with_capacity(elements.len());
            for e in ids.iter().cloned() {
                set.insert(e);
                counts[e] += 1;
            }
            sets.push(set);
            members.push(ids);
        }
        Universe { elements, sets, members, counts }
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of sets in the system.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    pub fn element(&self, id: usize) -> u64 {
        self.elements[id]
    }

    /// Element ids of set `i`, ascending.
    pub fn members(&self, i: usize) -> &[usize] {
        &self.members[i]
    }

    /// Number of sets containing element `id`.
    pub fn count(&self, id: usize) -> usize {
        self.counts[id]
    }

    /// The candidate holding every element; it always hits every set.
    pub fn full(&self) -> BitSet {
        (0..self.len()).collect()
    }

    /// Indices of the sets not hit by `candidate`.
    pub fn unhit(&self, candidate: &BitSet) -> Vec<usize> {
        (0..self.sets.len())
            .filter(|i| self.sets[*i].is_disjoint(candidate))
            .collect()
    }

    pub fn is_hitting(&self, candidate: &BitSet) -> bool {
        self.sets.iter().all(|s| !s.is_disjoint(candidate))
    }

    /// Translates a candidate back to primes and adds `forced`.
    pub fn to_primes(&self, candidate: &BitSet, forced: &BTreeSet<u64>) -> BTreeSet<u64> {
        let mut primes = forced.clone();
        primes.extend(candidate.iter().map(|e| self.elements[e]));
        primes
    }
}
