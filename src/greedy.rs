use crate::coverage::{self, Universe};
use crate::decompose::Decomposition;
use bit_set::BitSet;
use std::collections::{BTreeSet, HashSet};

/// Greedy hitting set of `remaining`, joined with `forced`.
///
/// Decompositions already hit by `forced` are ignored. Among the elements hitting the most
/// unhit decompositions the smallest prime is taken, until every decomposition is hit.
pub fn solve(remaining: &[Decomposition], forced: &BTreeSet<u64>) -> BTreeSet<u64> {
    let universe = Universe::new(&coverage::unhit(remaining, forced));
    universe.to_primes(&hitting_set(&universe), forced)
}

/// Max-degree heuristic on the dense set system.
pub fn hitting_set(universe: &Universe) -> BitSet {
    // The degree of an element is the number of unhit sets it is in.
    let mut watch = vec![HashSet::<usize>::default(); universe.len()];
    for i in 0..universe.num_sets() {
        universe.members(i).iter().for_each(|e| { watch[*e].insert(i); });
    }

    // A bucket priority queue.
    // For every possible degree, we have a bucket of all elements of that degree, ordered by id.
    // Degrees can only be reduced.
    let mut queue_head = watch.iter().map(|w| w.len()).max().unwrap_or(0);
    let mut bucket_queue = vec![BTreeSet::<usize>::new(); queue_head + 1];
    for e in 0..universe.len() {
        bucket_queue[watch[e].len()].insert(e);
    }

    // As long as there are sets that are not hit, take the smallest element of highest degree.
    let mut hs = BitSet::new();
    while queue_head > 0 {
        if let Some(e) = bucket_queue[queue_head].pop_first() {
            hs.insert(e);
            let ids = watch[e].drain().collect::<Vec<usize>>();
            for set_id in ids {
                for v in universe.members(set_id).iter().cloned().filter(|v| *v != e) {
                    let degree = watch[v].len();
                    watch[v].remove(&set_id);
                    bucket_queue[degree].remove(&v);
                    bucket_queue[degree - 1].insert(v);
                }
            }
        } else {
            queue_head -= 1;
        }
    }
    hs
}
