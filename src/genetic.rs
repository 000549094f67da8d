//! Population based search for small hitting sets.
//!
//! Individuals are hitting sets of the unhit decompositions, kept as bit sets over the element
//! ids of a [`Universe`]. One generation breeds children from size-ranked parents, mutates a
//! random part of parents and children by dropping one element, and keeps the smallest feasible
//! individuals. The search stops once the best individual did not shrink for
//! `stall_generations` generations in a row.

use crate::config::GeneticConfig;
use crate::coverage::{self, Universe};
use crate::decompose::Decomposition;
use crate::random::random_subset;
use bit_set::BitSet;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Genetic hitting set of `remaining`, joined with `forced`.
pub fn solve<R: Rng + ?Sized>(
    remaining: &[Decomposition],
    forced: &BTreeSet<u64>,
    config: &GeneticConfig,
    rng: &mut R,
) -> BTreeSet<u64> {
    let universe = Universe::new(&coverage::unhit(remaining, forced));
    universe.to_primes(&evolve(&universe, config, rng), forced)
}

/// Runs the evolution and returns the smallest hitting set encountered.
pub fn evolve<R: Rng + ?Sized>(universe: &Universe, config: &GeneticConfig, rng: &mut R) -> BitSet {
    // nothing to hit, or an empty decomposition nothing can hit
    if universe.num_sets() == 0 || !universe.is_hitting(&universe.full()) {
        return universe.full();
    }
    let mut population = initial_population(universe, config, rng);
    let mut best = population[0].clone();
    let mut stall = 0;
    let mut generation = 0;
    while stall < config.stall_generations && generation < config.max_generations {
        generation += 1;
        let children = select_parents(&population, rng)
            .into_iter()
            .filter_map(|(a, b)| crossover(&population[a], &population[b], rng))
            .collect::<Vec<_>>();
        let mutants = mutate(population.iter().chain(children.iter()), config.mutation_rate, rng);
        population = survivors(universe, population, children, mutants, config.population_size);
        if population[0].len() < best.len() {
            best = population[0].clone();
            stall = 0;
        } else {
            stall += 1;
        }
        debug!(generation, population = population.len(), best = best.len(), stall, "generation done");
    }
    best
}

/// Feasible random subsets, sorted by size; the full element set if no draw was feasible.
pub fn initial_population<R: Rng + ?Sized>(universe: &Universe, config: &GeneticConfig, rng: &mut R) -> Vec<BitSet> {
    let mut population = Vec::new();
    for _ in 0..config.init_attempts {
        if population.len() >= config.population_size {
            break;
        }
        let hs = random_subset(universe, rng);
        if universe.is_hitting(&hs) {
            population.push(hs);
        }
    }
    if population.is_empty() {
        debug!(attempts = config.init_attempts, "no feasible draw, seeding with all elements");
        population.push(universe.full());
    }
    population.sort_by_key(|hs| hs.len());
    population
}

/// Draws `2 * len` parents with replacement and pairs them up.
///
/// `population` must be sorted by size. Its best third is drawn with weight 3, the middle third
/// with weight 2 and the rest with weight 1.
pub fn select_parents<R: Rng + ?Sized>(population: &[BitSet], rng: &mut R) -> Vec<(usize, usize)> {
    let n = population.len();
    let weights = (0..n).map(|rank| 3 - 3 * rank / n);
    let dist = match WeightedIndex::new(weights) {
        Ok(dist) => dist,
        Err(_) => return Vec::new(),
    };
    (0..n).map(|_| (dist.sample(rng), dist.sample(rng))).collect()
}

/// Unites a random part of each parent; `None` if both parts are empty.
pub fn crossover<R: Rng + ?Sized>(a: &BitSet, b: &BitSet, rng: &mut R) -> Option<BitSet> {
    let mut child = random_part(a, rng);
    child.union_with(&random_part(b, rng));
    if child.is_empty() {
        None
    } else {
        Some(child)
    }
}

fn random_part<R: Rng + ?Sized>(hs: &BitSet, rng: &mut R) -> BitSet {
    let amount = rng.gen_range(0..=hs.len());
    hs.iter().choose_multiple(rng, amount).into_iter().collect()
}

/// Copies of the individuals picked with probability `rate`, each with one random element removed.
pub fn mutate<'a, R, I>(individuals: I, rate: f64, rng: &mut R) -> Vec<BitSet>
where
    R: Rng + ?Sized,
    I: Iterator<Item = &'a BitSet>,
{
    let mut mutants = Vec::new();
    for hs in individuals {
        if !rng.gen_bool(rate) {
            continue;
        }
        if let Some(e) = hs.iter().choose(rng) {
            let mut mutant = hs.clone();
            mutant.remove(e);
            mutants.push(mutant);
        }
    }
    mutants
}

/// Merges all individuals, keeps the distinct non-empty hitting sets sorted by size and drops
/// the worst tenth, keeping at most `cap`.
fn survivors(
    universe: &Universe,
    population: Vec<BitSet>,
    children: Vec<BitSet>,
    mutants: Vec<BitSet>,
    cap: usize,
) -> Vec<BitSet> {
    let mut seen = HashSet::new();
    let mut merged: Vec<BitSet> = population.into_iter()
        .chain(children)
        .chain(mutants)
        .filter(|hs| !hs.is_empty() && universe.is_hitting(hs))
        .filter(|hs| seen.insert(hs.clone()))
        .collect();
    merged.sort_by_key(|hs| hs.len());
    let keep = (merged.len() - merged.len() / 10).min(cap).max(1);
    merged.truncate(keep);
    merged
}
