use std::collections::BTreeSet;

/// The distinct prime factors of one input integer: at least one of them has to be hit.
pub type Decomposition = BTreeSet<u64>;

/// Returns the distinct prime factors of `|n|`, or an empty set for -1, 0 and 1.
///
/// Plain trial division up to the square root of the unfactored rest: cheap for inputs with
/// small factors, but a prime close to `i64::MAX` takes about three billion divisions.
pub fn prime_factors(n: i64) -> Decomposition {
    let mut rest = n.unsigned_abs();
    let mut primes = Decomposition::new();
    if rest < 2 {
        return primes;
    }
    let mut d: u64 = 2;
    while d * d <= rest {
        if rest % d == 0 {
            primes.insert(d);
            while rest % d == 0 {
                rest /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if rest > 1 {
        primes.insert(rest);
    }
    primes
}

/// Decomposes every integer, silently dropping those without prime factors.
pub fn decompose_all(numbers: &[i64]) -> Vec<Decomposition> {
    numbers.iter()
        .map(|n| prime_factors(*n))
        .filter(|d| !d.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(v: &[u64]) -> Decomposition {
        v.iter().cloned().collect()
    }

    #[test]
    fn factors_small_integers() {
        let input = [10, 2, 5, -12, 36, 100, 0];
        let expected = vec![set(&[2, 5]), set(&[2]), set(&[5]), set(&[2, 3]), set(&[2, 3]), set(&[2, 5]), set(&[])];
        let realised: Vec<Decomposition> = input.iter().map(|n| prime_factors(*n)).collect();
        assert_eq!(realised, expected);
    }

    #[test]
    fn degenerate_integers_have_no_factors() {
        for n in [-1, 0, 1] {
            assert!(prime_factors(n).is_empty());
        }
    }

    #[test]
    fn handles_extremes() {
        assert_eq!(prime_factors(i64::MIN), set(&[2]));
        assert_eq!(prime_factors(-1_000_003), set(&[1_000_003]));
        assert_eq!(prime_factors(2 * 3 * 5 * 7 * 11 * 13 * 9_973), set(&[2, 3, 5, 7, 11, 13, 9_973]));
    }

    #[test]
    fn decompose_all_drops_degenerate() {
        let decompositions = decompose_all(&[1, 0, -1, 9, -38]);
        assert_eq!(decompositions, vec![set(&[3]), set(&[2, 19])]);
    }
}
