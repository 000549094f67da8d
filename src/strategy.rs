use crate::decompose::Decomposition;
use crate::error::SolveError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The algorithms available for hitting the decompositions left over by the reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Exhaustive,
    Greedy,
    Stochastic,
    MultiStochastic,
    Random,
    Genetic,
    SelfSolve,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Exhaustive,
        Strategy::Greedy,
        Strategy::Stochastic,
        Strategy::MultiStochastic,
        Strategy::Random,
        Strategy::Genetic,
        Strategy::SelfSolve,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Exhaustive      => "exhaustive",
            Strategy::Greedy          => "greedy",
            Strategy::Stochastic      => "stochastic",
            Strategy::MultiStochastic => "multi-stochastic",
            Strategy::Random          => "random",
            Strategy::Genetic         => "genetic",
            Strategy::SelfSolve       => "self-solve",
        }
    }

    /// Only the exhaustive strategy guarantees a minimum hitting set.
    pub fn is_exact(self) -> bool {
        self == Strategy::Exhaustive
    }

    pub fn is_randomized(self) -> bool {
        matches!(self, Strategy::Stochastic | Strategy::MultiStochastic | Strategy::Random | Strategy::Genetic)
    }
}

impl FromStr for Strategy {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL.iter()
            .cloned()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| SolveError::UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The self-solve pass-through: returns `forced` unchanged.
///
/// The result only hits every decomposition if the reduction already solved the instance; the
/// solver reports any leftovers to its observer.
pub fn self_solve(_remaining: &[Decomposition], forced: &BTreeSet<u64>) -> BTreeSet<u64> {
    forced.clone()
}
