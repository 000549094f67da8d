//! Solver configuration, loadable from TOML.
//!
//! ```
//! use primehit::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     strategy = "genetic"
//!     random_seed = 7
//!
//!     [genetic]
//!     population_size = 80
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, "genetic");
//! assert_eq!(config.genetic.population_size, 80);
//! assert_eq!(config.multi_start_runs, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverConfig {
    /// Name of the strategy run on the reduced instance.
    pub strategy: String,

    /// Seed of the random source handed to the randomized strategies.
    pub random_seed: Option<u64>,

    /// Report the solve lifecycle (start, reduction, result, fallbacks) through tracing at info
    /// and warn level. `debug` diagnostics from the reduction and the strategies are left to the
    /// subscriber's filter.
    pub verbose: bool,

    /// Return the forced elements instead of failing on an unknown strategy.
    pub best_effort: bool,

    /// Maximum number of combinations the exhaustive strategy may enumerate.
    pub exhaustive_limit: u64,

    /// Number of descents run by the multi-start strategy.
    pub multi_start_runs: usize,

    /// Consecutive rejected removals after which a descent stops.
    pub stall_rejections: usize,

    pub genetic: GeneticConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            strategy: "exhaustive".to_string(),
            random_seed: None,
            verbose: true,
            best_effort: false,
            exhaustive_limit: 1 << 24,
            multi_start_runs: 5,
            stall_rejections: 5,
            genetic: GeneticConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.multi_start_runs == 0 {
            return Err(ConfigError::Invalid("multi_start_runs must be positive".to_string()));
        }
        if self.stall_rejections == 0 {
            return Err(ConfigError::Invalid("stall_rejections must be positive".to_string()));
        }
        self.genetic.validate()
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_best_effort(mut self, best_effort: bool) -> Self {
        self.best_effort = best_effort;
        self
    }

    pub fn with_exhaustive_limit(mut self, limit: u64) -> Self {
        self.exhaustive_limit = limit;
        self
    }
}

/// Parameters of the genetic strategy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneticConfig {
    /// Upper bound on the population kept between generations.
    pub population_size: usize,

    /// Random draws tried when seeding the initial population.
    pub init_attempts: usize,

    /// Probability that an individual is picked for mutation.
    pub mutation_rate: f64,

    /// Generations without a smaller best candidate before stopping.
    pub stall_generations: usize,

    pub max_generations: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            population_size: 50,
            init_attempts: 500,
            mutation_rate: 0.2,
            stall_generations: 3,
            max_generations: 1_000,
        }
    }
}

impl GeneticConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::Invalid("genetic.population_size must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::Invalid(format!(
                "genetic.mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
