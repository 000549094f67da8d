use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("{0} is not an available strategy")]
    UnknownStrategy(String),

    /// The exhaustive search would have to enumerate `size` combinations. `size` saturates at
    /// `u64::MAX`.
    #[error("exhaustive search space of {size} combinations exceeds the limit of {limit}")]
    SearchSpaceTooLarge { size: u64, limit: u64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
