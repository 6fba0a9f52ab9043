use thiserror::Error;

use medseed_core::rules::RulesError;
use medseed_core::SinkError;

/// Errors emitted while generating or committing a seed run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}
