//! Run registry: per-run directory with config, logs, and report artifacts.

mod logging;
mod run;

use thiserror::Error;

pub use logging::{init_run_logging, init_stderr_logging};
pub use run::{start_run, write_report, RunContext, RunPaths};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
