//! Run report written alongside every seed run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Outcome of one committed entity stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReport {
    pub entity: String,
    pub rows_requested: u64,
    pub rows_inserted: u64,
    pub duration_ms: u64,
}

/// Summary of a full seed run, in stage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedReport {
    pub seed: u64,
    pub entities: Vec<EntityReport>,
    pub total_rows: u64,
    pub duration_ms: u64,
}

impl SeedReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            entities: Vec::new(),
            total_rows: 0,
            duration_ms: 0,
        }
    }

    pub fn push(&mut self, entity: EntityReport) {
        self.total_rows += entity.rows_inserted;
        self.entities.push(entity);
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.duration_ms = elapsed.as_millis() as u64;
    }
}
