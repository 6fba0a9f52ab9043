//! The run clock: "now" captured once at run start.
//!
//! Status thresholds like "older than 7 days" would drift if every record
//! re-read the wall clock during a long run, so the whole run classifies
//! against this single capture.

use chrono::{Local, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunClock {
    pub today: NaiveDate,
    pub now: NaiveDateTime,
}

impl RunClock {
    /// Capture the local wall clock. Call exactly once per run.
    pub fn capture() -> Self {
        let now = Local::now().naive_local();
        Self {
            today: now.date(),
            now,
        }
    }

    /// Fixed clock for reproducible tests.
    pub fn fixed(now: NaiveDateTime) -> Self {
        Self {
            today: now.date(),
            now,
        }
    }
}
