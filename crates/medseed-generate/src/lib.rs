//! Synthetic hospital-record generation.
//!
//! The [`SeedEngine`] runs the entity generators in a fixed sequential order
//! against any [`medseed_core::RecordSink`], keeping referential and temporal
//! integrity by construction and reproducibility by threading one seeded RNG
//! through every stage.

pub mod catalog;
pub mod clock;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod memory;
pub mod report;
pub mod sampling;

pub use clock::RunClock;
pub use engine::SeedEngine;
pub use errors::GenerateError;
pub use memory::MemorySink;
pub use report::{EntityReport, SeedReport};
