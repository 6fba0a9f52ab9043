//! Core contracts for the medseed hospital-record seeder.
//!
//! This crate defines the entity record types, the consistency rules shared
//! by every generator, the identifier-range bookkeeping, and the sink
//! contract implemented by persistence backends.

pub mod config;
pub mod records;
pub mod redaction;
pub mod rules;
pub mod sink;
pub mod status;

pub use config::{EntityCounts, SeedConfig, DEFAULT_BATCH_SIZE, DEFAULT_SEED};
pub use records::{
    Admission, Appointment, Bed, Bill, Department, Doctor, InsuranceClaim, InsuranceProvider,
    LabTest, MedicalRecord, Medicine, Patient, StaffMember, Ward,
};
pub use redaction::{redact_connection_string, RedactedConnection};
pub use sink::{EntityKind, IdRange, RecordBatch, RecordSink, SinkError};
