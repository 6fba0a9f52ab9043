//! Persistence contract between the generation engine and storage backends.
//!
//! A sink accepts one fully generated entity batch at a time and reports back
//! the identifier range the store assigned. Stages run strictly in order, so
//! a batch may only reference ranges returned by earlier `insert` calls.

use std::fmt;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::{
    Admission, Appointment, Bed, Bill, Department, Doctor, InsuranceClaim, InsuranceProvider,
    LabTest, MedicalRecord, Medicine, Patient, StaffMember, Ward,
};

/// Errors surfaced by persistence backends.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The target table is missing; the schema was never applied.
    #[error("missing table '{0}'")]
    MissingTable(String),
    /// Seeding requires fresh tables so assigned identifiers start at 1.
    #[error("table '{0}' is not empty")]
    TableNotEmpty(String),
    #[error("database error: {0}")]
    Db(String),
}

/// Inclusive range of identifiers assigned to one committed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub start: i32,
    pub end: i32,
}

impl IdRange {
    /// The range `1..=n`, as assigned by serial keys on a fresh table.
    pub fn first_n(n: usize) -> Self {
        Self {
            start: 1,
            end: n as i32,
        }
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: i32) -> bool {
        id >= self.start && id <= self.end
    }

    /// Uniform draw from the range. Callers must check `is_empty` first.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.start..=self.end)
    }
}

/// Entity stages in their fixed generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Departments,
    Doctors,
    Patients,
    Appointments,
    MedicalRecords,
    Wards,
    Beds,
    Admissions,
    Bills,
    LabTests,
    Medicines,
    Staff,
    InsuranceProviders,
    InsuranceClaims,
}

impl EntityKind {
    /// The persisted table backing this entity.
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Departments => "departments",
            EntityKind::Doctors => "doctors",
            EntityKind::Patients => "patients",
            EntityKind::Appointments => "appointments",
            EntityKind::MedicalRecords => "medical_records",
            EntityKind::Wards => "wards",
            EntityKind::Beds => "beds",
            EntityKind::Admissions => "admissions",
            EntityKind::Bills => "billing",
            EntityKind::LabTests => "lab_tests",
            EntityKind::Medicines => "medicines",
            EntityKind::Staff => "staff",
            EntityKind::InsuranceProviders => "insurance_providers",
            EntityKind::InsuranceClaims => "insurance_claims",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// One fully generated entity's rows, ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordBatch {
    Departments(Vec<Department>),
    Doctors(Vec<Doctor>),
    Patients(Vec<Patient>),
    Appointments(Vec<Appointment>),
    MedicalRecords(Vec<MedicalRecord>),
    Wards(Vec<Ward>),
    Beds(Vec<Bed>),
    Admissions(Vec<Admission>),
    Bills(Vec<Bill>),
    LabTests(Vec<LabTest>),
    Medicines(Vec<Medicine>),
    Staff(Vec<StaffMember>),
    InsuranceProviders(Vec<InsuranceProvider>),
    InsuranceClaims(Vec<InsuranceClaim>),
}

impl RecordBatch {
    pub fn kind(&self) -> EntityKind {
        match self {
            RecordBatch::Departments(_) => EntityKind::Departments,
            RecordBatch::Doctors(_) => EntityKind::Doctors,
            RecordBatch::Patients(_) => EntityKind::Patients,
            RecordBatch::Appointments(_) => EntityKind::Appointments,
            RecordBatch::MedicalRecords(_) => EntityKind::MedicalRecords,
            RecordBatch::Wards(_) => EntityKind::Wards,
            RecordBatch::Beds(_) => EntityKind::Beds,
            RecordBatch::Admissions(_) => EntityKind::Admissions,
            RecordBatch::Bills(_) => EntityKind::Bills,
            RecordBatch::LabTests(_) => EntityKind::LabTests,
            RecordBatch::Medicines(_) => EntityKind::Medicines,
            RecordBatch::Staff(_) => EntityKind::Staff,
            RecordBatch::InsuranceProviders(_) => EntityKind::InsuranceProviders,
            RecordBatch::InsuranceClaims(_) => EntityKind::InsuranceClaims,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordBatch::Departments(rows) => rows.len(),
            RecordBatch::Doctors(rows) => rows.len(),
            RecordBatch::Patients(rows) => rows.len(),
            RecordBatch::Appointments(rows) => rows.len(),
            RecordBatch::MedicalRecords(rows) => rows.len(),
            RecordBatch::Wards(rows) => rows.len(),
            RecordBatch::Beds(rows) => rows.len(),
            RecordBatch::Admissions(rows) => rows.len(),
            RecordBatch::Bills(rows) => rows.len(),
            RecordBatch::LabTests(rows) => rows.len(),
            RecordBatch::Medicines(rows) => rows.len(),
            RecordBatch::Staff(rows) => rows.len(),
            RecordBatch::InsuranceProviders(rows) => rows.len(),
            RecordBatch::InsuranceClaims(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Storage backend for generated batches.
///
/// `insert` must persist the whole batch or fail; on failure, previously
/// committed chunks of the batch stay durable and the run aborts fail-fast.
#[async_trait]
pub trait RecordSink {
    async fn insert(&mut self, batch: RecordBatch) -> Result<IdRange, SinkError>;
}
