//! In-memory sink for dry runs and tests.

use async_trait::async_trait;

use medseed_core::{
    Admission, Appointment, Bed, Bill, Department, Doctor, EntityKind, IdRange, InsuranceClaim,
    InsuranceProvider, LabTest, MedicalRecord, Medicine, Patient, RecordBatch, RecordSink,
    SinkError, StaffMember, Ward,
};

/// Collects every committed batch and assigns the same `1..=N` identifier
/// ranges a fresh relational store would.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    pub batches: Vec<RecordBatch>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch(&self, kind: EntityKind) -> Option<&RecordBatch> {
        self.batches.iter().find(|batch| batch.kind() == kind)
    }

    pub fn departments(&self) -> &[Department] {
        match self.batch(EntityKind::Departments) {
            Some(RecordBatch::Departments(rows)) => rows,
            _ => &[],
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        match self.batch(EntityKind::Doctors) {
            Some(RecordBatch::Doctors(rows)) => rows,
            _ => &[],
        }
    }

    pub fn patients(&self) -> &[Patient] {
        match self.batch(EntityKind::Patients) {
            Some(RecordBatch::Patients(rows)) => rows,
            _ => &[],
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        match self.batch(EntityKind::Appointments) {
            Some(RecordBatch::Appointments(rows)) => rows,
            _ => &[],
        }
    }

    pub fn medical_records(&self) -> &[MedicalRecord] {
        match self.batch(EntityKind::MedicalRecords) {
            Some(RecordBatch::MedicalRecords(rows)) => rows,
            _ => &[],
        }
    }

    pub fn wards(&self) -> &[Ward] {
        match self.batch(EntityKind::Wards) {
            Some(RecordBatch::Wards(rows)) => rows,
            _ => &[],
        }
    }

    pub fn beds(&self) -> &[Bed] {
        match self.batch(EntityKind::Beds) {
            Some(RecordBatch::Beds(rows)) => rows,
            _ => &[],
        }
    }

    pub fn admissions(&self) -> &[Admission] {
        match self.batch(EntityKind::Admissions) {
            Some(RecordBatch::Admissions(rows)) => rows,
            _ => &[],
        }
    }

    pub fn bills(&self) -> &[Bill] {
        match self.batch(EntityKind::Bills) {
            Some(RecordBatch::Bills(rows)) => rows,
            _ => &[],
        }
    }

    pub fn lab_tests(&self) -> &[LabTest] {
        match self.batch(EntityKind::LabTests) {
            Some(RecordBatch::LabTests(rows)) => rows,
            _ => &[],
        }
    }

    pub fn medicines(&self) -> &[Medicine] {
        match self.batch(EntityKind::Medicines) {
            Some(RecordBatch::Medicines(rows)) => rows,
            _ => &[],
        }
    }

    pub fn staff(&self) -> &[StaffMember] {
        match self.batch(EntityKind::Staff) {
            Some(RecordBatch::Staff(rows)) => rows,
            _ => &[],
        }
    }

    pub fn insurance_providers(&self) -> &[InsuranceProvider] {
        match self.batch(EntityKind::InsuranceProviders) {
            Some(RecordBatch::InsuranceProviders(rows)) => rows,
            _ => &[],
        }
    }

    pub fn insurance_claims(&self) -> &[InsuranceClaim] {
        match self.batch(EntityKind::InsuranceClaims) {
            Some(RecordBatch::InsuranceClaims(rows)) => rows,
            _ => &[],
        }
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn insert(&mut self, batch: RecordBatch) -> Result<IdRange, SinkError> {
        let range = IdRange::first_n(batch.len());
        self.batches.push(batch);
        Ok(range)
    }
}
