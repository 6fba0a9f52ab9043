//! The sequential seed engine.
//!
//! One entity type is fully generated and committed before the next begins:
//! later stages draw parent references from the identifier ranges returned
//! by earlier commits. The RNG is seeded once and consumed in this fixed
//! stage order, which makes a run byte-for-byte reproducible from its seed.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use medseed_core::{IdRange, RecordBatch, RecordSink, SeedConfig};

use crate::clock::RunClock;
use crate::errors::GenerateError;
use crate::generators;
use crate::report::{EntityReport, SeedReport};

pub struct SeedEngine {
    config: SeedConfig,
    clock: RunClock,
}

impl SeedEngine {
    pub fn new(config: SeedConfig, clock: RunClock) -> Self {
        Self { config, clock }
    }

    pub async fn run<S: RecordSink>(&self, sink: &mut S) -> Result<SeedReport, GenerateError> {
        self.config.validate().map_err(GenerateError::InvalidConfig)?;

        let started = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let counts = self.config.counts;
        let clock = &self.clock;
        let mut report = SeedReport::new(self.config.seed);

        info!(seed = self.config.seed, date = %clock.today, "seed run started");

        let departments = commit(
            sink,
            RecordBatch::Departments(generators::departments()),
            &mut report,
        )
        .await?;

        let rows = generators::doctors(&mut rng, clock, counts.doctors, departments)?;
        let doctors = commit(sink, RecordBatch::Doctors(rows), &mut report).await?;

        let rows = generators::patients(&mut rng, clock, counts.patients)?;
        let patients = commit(sink, RecordBatch::Patients(rows), &mut report).await?;

        let rows =
            generators::appointments(&mut rng, clock, counts.appointments, patients, doctors)?;
        let appointments = commit(sink, RecordBatch::Appointments(rows), &mut report).await?;

        let rows = generators::medical_records(
            &mut rng,
            clock,
            counts.medical_records,
            patients,
            doctors,
            appointments,
        )?;
        commit(sink, RecordBatch::MedicalRecords(rows), &mut report).await?;

        let rows = generators::wards(&mut rng, departments)?;
        let wards = commit(sink, RecordBatch::Wards(rows), &mut report).await?;

        let rows = generators::beds(&mut rng, wards)?;
        let beds = commit(sink, RecordBatch::Beds(rows), &mut report).await?;

        let rows = generators::admissions(
            &mut rng,
            clock,
            counts.admissions,
            patients,
            doctors,
            beds,
        )?;
        let admissions = commit(sink, RecordBatch::Admissions(rows), &mut report).await?;

        let rows = generators::bills(
            &mut rng,
            clock,
            counts.bills,
            patients,
            appointments,
            admissions,
        )?;
        let bills = commit(sink, RecordBatch::Bills(rows), &mut report).await?;

        let rows = generators::lab_tests(&mut rng, clock, counts.lab_tests, patients, doctors)?;
        commit(sink, RecordBatch::LabTests(rows), &mut report).await?;

        let rows = generators::medicines(&mut rng, clock)?;
        commit(sink, RecordBatch::Medicines(rows), &mut report).await?;

        let rows = generators::staff(&mut rng, clock, counts.staff, departments)?;
        commit(sink, RecordBatch::Staff(rows), &mut report).await?;

        let rows = generators::insurance_providers(&mut rng)?;
        let providers = commit(sink, RecordBatch::InsuranceProviders(rows), &mut report).await?;

        let rows = generators::insurance_claims(
            &mut rng,
            clock,
            counts.insurance_claims,
            bills,
            providers,
        )?;
        commit(sink, RecordBatch::InsuranceClaims(rows), &mut report).await?;

        report.finish(started.elapsed());
        info!(
            total_rows = report.total_rows,
            duration_ms = report.duration_ms,
            "seed run completed"
        );

        Ok(report)
    }
}

async fn commit<S: RecordSink>(
    sink: &mut S,
    batch: RecordBatch,
    report: &mut SeedReport,
) -> Result<IdRange, GenerateError> {
    let kind = batch.kind();
    let rows_requested = batch.len() as u64;
    let started = Instant::now();

    let range = sink.insert(batch).await?;
    let duration_ms = started.elapsed().as_millis() as u64;

    info!(
        entity = %kind,
        rows = range.len() as u64,
        duration_ms,
        "entity committed"
    );
    report.push(EntityReport {
        entity: kind.table_name().to_string(),
        rows_requested,
        rows_inserted: range.len() as u64,
        duration_ms,
    });

    Ok(range)
}
