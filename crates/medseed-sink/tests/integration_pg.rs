//! End-to-end seed against a real Postgres.
//!
//! Requires `TEST_DATABASE_URL` (or `DATABASE_URL`) pointing at a disposable
//! database; the schema is dropped and recreated.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;

use medseed_core::{EntityCounts, SeedConfig};
use medseed_generate::{RunClock, SeedEngine};
use medseed_sink::{apply_schema, PgSink, SEEDED_TABLES};

fn database_url() -> Result<String> {
    env::var("TEST_DATABASE_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .context("set TEST_DATABASE_URL or DATABASE_URL for integration tests")
}

async fn connect() -> Result<PgPool> {
    let url = database_url()?;
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .connect(&url)
        .await
        .context("connecting to Postgres")
}

fn test_config() -> SeedConfig {
    SeedConfig {
        seed: 2026,
        batch_size: 500,
        counts: EntityCounts {
            doctors: 12,
            patients: 200,
            appointments: 400,
            medical_records: 300,
            admissions: 80,
            bills: 250,
            lab_tests: 150,
            staff: 25,
            insurance_claims: 60,
        },
    }
}

fn fixed_clock() -> RunClock {
    RunClock::fixed(
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

async fn count(pool: &PgPool, table: &str) -> Result<i64> {
    let rows: i64 = sqlx::query_scalar(&format!("select count(*) from {table}"))
        .fetch_one(pool)
        .await
        .with_context(|| format!("counting {table}"))?;
    Ok(rows)
}

#[tokio::test]
async fn seeds_a_fresh_schema_end_to_end() -> Result<()> {
    let pool = connect().await?;
    apply_schema(&pool).await?;

    let config = test_config();
    let mut sink = PgSink::new(pool.clone(), config.batch_size);
    sink.preflight().await?;

    let engine = SeedEngine::new(config.clone(), fixed_clock());
    let report = engine.run(&mut sink).await?;
    assert_eq!(report.entities.len(), SEEDED_TABLES.len());

    assert_eq!(count(&pool, "departments").await?, 12);
    assert_eq!(count(&pool, "patients").await?, 200);
    assert_eq!(count(&pool, "appointments").await?, 400);
    assert_eq!(count(&pool, "beds").await?, 83);
    assert_eq!(count(&pool, "insurance_claims").await?, 60);

    // Serial keys line up with the engine's expected ranges.
    let max_patient: i32 = sqlx::query_scalar("select max(patient_id) from patients")
        .fetch_one(&pool)
        .await?;
    assert_eq!(max_patient, 200);

    // Conditional fields survive the round trip as NULLs, not placeholders.
    let unpaid_with_method: i64 = sqlx::query_scalar(
        "select count(*) from billing where payment_status <> 'Paid' and payment_method is not null",
    )
    .fetch_one(&pool)
    .await?;
    assert_eq!(unpaid_with_method, 0);

    Ok(())
}

#[tokio::test]
async fn preflight_rejects_a_dirty_schema() -> Result<()> {
    let pool = connect().await?;
    apply_schema(&pool).await?;

    sqlx::query(
        "insert into departments (department_name, floor_number, phone_extension) \
         values ('Cardiology', 1, '1001')",
    )
    .execute(&pool)
    .await?;

    let sink = PgSink::new(pool, 500);
    let err = sink.preflight().await.expect_err("dirty table must fail");
    assert!(err.to_string().contains("not empty"));
    Ok(())
}
