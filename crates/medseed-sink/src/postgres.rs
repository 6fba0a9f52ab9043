//! Batched Postgres sink with commit checkpoints.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use medseed_core::{EntityKind, IdRange, RecordBatch, RecordSink, SinkError};

use crate::records::PgRecord;

/// All seeded tables, in stage order.
pub const SEEDED_TABLES: &[EntityKind] = &[
    EntityKind::Departments,
    EntityKind::Doctors,
    EntityKind::Patients,
    EntityKind::Appointments,
    EntityKind::MedicalRecords,
    EntityKind::Wards,
    EntityKind::Beds,
    EntityKind::Admissions,
    EntityKind::Bills,
    EntityKind::LabTests,
    EntityKind::Medicines,
    EntityKind::Staff,
    EntityKind::InsuranceProviders,
    EntityKind::InsuranceClaims,
];

/// Writes generated batches to Postgres, committing every `batch_size` rows
/// so a mid-run failure leaves a fully committed prefix.
pub struct PgSink {
    pool: PgPool,
    batch_size: usize,
}

impl PgSink {
    pub fn new(pool: PgPool, batch_size: usize) -> Self {
        Self { pool, batch_size }
    }

    /// Verify every seeded table exists and is empty.
    ///
    /// Runs before any generation so configuration errors abort the run
    /// without a single write. Fresh tables also guarantee the serial keys
    /// assigned at insertion match the engine's expected `1..=N` ranges.
    pub async fn preflight(&self) -> Result<(), SinkError> {
        for kind in SEEDED_TABLES {
            let table = kind.table_name();
            let exists: Option<String> = sqlx::query_scalar("select to_regclass($1)::text")
                .bind(table)
                .fetch_one(&self.pool)
                .await
                .map_err(|err| SinkError::Db(err.to_string()))?;
            if exists.is_none() {
                return Err(SinkError::MissingTable(table.to_string()));
            }

            let rows: i64 = sqlx::query_scalar(&format!("select count(*) from {table}"))
                .fetch_one(&self.pool)
                .await
                .map_err(|err| SinkError::Db(err.to_string()))?;
            if rows > 0 {
                return Err(SinkError::TableNotEmpty(table.to_string()));
            }
        }
        Ok(())
    }

    async fn insert_rows<T: PgRecord + Sync>(&self, rows: &[T]) -> Result<IdRange, SinkError> {
        let db = |err: sqlx::Error| SinkError::Db(format!("{}: {err}", T::TABLE));
        let mut committed = 0_usize;

        for chunk in rows.chunks(self.batch_size) {
            let mut tx = self.pool.begin().await.map_err(db)?;

            let mut builder = QueryBuilder::<Postgres>::new(insert_prefix(T::TABLE, T::COLUMNS));
            builder.push_values(chunk.iter(), |mut row, record| record.bind(&mut row));
            builder.build().execute(&mut *tx).await.map_err(db)?;

            tx.commit().await.map_err(db)?;
            committed += chunk.len();
            debug!(
                table = T::TABLE,
                committed,
                total = rows.len(),
                "batch committed"
            );
        }

        Ok(IdRange::first_n(rows.len()))
    }
}

pub(crate) fn insert_prefix(table: &str, columns: &[&str]) -> String {
    format!("insert into {} ({}) ", table, columns.join(", "))
}

#[async_trait]
impl RecordSink for PgSink {
    async fn insert(&mut self, batch: RecordBatch) -> Result<IdRange, SinkError> {
        match batch {
            RecordBatch::Departments(rows) => self.insert_rows(&rows).await,
            RecordBatch::Doctors(rows) => self.insert_rows(&rows).await,
            RecordBatch::Patients(rows) => self.insert_rows(&rows).await,
            RecordBatch::Appointments(rows) => self.insert_rows(&rows).await,
            RecordBatch::MedicalRecords(rows) => self.insert_rows(&rows).await,
            RecordBatch::Wards(rows) => self.insert_rows(&rows).await,
            RecordBatch::Beds(rows) => self.insert_rows(&rows).await,
            RecordBatch::Admissions(rows) => self.insert_rows(&rows).await,
            RecordBatch::Bills(rows) => self.insert_rows(&rows).await,
            RecordBatch::LabTests(rows) => self.insert_rows(&rows).await,
            RecordBatch::Medicines(rows) => self.insert_rows(&rows).await,
            RecordBatch::Staff(rows) => self.insert_rows(&rows).await,
            RecordBatch::InsuranceProviders(rows) => self.insert_rows(&rows).await,
            RecordBatch::InsuranceClaims(rows) => self.insert_rows(&rows).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_prefix_lists_columns_in_order() {
        let prefix = insert_prefix("departments", &["a", "b", "c"]);
        assert_eq!(prefix, "insert into departments (a, b, c) ");
    }

    #[test]
    fn chunking_covers_every_row_exactly_once() {
        let rows: Vec<u32> = (0..2501).collect();
        let chunks: Vec<&[u32]> = rows.chunks(1000).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.iter().map(|chunk| chunk.len()).sum::<usize>(), rows.len());
        assert_eq!(chunks[2].len(), 501);
    }

    #[test]
    fn seeded_tables_cover_all_entities_in_stage_order() {
        assert_eq!(SEEDED_TABLES.len(), 14);
        assert_eq!(SEEDED_TABLES[0].table_name(), "departments");
        assert_eq!(SEEDED_TABLES[13].table_name(), "insurance_claims");
    }
}
