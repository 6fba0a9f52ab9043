//! Schema DDL application.

use sqlx::PgPool;
use tracing::info;

use medseed_core::SinkError;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Drop and recreate every seeded table.
///
/// Statements run one at a time in script order; the first failure aborts
/// with the offending statement named.
pub async fn apply_schema(pool: &PgPool) -> Result<(), SinkError> {
    let mut applied = 0_usize;
    for statement in SCHEMA_SQL.split(';') {
        let sql = statement.trim();
        if sql.is_empty() {
            continue;
        }
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|err| SinkError::Db(format!("{}: {err}", summarize(sql))))?;
        applied += 1;
    }
    info!(statements = applied, "schema applied");
    Ok(())
}

fn summarize(sql: &str) -> &str {
    sql.lines().next().unwrap_or(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_script_splits_into_drop_and_create_statements() {
        let statements: Vec<&str> = SCHEMA_SQL
            .split(';')
            .map(str::trim)
            .filter(|sql| !sql.is_empty())
            .collect();
        // 14 drops followed by 14 creates.
        assert_eq!(statements.len(), 28);
        assert!(statements[..14].iter().all(|sql| sql.starts_with("drop table")));
        assert!(statements[14..].iter().all(|sql| sql.starts_with("create table")));
    }

    #[test]
    fn summarize_reports_the_statement_head() {
        assert_eq!(summarize("create table x (\n  id int\n)"), "create table x (");
    }
}
