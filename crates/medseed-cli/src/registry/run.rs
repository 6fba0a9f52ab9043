use std::fs::{create_dir_all, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use medseed_core::{RedactedConnection, SeedConfig};
use medseed_generate::SeedReport;

use super::RegistryResult;

/// Metadata captured at run start.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub run_dir: PathBuf,
    pub config: SeedConfig,
    pub connection: RedactedConnection,
}

impl RunContext {
    pub fn begin(run_dir: PathBuf, config: SeedConfig, connection: RedactedConnection) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            run_dir,
            config,
            connection,
        }
    }
}

/// JSON config written to each run directory.
#[derive(Debug, Serialize)]
struct RunConfig<'a> {
    run_id: &'a str,
    started_at: String,
    seed: u64,
    batch_size: usize,
    counts: &'a medseed_core::EntityCounts,
    connection: &'a RedactedConnection,
}

/// Paths for run artifacts.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub config_path: PathBuf,
    pub logs_path: PathBuf,
    pub report_path: PathBuf,
}

pub fn start_run(ctx: &RunContext) -> RegistryResult<RunPaths> {
    let timestamp = ctx.started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let run_root = ctx.run_dir.join(format!("{timestamp}__run_{}", ctx.run_id));
    create_dir_all(&run_root)?;

    let paths = RunPaths {
        config_path: run_root.join("config.json"),
        logs_path: run_root.join("logs.ndjson"),
        report_path: run_root.join("seed_report.json"),
    };

    write_json(
        &paths.config_path,
        &RunConfig {
            run_id: &ctx.run_id,
            started_at: ctx.started_at.to_rfc3339(),
            seed: ctx.config.seed,
            batch_size: ctx.config.batch_size,
            counts: &ctx.config.counts,
            connection: &ctx.connection,
        },
    )?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.logs_path)?;

    Ok(paths)
}

#[derive(Debug, Serialize)]
struct ReportArtifact<'a> {
    run_id: &'a str,
    #[serde(flatten)]
    report: &'a SeedReport,
}

pub fn write_report(paths: &RunPaths, run_id: &str, report: &SeedReport) -> RegistryResult<()> {
    write_json(&paths.report_path, &ReportArtifact { run_id, report })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> RegistryResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}
