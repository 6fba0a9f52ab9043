mod registry;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use medseed_core::{
    redact_connection_string, EntityCounts, SeedConfig, SinkError, DEFAULT_BATCH_SIZE,
    DEFAULT_SEED,
};
use medseed_generate::{GenerateError, RunClock, SeedEngine};
use medseed_sink::{apply_schema, PgSink};
use registry::{init_run_logging, init_stderr_logging, start_run, write_report, RunContext};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "medseed", version, about = "Synthetic hospital-record seeder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drop and recreate the hospital schema.
    Schema(SchemaArgs),
    /// Generate a full synthetic dataset and insert it.
    Seed(SeedArgs),
}

#[derive(Args, Debug)]
struct ConnArgs {
    /// Database connection string (flag form).
    #[arg(long, value_name = "CONNECTION_STRING", conflicts_with = "conn_pos")]
    conn: Option<String>,
    /// Database connection string (positional form).
    #[arg(value_name = "CONNECTION_STRING")]
    conn_pos: Option<String>,
}

impl ConnArgs {
    /// Flag, positional, or the conventional environment variable.
    fn resolve(self) -> Result<String, CliError> {
        self.conn
            .or(self.conn_pos)
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .ok_or_else(|| {
                CliError::InvalidConfig(
                    "no connection string; pass one or set DATABASE_URL".to_string(),
                )
            })
    }
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[command(flatten)]
    conn: ConnArgs,
}

#[derive(Args, Debug)]
struct SeedArgs {
    #[command(flatten)]
    conn: ConnArgs,
    /// Random seed; equal seeds reproduce identical datasets.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Rows per commit checkpoint.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
    /// Directory for run artifacts.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Schema(args) => run_schema(args).await,
        Command::Seed(args) => run_seed(args).await,
    }
}

async fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    init_stderr_logging()?;
    let conn = args.conn.resolve()?;
    let pool = connect(&conn).await?;
    apply_schema(&pool).await?;
    Ok(())
}

async fn run_seed(args: SeedArgs) -> Result<(), CliError> {
    let conn = args.conn.resolve()?;
    let config = SeedConfig {
        seed: args.seed,
        batch_size: args.batch_size,
        counts: EntityCounts::default(),
    };
    config.validate().map_err(CliError::InvalidConfig)?;

    let ctx = RunContext::begin(args.run_dir, config.clone(), redact_connection_string(&conn));
    let paths = start_run(&ctx)?;
    init_run_logging(&paths.logs_path)?;
    info!(run_id = %ctx.run_id, config = %paths.config_path.display(), "run registered");

    let pool = connect(&conn).await?;
    let mut sink = PgSink::new(pool, config.batch_size);
    sink.preflight().await?;

    let engine = SeedEngine::new(config, RunClock::capture());
    let report = match engine.run(&mut sink).await {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, "seed run failed");
            return Err(err.into());
        }
    };

    write_report(&paths, &ctx.run_id, &report)?;
    info!(report = %paths.report_path.display(), "seed report written");
    Ok(())
}

async fn connect(conn: &str) -> Result<PgPool, CliError> {
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(10))
        .connect(conn)
        .await?;
    Ok(pool)
}
