//! negotiation-worker: runs analytics jobs from a file or stdin.
//!
//! Input is JSON lines (one `{"task": ..., "payload": ...}` job per line) or,
//! with `--document`, a single YAML/JSON document holding one job or a list.
//! One report is written to stdout per job, in input order. Logs go to stderr.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use negotiation_analytics::adapters::SystemClock;
use negotiation_analytics::application::{AnalyticsJob, JobDispatcher};
use negotiation_analytics::config::{AppConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "negotiation-worker")]
#[command(about = "Outcome analytics worker for multi-party negotiations")]
struct Cli {
    /// Job input file; stdin when omitted
    input: Option<PathBuf>,

    /// Configuration file (YAML, TOML or JSON)
    #[arg(short, long, env = "NEGOTIATION_ANALYTICS_CONFIG")]
    config: Option<PathBuf>,

    /// Treat the input as one YAML/JSON document instead of JSON lines
    #[arg(long)]
    document: bool,

    /// Exit non-zero if any job fails
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging)?;

    info!(
        grid_resolution = config.engine.grid_resolution,
        combination_cap = config.engine.combination_cap,
        max_concurrent_jobs = config.worker.max_concurrent_jobs,
        "Starting negotiation-worker"
    );

    let input = read_input(cli.input.as_ref())?;
    let batch = if cli.document {
        AnalyticsJob::batch_from_document(&input)
            .context("Failed to parse job document")?
            .into_iter()
            .map(Ok)
            .collect()
    } else {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(AnalyticsJob::from_json_line)
            .collect::<Vec<_>>()
    };

    let dispatcher = JobDispatcher::new(&config.engine, &config.worker, Arc::new(SystemClock));
    let reports = dispatcher.dispatch_all(batch).await;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for report in &reports {
        serde_json::to_writer(&mut out, report)?;
        writeln!(out)?;
    }
    out.flush()?;

    let failed = reports.iter().filter(|report| !report.is_success()).count();
    info!(jobs = reports.len(), failed, "Batch complete");

    if cli.strict && failed > 0 {
        warn!(failed, "Exiting with failure status");
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(logging.env_filter()?);

    if logging.use_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
