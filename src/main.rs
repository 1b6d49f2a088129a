//! Kirana dispatch planner - one-shot planning harness.
//!
//! Reads unbatched order records from a JSON file, runs the batching and
//! sequencing core, and prints the resulting plan as JSON on stdout. The
//! production platform calls the library directly; this binary exists for
//! operators and offline experiments.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use kirana_dispatch::{Config, DispatchPlanner, OrderRecord, PlannerConfig};

fn main() -> Result<()> {
    // Initialize logging on stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();

    let config = Config::from_env()?;

    match args.command {
        cli::Command::Plan { orders, drivers } => {
            let raw = std::fs::read_to_string(&orders)
                .with_context(|| format!("failed to read orders file {}", orders.display()))?;
            let records: Vec<OrderRecord> = serde_json::from_str(&raw)
                .context("orders file is not a JSON array of order records")?;
            info!(orders = records.len(), drivers, "planning dispatch run");

            let planner = DispatchPlanner::new(PlannerConfig::new(config.depot));
            let plan = planner
                .plan(drivers, records)
                .map_err(|e| anyhow::anyhow!("{e} ({})", e.code()))?;

            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
