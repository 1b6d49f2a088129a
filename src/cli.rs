//! CLI argument parsing for the kirana-dispatch binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kirana-dispatch", about = "Kirana delivery batch planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a dispatch plan from an orders file and print it as JSON
    Plan {
        /// Path to a JSON array of unbatched order records
        #[arg(long)]
        orders: PathBuf,
        /// Number of active drivers to batch for
        #[arg(long)]
        drivers: usize,
    },
}
