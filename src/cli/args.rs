use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recloc", version, about = "Deterministic record locators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the locator for one identifier
    Generate {
        identifier: String,
        /// Locator length (defaults to config, then 4)
        #[arg(long, short)]
        length: Option<usize>,
    },
    /// Reverse-lookup an identifier from a locator table
    Find {
        locator: String,
        /// JSON file mapping identifiers to locators
        #[arg(long, value_name = "FILE")]
        table: PathBuf,
    },
    /// Audit one batch for collisions
    Audit {
        /// Synthetic batch size
        #[arg(long, default_value = "10000")]
        count: usize,
        #[arg(long, short)]
        length: Option<usize>,
        /// Seed string for the synthetic batch
        #[arg(long, default_value = "audit")]
        seed: String,
        /// Audit the identifiers of this JSON reference table instead,
        /// and require exact equality against it
        #[arg(long, value_name = "FILE")]
        expected: Option<PathBuf>,
        #[arg(long, default_value = "terminal")]
        format: String,
    },
    /// Sweep a matrix of batch sizes and locator lengths
    Sweep {
        #[arg(long)]
        base_count: Option<usize>,
        #[arg(long)]
        max_multiplier: Option<usize>,
        #[arg(long)]
        max_length: Option<usize>,
        #[arg(long, default_value = "terminal")]
        format: String,
    },
}
