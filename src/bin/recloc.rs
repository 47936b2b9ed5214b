// src/bin/recloc.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use recloc_core::cli::handlers::{self, AuditArgs, SweepArgs};
use recloc_core::cli::{Cli, Commands};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(2);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Generate { identifier, length } => {
            handlers::handle_generate(identifier, *length)?;
            Ok(true)
        }
        Commands::Find { locator, table } => {
            handlers::handle_find(locator, table)?;
            Ok(true)
        }
        Commands::Audit {
            count,
            length,
            seed,
            expected,
            format,
        } => handlers::handle_audit(&AuditArgs {
            count: *count,
            length: *length,
            seed: seed.clone(),
            expected: expected.clone(),
            format: format.clone(),
        }),
        Commands::Sweep {
            base_count,
            max_multiplier,
            max_length,
            format,
        } => handlers::handle_sweep(&SweepArgs {
            base_count: *base_count,
            max_multiplier: *max_multiplier,
            max_length: *max_length,
            format: format.clone(),
        }),
    }
}
