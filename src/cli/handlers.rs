// src/cli/handlers.rs
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::audit::{self, report, SweepOptions};
use crate::config::Config;
use crate::error::ReclocError;
use crate::locator;

/// Arguments for the audit command.
#[derive(Debug, Clone)]
pub struct AuditArgs {
    pub count: usize,
    pub length: Option<usize>,
    pub seed: String,
    pub expected: Option<PathBuf>,
    pub format: String,
}

/// Arguments for the sweep command.
#[derive(Debug, Clone, Default)]
pub struct SweepArgs {
    pub base_count: Option<usize>,
    pub max_multiplier: Option<usize>,
    pub max_length: Option<usize>,
    pub format: String,
}

/// Handles the generate command.
///
/// # Errors
/// Returns error for a zero length.
pub fn handle_generate(identifier: &str, length: Option<usize>) -> Result<()> {
    let config = Config::load();
    let length = length.unwrap_or(config.locator.length);
    let locator = locator::generate(identifier, length)?;
    println!("{locator}");
    Ok(())
}

/// Handles the find command.
///
/// # Errors
/// Returns error if the table cannot be read or the locator is absent.
pub fn handle_find(locator: &str, table: &Path) -> Result<()> {
    let mapping = load_table(table)?;
    let reverse_index: HashMap<String, String> =
        mapping.into_iter().map(|(id, loc)| (loc, id)).collect();
    let identifier = locator::find(locator, &reverse_index)?;
    println!("{identifier}");
    Ok(())
}

/// Handles the audit command. Returns whether the run passed.
///
/// # Errors
/// Returns error if the reference table cannot be read or the audit
/// cannot run.
pub fn handle_audit(args: &AuditArgs) -> Result<bool> {
    let config = Config::load();
    let length = args.length.unwrap_or(config.locator.length);

    let (batch, reference) = match &args.expected {
        Some(path) => {
            let reference = load_table(path)?;
            let mut identifiers: Vec<String> = reference.keys().cloned().collect();
            identifiers.sort();
            (identifiers, Some(reference))
        }
        None => (audit::synth::synthesize(args.count, &args.seed), None),
    };

    eprintln!(
        "{}",
        format!("Testing {} identifiers.", batch.len()).dimmed()
    );
    let run = audit::audit_batch(&batch, length, reference.as_ref())?;

    let output = match args.format.as_str() {
        "json" => report::format_run_json(&run),
        _ => report::format_run_terminal(&run),
    };
    println!("{output}");

    Ok(run.passed())
}

/// Handles the sweep command. Returns whether every cell passed.
///
/// # Errors
/// Returns error if a cell cannot be audited.
pub fn handle_sweep(args: &SweepArgs) -> Result<bool> {
    let config = Config::load();
    let options = SweepOptions {
        base_count: args.base_count.unwrap_or(config.sweep.base_count),
        max_multiplier: args.max_multiplier.unwrap_or(config.sweep.max_multiplier),
        max_length: args.max_length.unwrap_or(config.sweep.max_length),
    };

    let report = audit::sweep(&options)?;

    let output = match args.format.as_str() {
        "json" => report::format_sweep_json(&report),
        _ => report::format_sweep_terminal(&report),
    };
    println!("{output}");

    Ok(report.passed())
}

/// Reads a JSON identifier→locator table from disk.
///
/// # Errors
/// Returns `Io` (with the offending path) if the file cannot be read, or
/// `Json` if it does not parse as a string-to-string mapping.
pub fn load_table(path: &Path) -> crate::error::Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|source| ReclocError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let mapping = serde_json::from_str(&content)?;
    Ok(mapping)
}
