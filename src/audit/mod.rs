// src/audit/mod.rs
//! Collision audit system for the locator generator.
//!
//! An audit run derives locators for a whole batch of identifiers and
//! checks three invariants over the resulting mapping:
//! - **Key uniqueness**: the batch itself contained no repeated identifiers
//! - **Value uniqueness**: no two identifiers shared a locator
//! - **Reference equality**: the mapping reproduces a previously recorded
//!   fixture exactly (regression guard for the frozen algorithm)
//!
//! Failures are collected, never raised on first occurrence, so one run can
//! surface several simultaneous defects. Sweep mode repeats the procedure
//! over a matrix of (batch size, locator length) combinations.

pub mod report;
pub mod synth;
pub mod types;

pub use types::{AuditRun, CheckFailure, SweepCell, SweepReport, SweepStats};

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::locator;

/// Options for sweep mode.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Base batch size; cell size is `base_count * multiplier * length`.
    pub base_count: usize,
    /// Multipliers run from 1 to this value inclusive.
    pub max_multiplier: usize,
    /// Locator lengths run from 1 to this value inclusive.
    pub max_length: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            base_count: 50,
            max_multiplier: 4,
            max_length: 6,
        }
    }
}

/// Derives the identifier→locator mapping for a batch.
///
/// Repeated identifiers collapse into one entry; `audit_batch` is what
/// notices and reports that.
///
/// # Errors
/// Returns `InvalidLength` if `length` is zero.
pub fn build_mapping(identifiers: &[String], length: usize) -> Result<HashMap<String, String>> {
    let mut mapping = HashMap::with_capacity(identifiers.len());
    for id in identifiers {
        let loc = locator::generate(id, length)?;
        mapping.insert(id.clone(), loc);
    }
    Ok(mapping)
}

/// Audits one batch at one locator length.
///
/// Runs every check and collects every failure; a failing check never
/// short-circuits the rest of the run.
///
/// # Errors
/// Returns `InvalidLength` if `length` is zero.
pub fn audit_batch(
    identifiers: &[String],
    length: usize,
    expected: Option<&HashMap<String, String>>,
) -> Result<AuditRun> {
    let mapping = build_mapping(identifiers, length)?;
    let mut failures = Vec::new();

    check_key_uniqueness(identifiers, &mapping, &mut failures);
    let distinct_locators = check_value_uniqueness(identifiers, &mapping, &mut failures);
    if let Some(reference) = expected {
        check_reference_equality(&mapping, reference, &mut failures);
    }

    Ok(AuditRun {
        length,
        tested: identifiers.len(),
        distinct_locators,
        failures,
    })
}

/// Repeats the full audit over the configured size/length matrix.
///
/// Every cell synthesizes its own deterministic batch (seed
/// `"sweep/{length}/{size}"`) and runs to completion; a failing cell never
/// stops the sweep.
///
/// # Errors
/// Returns error only if a cell cannot be audited at all.
pub fn sweep(options: &SweepOptions) -> Result<SweepReport> {
    let start = Instant::now();
    let mut cells = Vec::new();
    let mut identifiers_tested = 0;

    for length in 1..=options.max_length {
        for multiplier in 1..=options.max_multiplier {
            let size = options.base_count * multiplier * length;
            let batch = synth::synthesize(size, &format!("sweep/{length}/{size}"));
            let run = audit_batch(&batch, length, None)?;
            identifiers_tested += size;
            cells.push(SweepCell { size, run });
        }
    }

    let stats = SweepStats {
        cells_audited: cells.len(),
        identifiers_tested,
        cells_failed: cells.iter().filter(|c| !c.run.passed()).count(),
        duration_ms: start.elapsed().as_millis(),
    };

    Ok(SweepReport { cells, stats })
}

fn check_key_uniqueness(
    identifiers: &[String],
    mapping: &HashMap<String, String>,
    failures: &mut Vec<CheckFailure>,
) {
    if mapping.len() == identifiers.len() {
        return;
    }
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for id in identifiers {
        if !seen.insert(id.as_str()) && !duplicates.contains(id) {
            duplicates.push(id.clone());
        }
    }
    failures.push(CheckFailure::DuplicateIdentifiers {
        identifiers: duplicates,
    });
}

/// Groups distinct identifiers by locator and reports every group of two
/// or more. Returns the distinct locator count.
fn check_value_uniqueness(
    identifiers: &[String],
    mapping: &HashMap<String, String>,
    failures: &mut Vec<CheckFailure>,
) -> usize {
    let mut seen = HashSet::new();
    let mut by_locator: HashMap<&str, Vec<&str>> = HashMap::new();
    for id in identifiers {
        if !seen.insert(id.as_str()) {
            continue;
        }
        by_locator
            .entry(mapping[id].as_str())
            .or_default()
            .push(id);
    }

    let distinct = by_locator.len();

    let mut collisions: Vec<(&str, Vec<&str>)> = by_locator
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .collect();
    // Locator order, so reports are stable run to run.
    collisions.sort_by(|a, b| a.0.cmp(b.0));

    for (loc, ids) in collisions {
        failures.push(CheckFailure::LocatorCollision {
            locator: loc.to_string(),
            identifiers: ids.into_iter().map(String::from).collect(),
        });
    }

    distinct
}

fn check_reference_equality(
    mapping: &HashMap<String, String>,
    reference: &HashMap<String, String>,
    failures: &mut Vec<CheckFailure>,
) {
    let mut keys: Vec<&String> = reference.keys().chain(mapping.keys()).collect();
    keys.sort();
    keys.dedup();

    for key in keys {
        let expected = reference.get(key);
        let actual = mapping.get(key);
        if expected != actual {
            failures.push(CheckFailure::ReferenceMismatch {
                identifier: key.clone(),
                expected: expected.cloned(),
                actual: actual.cloned(),
            });
        }
    }
}
