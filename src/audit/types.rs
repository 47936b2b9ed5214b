// src/audit/types.rs
//! Core types for the collision audit system.
//!
//! These represent the outcome of auditing one batch (an `AuditRun`) and of
//! sweeping a matrix of (batch size, locator length) combinations
//! (a `SweepReport`).

use serde::Serialize;

/// A single failed invariant check, with the entries implicated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum CheckFailure {
    /// The input batch itself contained repeated identifiers. This
    /// invalidates the run rather than indicting the generator.
    DuplicateIdentifiers {
        /// Identifiers appearing more than once in the batch.
        identifiers: Vec<String>,
    },
    /// Two or more distinct identifiers mapped to the same locator.
    LocatorCollision {
        /// The shared locator.
        locator: String,
        /// Every identifier that produced it, in batch order.
        identifiers: Vec<String>,
    },
    /// The computed mapping diverged from the supplied reference mapping.
    ReferenceMismatch {
        identifier: String,
        /// Reference value, `None` when the identifier was not expected.
        expected: Option<String>,
        /// Computed value, `None` when the identifier was not computed.
        actual: Option<String>,
    },
}

impl CheckFailure {
    /// Returns the name of the check that failed, for display.
    #[must_use]
    pub fn check_name(&self) -> &'static str {
        match self {
            Self::DuplicateIdentifiers { .. } => "key-uniqueness",
            Self::LocatorCollision { .. } => "value-uniqueness",
            Self::ReferenceMismatch { .. } => "reference-equality",
        }
    }
}

/// The outcome of auditing one batch at one locator length.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRun {
    /// Locator length used for this run.
    pub length: usize,
    /// Number of identifiers processed.
    pub tested: usize,
    /// Distinct locators produced.
    pub distinct_locators: usize,
    /// Every check failure observed. Empty means the run passed.
    pub failures: Vec<CheckFailure>,
}

impl AuditRun {
    /// Whether every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of colliding locators in this run.
    #[must_use]
    pub fn collision_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| matches!(f, CheckFailure::LocatorCollision { .. }))
            .count()
    }
}

/// One cell of a sweep: a batch size / locator length combination.
#[derive(Debug, Clone, Serialize)]
pub struct SweepCell {
    /// Batch size for this cell.
    pub size: usize,
    /// The audit outcome.
    pub run: AuditRun,
}

/// The complete sweep report.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SweepReport {
    /// Every cell audited, in sweep order.
    pub cells: Vec<SweepCell>,
    /// Summary statistics.
    pub stats: SweepStats,
}

/// Summary statistics for a sweep.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SweepStats {
    /// Total cells audited.
    pub cells_audited: usize,
    /// Total identifiers processed across all cells.
    pub identifiers_tested: usize,
    /// Cells with at least one failed check.
    pub cells_failed: usize,
    /// Sweep duration in milliseconds.
    pub duration_ms: u128,
}

impl SweepReport {
    /// Whether every cell passed every check.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.cells.iter().all(|c| c.run.passed())
    }

    /// Combined failure message naming every failing combination, in the
    /// order tested. Empty string when the sweep passed.
    #[must_use]
    pub fn failure_summary(&self) -> String {
        let mut msg = String::new();
        for cell in &self.cells {
            if !cell.run.passed() {
                msg.push_str(&format!(
                    "Failed locator length {} with {} identifiers. ",
                    cell.run.length, cell.size
                ));
            }
        }
        msg
    }

    /// For each length, the smallest tested batch size at which a locator
    /// collision appeared, reported as `(length, size)` pairs.
    #[must_use]
    pub fn collision_onsets(&self) -> Vec<(usize, usize)> {
        let mut onsets: Vec<(usize, usize)> = Vec::new();
        for cell in &self.cells {
            if cell.run.collision_count() == 0 {
                continue;
            }
            match onsets.iter_mut().find(|(l, _)| *l == cell.run.length) {
                Some((_, size)) => *size = (*size).min(cell.size),
                None => onsets.push((cell.run.length, cell.size)),
            }
        }
        onsets
    }
}
