// src/audit/report.rs
//! Output formatting for audit runs and sweep reports.
//!
//! Terminal output is for humans; the JSON format is stable and intended
//! for machine consumption.

use super::types::{AuditRun, CheckFailure, SweepReport};
use colored::Colorize;
use std::fmt::Write;

/// Formats a single audit run for terminal display.
#[must_use]
pub fn format_run_terminal(run: &AuditRun) -> String {
    let mut out = String::new();

    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    writeln!(out, "{}", " 🔍 COLLISION AUDIT ".cyan().bold()).ok();
    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    writeln!(out).ok();

    writeln!(
        out,
        "   Identifiers tested: {}",
        run.tested.to_string().white()
    )
    .ok();
    writeln!(out, "   Locator length:     {}", run.length).ok();
    writeln!(out, "   Distinct locators:  {}", run.distinct_locators).ok();
    writeln!(out).ok();

    if run.passed() {
        writeln!(
            out,
            "{}",
            format!("✅ No clash found with {} identifiers.", run.tested)
                .green()
                .bold()
        )
        .ok();
    } else {
        write_failures(&mut out, &run.failures);
    }

    writeln!(out).ok();
    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    out
}

/// Formats a sweep report for terminal display.
#[must_use]
pub fn format_sweep_terminal(report: &SweepReport) -> String {
    let mut out = String::new();

    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    writeln!(out, "{}", " 🔍 COLLISION SWEEP ".cyan().bold()).ok();
    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    writeln!(out).ok();

    writeln!(out, "{}", "📊 SUMMARY".cyan().bold()).ok();
    writeln!(out).ok();
    writeln!(
        out,
        "   Cells audited:      {}",
        report.stats.cells_audited.to_string().white()
    )
    .ok();
    writeln!(
        out,
        "   Identifiers tested: {}",
        report.stats.identifiers_tested.to_string().white()
    )
    .ok();
    writeln!(
        out,
        "   Cells failed:       {}",
        format_count(report.stats.cells_failed)
    )
    .ok();
    writeln!(
        out,
        "   Sweep time:         {}ms",
        report.stats.duration_ms.to_string().white()
    )
    .ok();
    writeln!(out).ok();

    for cell in &report.cells {
        let verdict = if cell.run.passed() {
            "pass".green()
        } else {
            "FAIL".red().bold()
        };
        writeln!(
            out,
            "   length {} × {:>5} identifiers  {}  ({} distinct, {} collisions)",
            cell.run.length,
            cell.size,
            verdict,
            cell.run.distinct_locators,
            cell.run.collision_count()
        )
        .ok();
    }
    writeln!(out).ok();

    let onsets = report.collision_onsets();
    if !onsets.is_empty() {
        writeln!(out, "{}", "💥 COLLISION ONSET".cyan().bold()).ok();
        writeln!(out).ok();
        for (length, size) in onsets {
            writeln!(
                out,
                "   length {}: first collision within {} identifiers",
                length,
                size.to_string().yellow()
            )
            .ok();
        }
        writeln!(out).ok();
    }

    if report.passed() {
        writeln!(out, "{}", "✅ All combinations clean.".green().bold()).ok();
    } else {
        writeln!(out, "{}", report.failure_summary().trim_end().red()).ok();
    }

    writeln!(out).ok();
    writeln!(out, "{}", "─".repeat(70).dimmed()).ok();
    out
}

/// Formats a single audit run as JSON for machine consumption.
#[must_use]
pub fn format_run_json(run: &AuditRun) -> String {
    serde_json::to_string_pretty(run).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a sweep report as JSON for machine consumption.
#[must_use]
pub fn format_sweep_json(report: &SweepReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

fn write_failures(out: &mut String, failures: &[CheckFailure]) {
    writeln!(
        out,
        "{}",
        format!("❌ {} check failure(s)", failures.len()).red().bold()
    )
    .ok();
    writeln!(out).ok();

    for failure in failures {
        match failure {
            CheckFailure::DuplicateIdentifiers { identifiers } => {
                writeln!(
                    out,
                    "   [{}] {} duplicated identifier(s) in batch:",
                    failure.check_name().red(),
                    identifiers.len()
                )
                .ok();
                for id in identifiers {
                    writeln!(out, "      {}", id.dimmed()).ok();
                }
            }
            CheckFailure::LocatorCollision {
                locator,
                identifiers,
            } => {
                writeln!(
                    out,
                    "   [{}] locator {} issued to {} identifiers:",
                    failure.check_name().red(),
                    locator.yellow().bold(),
                    identifiers.len()
                )
                .ok();
                for id in identifiers {
                    writeln!(out, "      {}", id.dimmed()).ok();
                }
            }
            CheckFailure::ReferenceMismatch {
                identifier,
                expected,
                actual,
            } => {
                writeln!(
                    out,
                    "   [{}] {}: expected {}, got {}",
                    failure.check_name().red(),
                    identifier,
                    render_entry(expected.as_deref()),
                    render_entry(actual.as_deref())
                )
                .ok();
            }
        }
    }
}

fn render_entry(value: Option<&str>) -> String {
    match value {
        Some(v) => v.yellow().to_string(),
        None => "<absent>".dimmed().to_string(),
    }
}

fn format_count(n: usize) -> String {
    if n == 0 {
        "0".dimmed().to_string()
    } else {
        n.to_string().red().to_string()
    }
}
