// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/vectors/report.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file renders batch validation results as human-readable text or JSON.

use crate::core::types::BatchReport;
use crate::utils::format::FormatUtils;
use std::fmt::Write;

/// Render the full text report: per-corpus counts, every failure, and totals.
pub fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "NIST SHA3-256 Validation");
    let _ = writeln!(out, "========================");

    for corpus in &report.corpora {
        let outcome = &corpus.outcome;
        let _ = writeln!(
            out,
            "  {}: {} passed, {} failed ({} vectors, {})",
            corpus.name,
            outcome.passed,
            outcome.failed,
            outcome.total,
            corpus.path.display()
        );
        for failure in &outcome.failures {
            let _ = writeln!(
                out,
                "  FAIL: {} Vector {} (Len={})",
                corpus.name, failure.index, failure.length_bits
            );
            let _ = writeln!(out, "    Expected: {}", hex::encode(failure.expected_digest));
            let _ = writeln!(out, "    Got:      {}", hex::encode(failure.computed_digest));
            if let Some(ref message) = failure.message {
                let _ = writeln!(out, "    Input:    {}", hex::encode(message));
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Overall Validation Results:");
    let _ = writeln!(out, "  Total Passed: {}", FormatUtils::format_count(report.total_passed()));
    let _ = writeln!(out, "  Total Failed: {}", FormatUtils::format_count(report.total_failed()));
    let _ = writeln!(out, "  Total Tests:  {}", FormatUtils::format_count(report.total()));
    let _ = writeln!(out);

    if report.all_passed() {
        let _ = writeln!(
            out,
            "SUCCESS: All {} test vectors passed",
            report.total_passed()
        );
    } else {
        let _ = writeln!(out, "FAILURE: {} test vectors failed", report.total_failed());
    }
    let _ = writeln!(
        out,
        "Note: Monte Carlo vectors are not run. The one-shot API is assumed to use fresh state per call."
    );
    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
