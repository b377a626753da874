// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for formatting report values, located
// in the utils subdirectory. It formats latencies, percentages, vector counts
// and sample counts for consistent output in logs and reports.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

/// Utility functions for formatting validator output
pub struct FormatUtils;

impl FormatUtils {
    /// Format a latency in appropriate units (ns, µs, ms)
    pub fn format_nanos(nanos: f64) -> String {
        if !nanos.is_finite() {
            format!("{} ns", nanos)
        } else if nanos.abs() >= 1_000_000.0 {
            format!("{:.2} ms", nanos / 1_000_000.0)
        } else if nanos.abs() >= 1_000.0 {
            format!("{:.2} µs", nanos / 1_000.0)
        } else {
            format!("{:.2} ns", nanos)
        }
    }

    /// Format a percentage with two decimals
    pub fn format_percent(percent: f64) -> String {
        format!("{:.2}%", percent)
    }

    /// Format an exact count with thousands separators
    pub fn format_count(count: usize) -> String {
        let digits = count.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format a per-class sample count the way dudect does (1000 -> "1K")
    pub fn format_sample_count(samples: usize) -> String {
        if samples >= 1_000_000 && samples % 1_000_000 == 0 {
            format!("{}M", samples / 1_000_000)
        } else if samples >= 1_000 && samples % 1_000 == 0 {
            format!("{}K", samples / 1_000)
        } else {
            samples.to_string()
        }
    }
}


// Changelog:
// - v1.0.0 (2026-10-16): Formatting helpers for validator reports.
//   - Purpose: Keeps latency, percentage and count formatting consistent across
//     the vector report, the timing report and log lines.
//   - Features: ns/µs/ms latency units, thousands separators for vector counts,
//     and dudect-style K/M sample counts.
