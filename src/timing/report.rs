// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/timing/report.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file renders a leakage verdict in the dudect-style text layout or as JSON.

use crate::core::types::{LeakageVerdict, SamplerConfig};
use crate::utils::format::FormatUtils;
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct TimingReport<'a> {
    config: &'a SamplerConfig,
    verdict: &'a LeakageVerdict,
    difference_ns: f64,
    difference_percent: f64,
}

pub fn render_text(config: &SamplerConfig, verdict: &LeakageVerdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Timing Analysis Results:");
    let _ = writeln!(
        out,
        "Left class (0x{:02x}):  mean={}, std={}",
        config.left_fill,
        FormatUtils::format_nanos(verdict.mean_left),
        FormatUtils::format_nanos(verdict.std_left)
    );
    let _ = writeln!(
        out,
        "Right class (0x{:02x}): mean={}, std={}",
        config.right_fill,
        FormatUtils::format_nanos(verdict.mean_right),
        FormatUtils::format_nanos(verdict.std_right)
    );
    let _ = writeln!(
        out,
        "Difference: {} ({})",
        FormatUtils::format_nanos(verdict.difference()),
        FormatUtils::format_percent(verdict.difference_percent())
    );
    let _ = writeln!(out, "T-statistic: {:.5}", verdict.t_statistic);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "max t = {:.5}, n == {}",
        verdict.t_statistic,
        FormatUtils::format_sample_count(verdict.sample_count)
    );

    if verdict.passed {
        let _ = writeln!(
            out,
            "PASS: No timing difference detected (|t| = {:.5} < {:.1})",
            verdict.t_statistic, verdict.threshold
        );
    } else {
        let _ = writeln!(
            out,
            "FAIL: Timing variation detected (|t| = {:.5} >= {:.1})",
            verdict.t_statistic, verdict.threshold
        );
    }
    out
}

pub fn render_json(config: &SamplerConfig, verdict: &LeakageVerdict) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TimingReport {
        config,
        verdict,
        difference_ns: verdict.difference(),
        difference_percent: verdict.difference_percent(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(passed: bool) -> LeakageVerdict {
        LeakageVerdict {
            mean_left: 100.0,
            mean_right: 300.0,
            std_left: 1.0,
            std_right: 2.0,
            t_statistic: if passed { 0.5 } else { 42.0 },
            threshold: 5.0,
            sample_count: 1000,
            passed,
        }
    }

    #[test]
    fn test_text_report_lines() {
        let text = render_text(&SamplerConfig::default(), &verdict(false));
        assert!(text.contains("Left class (0x00):  mean=100.00 ns"));
        assert!(text.contains("Difference: 200.00 ns (100.00%)"));
        assert!(text.contains("max t = 42.00000, n == 1K"));
        assert!(text.contains("FAIL: Timing variation detected"));
    }

    #[test]
    fn test_json_report_has_verdict() {
        let json = render_json(&SamplerConfig::default(), &verdict(true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"]["passed"], true);
        assert_eq!(value["config"]["samples"], 1000);
        assert_eq!(value["difference_ns"], 200.0);
        assert_eq!(value["verdict"]["t_statistic"], 0.5);
    }

    #[test]
    fn test_json_report_keeps_infinite_statistic() {
        let mut separated = verdict(false);
        separated.t_statistic = f64::INFINITY;
        let json = render_json(&SamplerConfig::default(), &separated).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"]["t_statistic"], "inf");
        assert_eq!(value["verdict"]["passed"], false);
    }
}
