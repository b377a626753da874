// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/timing/analyzer.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file turns two timing populations into a leakage verdict using a
// pooled-variance two-sample t-test, which matches Welch's test when both
// classes have the same sample count.
//
// Known limitations: fixed threshold and sample count, a single pass, no
// percentile cropping, and no higher-order moments. A pass means no
// significant difference was observed at this sample size, nothing more.
//
// Tree Location:
// - src/timing/analyzer.rs (leakage statistics)
// - Depends on: core/types, core/error, log

use crate::core::error::{HarnessError, Result};
use crate::core::types::{DEFAULT_THRESHOLD, LeakageVerdict, TimingSamples};
use log::debug;

const LOG_TARGET: &str = "sha3::validator::analyzer";

/// Mean and Bessel-corrected variance of one sample class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    pub mean: f64,
    pub variance: f64,
}

impl ClassStats {
    /// Requires at least two samples.
    pub fn from_samples(samples: &[i64]) -> Result<Self> {
        let n = samples.len();
        if n < 2 {
            return Err(HarnessError::InsufficientSamples { count: n });
        }
        let mean = samples.iter().map(|&t| t as f64).sum::<f64>() / n as f64;
        let sum_sq = samples
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum::<f64>();
        Ok(Self {
            mean,
            variance: sum_sq / (n - 1) as f64,
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

pub struct LeakageAnalyzer {
    threshold: f64,
}

impl Default for LeakageAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl LeakageAnalyzer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn analyze(&self, samples: &TimingSamples) -> Result<LeakageVerdict> {
        let (left_n, right_n) = (samples.left.len(), samples.right.len());
        if left_n.min(right_n) < 2 {
            return Err(HarnessError::InsufficientSamples {
                count: left_n.min(right_n),
            });
        }
        if left_n != right_n {
            return Err(HarnessError::SampleCountMismatch {
                left: left_n,
                right: right_n,
            });
        }

        let left = ClassStats::from_samples(&samples.left)?;
        let right = ClassStats::from_samples(&samples.right)?;
        let t_statistic = t_statistic(&left, &right, left_n);

        debug!(target: LOG_TARGET,
            "n={} mean_l={:.2} mean_r={:.2} var_l={:.2} var_r={:.2} t={:.5}",
            left_n, left.mean, right.mean, left.variance, right.variance, t_statistic
        );

        Ok(LeakageVerdict {
            mean_left: left.mean,
            mean_right: right.mean,
            std_left: left.std_dev(),
            std_right: right.std_dev(),
            t_statistic,
            threshold: self.threshold,
            sample_count: left_n,
            passed: t_statistic < self.threshold,
        })
    }
}

/// `|mean_l - mean_r| / (sqrt((var_l + var_r) / 2) * sqrt(2 / n))`
///
/// With zero variance in both classes the statistic is 0 for equal means and
/// infinite otherwise.
fn t_statistic(left: &ClassStats, right: &ClassStats, n: usize) -> f64 {
    let diff = (left.mean - right.mean).abs();
    let pooled_std = ((left.variance + right.variance) / 2.0).sqrt();
    let denominator = pooled_std * (2.0 / n as f64).sqrt();
    if denominator == 0.0 {
        if diff == 0.0 { 0.0 } else { f64::INFINITY }
    } else {
        diff / denominator
    }
}

/// Analyze with the default 5.0 threshold.
pub fn analyze(samples: &TimingSamples) -> Result<LeakageVerdict> {
    LeakageAnalyzer::default().analyze(samples)
}
