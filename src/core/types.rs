// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for the validator, located in the
// core subdirectory. It includes command-line arguments for both runners, test
// vector records, validation outcomes, timing samples, and leakage verdicts.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde, hex

use clap::Parser;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Size of a SHA3-256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Default number of timed calls per input class
pub const DEFAULT_SAMPLES: usize = 1000;

/// Default timing input size in bytes
pub const DEFAULT_INPUT_SIZE: usize = 64;

/// Default t-statistic threshold (dudect convention)
pub const DEFAULT_THRESHOLD: f64 = 5.0;

pub type Digest = [u8; DIGEST_LEN];

fn serialize_hex<S: Serializer, T: AsRef<[u8]>>(bytes: T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

fn serialize_opt_hex<S: Serializer>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
    match bytes {
        Some(b) => serializer.serialize_some(&hex::encode(b)),
        None => serializer.serialize_none(),
    }
}

/// Finite values stay JSON numbers; infinities and NaN become "inf", "-inf", "nan"
fn serialize_statistic<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

/// One known-answer test vector: a message and its expected digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    /// Message length in bits, as written in the `Len = ` line
    pub length_bits: u64,

    /// Message bytes; empty when `length_bits == 0`
    #[serde(serialize_with = "serialize_hex")]
    pub message: Vec<u8>,

    /// Expected digest from the `MD = ` line
    #[serde(serialize_with = "serialize_hex")]
    pub expected_digest: Digest,
}

impl TestRecord {
    pub fn new(length_bits: u64) -> Self {
        Self {
            length_bits,
            message: Vec::new(),
            expected_digest: [0u8; DIGEST_LEN],
        }
    }

    /// Message length in whole bytes
    pub fn byte_len(&self) -> usize {
        (self.length_bits / 8) as usize
    }
}

/// A vector whose computed digest did not match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorFailure {
    /// 1-based position in the corpus
    pub index: usize,
    pub length_bits: u64,
    #[serde(serialize_with = "serialize_hex")]
    pub expected_digest: Digest,
    #[serde(serialize_with = "serialize_hex")]
    pub computed_digest: Digest,
    /// Only present for non-empty messages
    #[serde(serialize_with = "serialize_opt_hex")]
    pub message: Option<Vec<u8>>,
}

/// Result of running one batch of vectors through the hash under test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<VectorFailure>,
}

impl ValidationOutcome {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// One validated corpus file
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    /// Display name, e.g. "SHA3_256ShortMsg"
    pub name: String,
    pub path: PathBuf,
    pub outcome: ValidationOutcome,
}

/// Aggregate over every corpus supplied to the runner
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub corpora: Vec<CorpusReport>,
}

impl BatchReport {
    pub fn total_passed(&self) -> usize {
        self.corpora.iter().map(|c| c.outcome.passed).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.corpora.iter().map(|c| c.outcome.failed).sum()
    }

    pub fn total(&self) -> usize {
        self.corpora.iter().map(|c| c.outcome.total).sum()
    }

    pub fn all_passed(&self) -> bool {
        self.total_failed() == 0
    }
}

/// Raw latency samples (nanoseconds) for the two input classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimingSamples {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

impl TimingSamples {
    pub fn new(left: Vec<i64>, right: Vec<i64>) -> Self {
        Self { left, right }
    }

    /// Per-class sample count (left class; both are equal when well formed)
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Timing sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamplerConfig {
    pub samples: usize,
    pub input_size: usize,
    pub left_fill: u8,
    pub right_fill: u8,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            input_size: DEFAULT_INPUT_SIZE,
            left_fill: 0x00,
            right_fill: 0xFF,
        }
    }
}

/// Statistical summary and pass/fail decision for one timing run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeakageVerdict {
    pub mean_left: f64,
    pub mean_right: f64,
    pub std_left: f64,
    pub std_right: f64,
    /// Infinite when both classes have zero variance but different means
    #[serde(serialize_with = "serialize_statistic")]
    pub t_statistic: f64,
    pub threshold: f64,
    pub sample_count: usize,
    pub passed: bool,
}

impl LeakageVerdict {
    /// Absolute difference between class means in nanoseconds
    pub fn difference(&self) -> f64 {
        (self.mean_left - self.mean_right).abs()
    }

    /// Difference as a percentage of the average of both means
    pub fn difference_percent(&self) -> f64 {
        let average = (self.mean_left + self.mean_right) / 2.0;
        if average == 0.0 {
            0.0
        } else {
            100.0 * self.difference() / average
        }
    }
}

/// Parse a fill byte given as decimal ("255") or hex ("0xff")
pub fn parse_fill_byte(value: &str) -> Result<u8, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex_digits) => u8::from_str_radix(hex_digits, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|_| format!("'{}' is not a byte value (use 0-255 or 0x00-0xff)", value))
}

/// Command-line arguments for the NIST vector runner
#[derive(Parser, Debug)]
#[command(
    name = "sha3-validator",
    version,
    about = "Validate a SHA3-256 implementation against NIST CAVS test vectors",
    long_about = "Runs every Len/Msg/MD vector in the supplied .rsp files through the hash under test\n\
                  and reports mismatches with full diagnostic context.\n\n\
                  Monte Carlo vectors are not supported: the one-shot hash API is assumed to use\n\
                  fresh state for every call.\n\n\
                  Examples:\n\
                    sha3-validator SHA3_256ShortMsg.rsp SHA3_256LongMsg.rsp\n\
                    sha3-validator --json SHA3_256ShortMsg.rsp"
)]
pub struct VectorArgs {
    /// NIST response files (.rsp) to validate, processed in order
    #[arg(value_name = "FILE", required = true)]
    pub corpora: Vec<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Log progress every N vectors (0 disables progress lines)
    #[arg(long, default_value = "25", value_name = "N")]
    pub progress_interval: usize,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// log4rs YAML configuration file; overrides --log-level
    #[arg(long, value_name = "PATH")]
    pub log_config: Option<PathBuf>,
}

impl VectorArgs {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.corpora.is_empty() {
            return Err("At least one test vector file is required".to_string());
        }
        validate_log_level(&self.log_level)
    }
}

/// Command-line arguments for the timing runner
#[derive(Parser, Debug)]
#[command(
    name = "timing_test",
    version,
    about = "dudect-style timing analysis of a SHA3-256 implementation",
    long_about = "Times the hash under test on two fixed input classes (by default all-zero and\n\
                  all-0xFF bytes) and compares them with a pooled two-sample t-test.\n\n\
                  A PASS only means no significant timing difference was observed for these\n\
                  two classes at this sample size.\n\n\
                  Examples:\n\
                    timing_test\n\
                    timing_test --samples 100000 --input-size 136"
)]
pub struct TimingArgs {
    /// Timed calls per input class
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES, value_name = "COUNT")]
    pub samples: usize,

    /// Input size in bytes for both classes
    #[arg(long, default_value_t = DEFAULT_INPUT_SIZE, value_name = "BYTES")]
    pub input_size: usize,

    /// Fill byte for the left input class
    #[arg(long, default_value = "0x00", value_parser = parse_fill_byte, value_name = "BYTE")]
    pub left_fill: u8,

    /// Fill byte for the right input class
    #[arg(long, default_value = "0xff", value_parser = parse_fill_byte, value_name = "BYTE")]
    pub right_fill: u8,

    /// |t| at or above this value fails the run
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_name = "T")]
    pub threshold: f64,

    /// Print the report as JSON instead of text
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// log4rs YAML configuration file; overrides --log-level
    #[arg(long, value_name = "PATH")]
    pub log_config: Option<PathBuf>,
}

impl TimingArgs {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.samples < 2 {
            return Err("Sample count must be at least 2 (variance needs N-1 > 0)".to_string());
        }
        if self.input_size == 0 {
            return Err("Input size must be greater than 0 bytes".to_string());
        }
        if self.left_fill == self.right_fill {
            return Err("Left and right fill bytes must differ".to_string());
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err("Threshold must be a positive number".to_string());
        }
        validate_log_level(&self.log_level)
    }

    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            samples: self.samples,
            input_size: self.input_size,
            left_fill: self.left_fill,
            right_fill: self.right_fill,
        }
    }
}

fn validate_log_level(level: &str) -> Result<(), String> {
    match level.parse::<log::LevelFilter>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "Invalid log level '{}'. Use: off, error, warn, info, debug, trace",
            level
        )),
    }
}
