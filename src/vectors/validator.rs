// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/vectors/validator.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file runs parsed test vectors through the hash under test and collects
// pass/fail counts. A digest mismatch is recorded and reported, never raised,
// so one run surfaces every failing vector.
//
// Tree Location:
// - src/vectors/validator.rs (batch validation engine)
// - Depends on: core/hasher, core/types, vectors/parser, log

use crate::core::error::Result;
use crate::core::hasher::HashUnderTest;
use crate::core::types::{CorpusReport, TestRecord, ValidationOutcome, VectorFailure};
use crate::vectors::parser::VectorCorpusParser;
use log::{info, warn};
use std::path::Path;

const LOG_TARGET: &str = "sha3::validator::batch";

/// Progress is logged every this many vectors unless overridden
pub const DEFAULT_PROGRESS_INTERVAL: usize = 25;

/// Sequential known-answer test runner
pub struct BatchValidator<H> {
    hasher: H,
    progress_interval: usize,
}

impl<H: HashUnderTest> BatchValidator<H> {
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Log a progress line every `interval` vectors; 0 disables progress lines.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Hash every record in order and compare against its expected digest.
    pub fn validate(&self, records: &[TestRecord]) -> ValidationOutcome {
        self.validate_named("vectors", records)
    }

    fn validate_named(&self, name: &str, records: &[TestRecord]) -> ValidationOutcome {
        let mut outcome = ValidationOutcome {
            total: records.len(),
            ..Default::default()
        };

        for (i, record) in records.iter().enumerate() {
            let index = i + 1;
            let computed = if record.length_bits == 0 {
                self.hasher.hash(&[])
            } else {
                self.hasher.hash(&record.message)
            };

            if computed == record.expected_digest {
                outcome.passed += 1;
            } else {
                outcome.failed += 1;
                warn!(target: LOG_TARGET,
                    "❌ FAIL: {} Vector {} (Len={})",
                    name, index, record.length_bits
                );
                warn!(target: LOG_TARGET, "  Expected: {}", hex::encode(record.expected_digest));
                warn!(target: LOG_TARGET, "  Got:      {}", hex::encode(computed));
                let message = (!record.message.is_empty()).then(|| record.message.clone());
                if let Some(ref msg) = message {
                    warn!(target: LOG_TARGET, "  Input:    {}", hex::encode(msg));
                }
                outcome.failures.push(VectorFailure {
                    index,
                    length_bits: record.length_bits,
                    expected_digest: record.expected_digest,
                    computed_digest: computed,
                    message,
                });
            }

            if self.progress_interval > 0 && index % self.progress_interval == 0 {
                info!(target: LOG_TARGET, "  {} processed {} vectors...", name, index);
            }
        }

        outcome
    }

    /// Parse and validate one corpus file. Parse errors abort; mismatches do not.
    pub fn validate_file(&self, name: &str, path: impl AsRef<Path>) -> Result<CorpusReport> {
        let path = path.as_ref();
        let records = VectorCorpusParser::parse_file(path)?;
        info!(target: LOG_TARGET,
            "🧪 Running {} validation: {} vectors ({})",
            name,
            records.len(),
            self.hasher.name()
        );
        let outcome = self.validate_named(name, &records);
        info!(target: LOG_TARGET,
            "📊 {}: {} passed, {} failed",
            name, outcome.passed, outcome.failed
        );
        Ok(CorpusReport {
            name: name.to_string(),
            path: path.to_path_buf(),
            outcome,
        })
    }
}

/// Display name for a corpus file: its file stem, e.g. "SHA3_256ShortMsg"
pub fn corpus_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
