// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the error type shared by every stage of the validator:
// hex decoding, corpus parsing, and timing analysis. Digest mismatches are not
// errors and never appear here.
//
// Tree Location:
// - src/core/error.rs (harness error type)
// - Depends on: thiserror

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("I/O error on test vector file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}: invalid {field} in vector {record}: {detail}")]
    Format {
        source_name: String,
        record: usize,
        field: &'static str,
        detail: String,
    },

    #[error(
        "{source_name}: message length mismatch in vector {record}: expected {expected_bits} bits ({} bytes), got {actual_bytes} bytes",
        .expected_bits / 8
    )]
    LengthMismatch {
        source_name: String,
        record: usize,
        expected_bits: u64,
        actual_bytes: usize,
    },

    #[error("{source_name}: invalid MD length in vector {record}: expected 32, got {actual}")]
    DigestLength {
        source_name: String,
        record: usize,
        actual: usize,
    },

    #[error("Insufficient timing samples: need at least 2 per class, got {count}")]
    InsufficientSamples { count: usize },

    #[error("Timing sample classes differ in size: left={left}, right={right}")]
    SampleCountMismatch { left: usize, right: usize },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl HarnessError {
    /// Attach corpus name and record index to a bare hex decoding failure.
    pub(crate) fn with_location(self, source_name: &str, record: usize) -> Self {
        match self {
            HarnessError::Format { field, detail, .. } => HarnessError::Format {
                source_name: source_name.to_string(),
                record,
                field,
                detail,
            },
            HarnessError::DigestLength { actual, .. } => HarnessError::DigestLength {
                source_name: source_name.to_string(),
                record,
                actual,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message_mentions_bytes() {
        let err = HarnessError::LengthMismatch {
            source_name: "ShortMsg".to_string(),
            record: 3,
            expected_bits: 16,
            actual_bytes: 1,
        };
        let text = err.to_string();
        assert!(text.contains("vector 3"));
        assert!(text.contains("16 bits (2 bytes)"));
        assert!(text.contains("got 1 bytes"));
    }

    #[test]
    fn test_with_location_fills_format_context() {
        let bare = HarnessError::Format {
            source_name: String::new(),
            record: 0,
            field: "Msg",
            detail: "odd length".to_string(),
        };
        match bare.with_location("LongMsg", 7) {
            HarnessError::Format { source_name, record, field, .. } => {
                assert_eq!(source_name, "LongMsg");
                assert_eq!(record, 7);
                assert_eq!(field, "Msg");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
