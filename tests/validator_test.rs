// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/validator_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains end-to-end tests for batch validation: parsing a corpus,
// running it through a hash under test, and checking counts and failure
// context.
//
// Tree Location:
// - tests/validator_test.rs (batch validator tests)
// - Depends on: sha3-validator, sha3, tempfile

#[cfg(test)]
mod tests {
    use sha3::{Digest, Sha3_256};
    use sha3_validator::core::hasher::FnHasher;
    use sha3_validator::core::types::{BatchReport, TestRecord};
    use sha3_validator::vectors::report;
    use sha3_validator::{BatchValidator, HarnessError, Sha3_256Hasher, VectorCorpusParser};
    use std::io::Write;

    const EMPTY_MD: &str = "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a";

    fn record(message: &[u8]) -> TestRecord {
        TestRecord {
            length_bits: (message.len() * 8) as u64,
            message: message.to_vec(),
            expected_digest: Sha3_256::digest(message).into(),
        }
    }

    /// Reference SHA3-256, except the digest of inputs starting with 0x42 is corrupted
    fn broken_hasher() -> FnHasher<impl Fn(&mut [u8; 32], &[u8])> {
        FnHasher::new("broken", |out: &mut [u8; 32], input: &[u8]| {
            out.copy_from_slice(&Sha3_256::digest(input));
            if input.first() == Some(&0x42) {
                out[0] ^= 0x01;
            }
        })
    }

    #[test]
    fn test_known_empty_vector_passes() {
        let corpus = format!("[L = 256]\n\nLen = 0\nMsg = 00\nMD = {}\n", EMPTY_MD);
        let records = VectorCorpusParser::parse_str(&corpus).unwrap();
        let outcome = BatchValidator::new(Sha3_256Hasher).validate(&records);

        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.passed, 1);
        assert_eq!(outcome.failed, 0);
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn test_counts_always_add_up() {
        let records: Vec<TestRecord> = (0..40u8)
            .map(|k| record(&vec![0x40 + (k % 4); k as usize + 1]))
            .collect();
        let outcome = BatchValidator::new(broken_hasher())
            .with_progress_interval(0)
            .validate(&records);

        assert_eq!(outcome.total, records.len());
        assert_eq!(outcome.passed + outcome.failed, records.len());
        assert_eq!(outcome.failed, 10, "Every fourth vector starts with 0x42");
        assert_eq!(outcome.failures.len(), outcome.failed);
    }

    #[test]
    fn test_failure_entries_carry_context_in_order() {
        let records = vec![record(b"ok"), record(&[0x42, 0x01]), record(b""), record(&[0x42])];
        let outcome = BatchValidator::new(broken_hasher()).validate(&records);

        let indices: Vec<usize> = outcome.failures.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![2, 4]);

        let first = &outcome.failures[0];
        assert_eq!(first.length_bits, 16);
        assert_eq!(first.message, Some(vec![0x42, 0x01]));
        assert_eq!(first.expected_digest, records[1].expected_digest);
        assert_ne!(first.computed_digest, first.expected_digest);
        assert_eq!(first.computed_digest[0], first.expected_digest[0] ^ 0x01);
    }

    #[test]
    fn test_empty_message_failure_has_no_input() {
        let mut bad = record(b"");
        bad.expected_digest = [0u8; 32];
        let outcome = BatchValidator::new(Sha3_256Hasher).validate(&[bad]);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.failures[0].message, None);
    }

    #[test]
    fn test_zero_length_call_reaches_hasher() {
        use std::cell::Cell;
        let seen_len = Cell::new(usize::MAX);
        let hasher = FnHasher::new("len-recorder", |out: &mut [u8; 32], input: &[u8]| {
            seen_len.set(input.len());
            out.copy_from_slice(&Sha3_256::digest(input));
        });
        let outcome = BatchValidator::new(&hasher).validate(&[record(b"")]);
        assert_eq!(outcome.passed, 1);
        assert_eq!(seen_len.get(), 0);
    }

    #[test]
    fn test_validate_file_and_report() {
        let mut file = tempfile::Builder::new()
            .suffix(".rsp")
            .tempfile()
            .expect("Failed to create temporary corpus");
        let messages: [&[u8]; 3] = [b"", b"abc", &[0x42, 0x42]];
        for msg in messages {
            let r = record(msg);
            let msg_hex = if msg.is_empty() { "00".to_string() } else { hex::encode(msg) };
            writeln!(
                file,
                "Len = {}\nMsg = {}\nMD = {}\n",
                r.length_bits,
                msg_hex,
                hex::encode(r.expected_digest)
            )
            .expect("Failed to write temporary corpus");
        }

        let corpus = BatchValidator::new(broken_hasher())
            .validate_file("SHA3_256ShortMsg", file.path())
            .unwrap();
        assert_eq!(corpus.outcome.total, 3);
        assert_eq!(corpus.outcome.failed, 1);

        let batch = BatchReport { corpora: vec![corpus] };
        assert!(!batch.all_passed());
        let text = report::render_text(&batch);
        assert!(text.contains("SHA3_256ShortMsg: 2 passed, 1 failed"));
        assert!(text.contains("FAIL: SHA3_256ShortMsg Vector 3 (Len=16)"));
        assert!(text.contains("Input:    4242"));
    }

    #[test]
    fn test_declared_length_without_message_is_not_a_pass() {
        // Len = 8 but no Msg line: the empty-input digest must not let it through
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary corpus");
        writeln!(file, "Len = 8\nMD = {}", EMPTY_MD).expect("Failed to write corpus");

        let result = BatchValidator::new(Sha3_256Hasher).validate_file("truncated", file.path());
        assert!(matches!(
            result,
            Err(HarnessError::LengthMismatch { record: 1, expected_bits: 8, actual_bytes: 0, .. })
        ));
    }

    #[test]
    fn test_validate_file_propagates_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary corpus");
        writeln!(file, "Len = 16\nMsg = ab\nMD = {}", EMPTY_MD).expect("Failed to write corpus");

        let result = BatchValidator::new(Sha3_256Hasher).validate_file("bad", file.path());
        assert!(matches!(result, Err(HarnessError::LengthMismatch { .. })));
    }
}
