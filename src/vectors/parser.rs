// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/vectors/parser.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file parses NIST CAVS response files (.rsp) into test records. Each
// vector arrives as up to three lines in fixed order (Len, Msg, MD), mixed with
// blank lines, '#' comments and '[L = 256]' section headers that are skipped.
//
// Tree Location:
// - src/vectors/parser.rs (corpus parser)
// - Depends on: core/hex_codec, core/types, log

use crate::core::error::{HarnessError, Result};
use crate::core::hex_codec;
use crate::core::types::TestRecord;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const LOG_TARGET: &str = "sha3::validator::parser";

const LEN_MARKER: &str = "Len = ";
const MSG_MARKER: &str = "Msg = ";
const MD_MARKER: &str = "MD = ";

/// Streaming parser for one corpus. Holds the record under construction until
/// the next `Len = ` line or end of input finalizes it.
pub struct VectorCorpusParser {
    source_name: String,
    records: Vec<TestRecord>,
    current: Option<TestRecord>,
}

impl VectorCorpusParser {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            records: Vec::new(),
            current: None,
        }
    }

    /// Parse a corpus file from disk.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<TestRecord>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| HarnessError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut parser = Self::new(path.display().to_string());
        parser.read_all(BufReader::new(file)).map_err(|e| match e {
            HarnessError::Io { source, .. } => HarnessError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        parser.finish()
    }

    /// Parse an in-memory corpus.
    pub fn parse_str(corpus: &str) -> Result<Vec<TestRecord>> {
        Self::parse_reader("<memory>", corpus.as_bytes())
    }

    /// Parse any buffered reader, naming it `source_name` in errors.
    pub fn parse_reader<R: BufRead>(source_name: &str, reader: R) -> Result<Vec<TestRecord>> {
        let mut parser = Self::new(source_name);
        parser.read_all(reader)?;
        parser.finish()
    }

    /// Feed every line of `reader`. Lines are read into a growable buffer, so
    /// long messages (LongMsg vectors run well past 64 KiB of hex) are never truncated.
    pub fn read_all<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line).map_err(|e| HarnessError::Io {
                path: self.source_name.clone().into(),
                source: e,
            })?;
            if read == 0 {
                break;
            }
            self.feed_bytes(&line)?;
        }
        Ok(())
    }

    /// Process one raw line. Comment and header lines are skipped before any
    /// UTF-8 check, so stray bytes there (e.g. Latin-1 tool banners) are harmless.
    pub fn feed_bytes(&mut self, raw: &[u8]) -> Result<()> {
        let line = raw.strip_suffix(b"\n").unwrap_or(raw);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if line.is_empty() || line.starts_with(b"#") || line.starts_with(b"[") {
            return Ok(());
        }

        match std::str::from_utf8(line) {
            Ok(text) => self.feed_line(text),
            Err(e) => Err(HarnessError::Format {
                source_name: self.source_name.clone(),
                record: self.record_index(),
                field: "line",
                detail: format!("not valid UTF-8 at byte {}", e.valid_up_to()),
            }),
        }
    }

    /// Process one line of corpus text.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
            return Ok(());
        }

        if let Some(value) = line.strip_prefix(LEN_MARKER) {
            self.start_record(value)
        } else if let Some(value) = line.strip_prefix(MSG_MARKER) {
            self.set_message(value)
        } else if let Some(value) = line.strip_prefix(MD_MARKER) {
            self.set_digest(value)
        } else {
            trace!(target: LOG_TARGET, "{}: skipping line {:?}", self.source_name, line);
            Ok(())
        }
    }

    /// Finalize any record still under construction and hand over all records.
    pub fn finish(mut self) -> Result<Vec<TestRecord>> {
        self.finalize_current()?;
        debug!(target: LOG_TARGET,
            "{}: parsed {} vectors",
            self.source_name,
            self.records.len()
        );
        Ok(self.records)
    }

    /// 1-based index of the record under construction
    fn record_index(&self) -> usize {
        self.records.len() + 1
    }

    /// Move the in-progress record to the output. A non-empty vector must have
    /// received a message of exactly `Len / 8` bytes by now.
    fn finalize_current(&mut self) -> Result<()> {
        let index = self.record_index();
        let Some(record) = self.current.take() else {
            return Ok(());
        };
        if record.length_bits > 0
            && (record.length_bits % 8 != 0 || record.message.len() != record.byte_len())
        {
            return Err(HarnessError::LengthMismatch {
                source_name: self.source_name.clone(),
                record: index,
                expected_bits: record.length_bits,
                actual_bytes: record.message.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    fn start_record(&mut self, value: &str) -> Result<()> {
        self.finalize_current()?;
        let length_bits = value.trim().parse::<u64>().map_err(|_| HarnessError::Format {
            source_name: self.source_name.clone(),
            record: self.record_index(),
            field: "Len",
            detail: format!("not a bit length: {:?}", value),
        })?;
        self.current = Some(TestRecord::new(length_bits));
        Ok(())
    }

    fn set_message(&mut self, value: &str) -> Result<()> {
        let index = self.record_index();
        let Some(record) = self.current.as_mut() else {
            return Ok(());
        };

        // Len = 0 vectors carry a placeholder payload ("00") or none at all
        if record.length_bits == 0 {
            record.message.clear();
            return Ok(());
        }

        let message = hex_codec::decode_field(value.trim(), "Msg")
            .map_err(|e| e.with_location(&self.source_name, index))?;
        if (message.len() as u64) * 8 != record.length_bits {
            return Err(HarnessError::LengthMismatch {
                source_name: self.source_name.clone(),
                record: index,
                expected_bits: record.length_bits,
                actual_bytes: message.len(),
            });
        }
        record.message = message;
        Ok(())
    }

    fn set_digest(&mut self, value: &str) -> Result<()> {
        let index = self.record_index();
        let Some(record) = self.current.as_mut() else {
            return Ok(());
        };
        record.expected_digest = hex_codec::decode_digest(value.trim())
            .map_err(|e| e.with_location(&self.source_name, index))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_and_headers_are_skipped() {
        let corpus = "#  CAVS 19.0\r\n[L = 256]\r\n\r\nLen = 8\r\nMsg = e9\r\nMD = f0d04dd1e6cfc29a4460d521796852f25d9ef8d28b44ee91ff5b759d72c1e6d6\r\n";
        let records = VectorCorpusParser::parse_str(corpus).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].length_bits, 8);
        assert_eq!(records[0].message, vec![0xe9]);
        assert_eq!(records[0].expected_digest[0], 0xf0);
    }

    #[test]
    fn test_msg_before_len_is_ignored() {
        let corpus = "Msg = abcd\nLen = 0\nMD = a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a\n";
        let records = VectorCorpusParser::parse_str(corpus).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].message.is_empty());
    }

    #[test]
    fn test_bad_len_value() {
        let err = VectorCorpusParser::parse_str("Len = eight\n").unwrap_err();
        assert!(matches!(err, HarnessError::Format { field: "Len", record: 1, .. }));
    }

    #[test]
    fn test_record_without_md_keeps_zero_digest() {
        let records = VectorCorpusParser::parse_str("Len = 8\nMsg = 01\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].expected_digest, [0u8; 32]);
    }

    #[test]
    fn test_non_empty_len_without_msg_is_rejected() {
        let corpus = "Len = 8\nMD = a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a\n";
        assert!(matches!(
            VectorCorpusParser::parse_str(corpus),
            Err(HarnessError::LengthMismatch { record: 1, expected_bits: 8, actual_bytes: 0, .. })
        ));
    }

    #[test]
    fn test_missing_msg_detected_at_next_len() {
        let corpus = "Len = 16\nMD = a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a\n\n\
                      Len = 0\nMD = a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a\n";
        assert!(matches!(
            VectorCorpusParser::parse_str(corpus),
            Err(HarnessError::LengthMismatch { record: 1, expected_bits: 16, .. })
        ));
    }

    #[test]
    fn test_non_utf8_comment_is_skipped() {
        let corpus: &[u8] = b"# Generated by caf\xe9 tool\r\nLen = 0\nMsg = 00\nMD = a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a\n";
        let records = VectorCorpusParser::parse_reader("latin1.rsp", corpus).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].message.is_empty());
    }

    #[test]
    fn test_non_utf8_data_line_is_format_error() {
        let corpus: &[u8] = b"Len = 8\nMsg = \xe9\xe9\n";
        match VectorCorpusParser::parse_reader("latin1.rsp", corpus).unwrap_err() {
            HarnessError::Format { source_name, record, field, .. } => {
                assert_eq!(source_name, "latin1.rsp");
                assert_eq!(record, 1);
                assert_eq!(field, "line");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_msg_hex_reports_index_and_field() {
        let corpus = "Len = 0\nMsg = 00\nMD = a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a\n\
                      Len = 8\nMsg = zz\n";
        match VectorCorpusParser::parse_str(corpus).unwrap_err() {
            HarnessError::Format { source_name, record, field, .. } => {
                assert_eq!(source_name, "<memory>");
                assert_eq!(record, 2);
                assert_eq!(field, "Msg");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
