// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/hex_codec.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file converts between hex text and byte sequences for test vector
// payloads and report output. Decoding is case-insensitive; encoding is always
// lowercase.
//
// Tree Location:
// - src/core/hex_codec.rs (hex conversion)
// - Depends on: hex

use crate::core::error::{HarnessError, Result};
use crate::core::types::DIGEST_LEN;

/// Decode a hex string into bytes. Fails on odd length or non-hex characters.
pub fn decode(hex_str: &str) -> Result<Vec<u8>> {
    decode_field(hex_str, "hex")
}

/// Decode a hex string, tagging any failure with the vector field it came from.
pub(crate) fn decode_field(hex_str: &str, field: &'static str) -> Result<Vec<u8>> {
    hex::decode(hex_str).map_err(|e| {
        let detail = match e {
            hex::FromHexError::OddLength => {
                format!("invalid hex string length: {}", hex_str.len())
            }
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                format!("invalid hex character {:?} at position {}", c, index)
            }
            other => other.to_string(),
        };
        HarnessError::Format {
            source_name: "<hex>".to_string(),
            record: 0,
            field,
            detail,
        }
    })
}

/// Decode a hex string that must hold exactly one 32-byte digest.
pub fn decode_digest(hex_str: &str) -> Result<[u8; DIGEST_LEN]> {
    let bytes = decode_field(hex_str, "MD")?;
    <[u8; DIGEST_LEN]>::try_from(bytes.as_slice()).map_err(|_| HarnessError::DigestLength {
        source_name: "<hex>".to_string(),
        record: 0,
        actual: bytes.len(),
    })
}

/// Encode bytes as lowercase hex.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(decode("aBcD01").unwrap(), vec![0xab, 0xcd, 0x01]);
        assert_eq!(encode(&decode("DEADBEEF").unwrap()), "deadbeef");
    }

    #[test]
    fn test_decode_empty_string() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(matches!(decode("abc"), Err(HarnessError::Format { .. })));
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(matches!(decode("zz"), Err(HarnessError::Format { .. })));
        assert!(matches!(decode("0x12"), Err(HarnessError::Format { .. })));
    }

    #[test]
    fn test_decode_digest_length() {
        let good = "00".repeat(32);
        assert_eq!(decode_digest(&good).unwrap(), [0u8; 32]);

        let short = "00".repeat(31);
        assert!(matches!(
            decode_digest(&short),
            Err(HarnessError::DigestLength { actual: 31, .. })
        ));
    }
}
