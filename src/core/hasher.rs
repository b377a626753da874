// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/hasher.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the boundary between the validator and the hash primitive
// under test, located in the core subdirectory. The primitive is a black box
// with a one-shot call contract: 32-byte output, any input length including 0.
//
// Tree Location:
// - src/core/hasher.rs (hash-under-test adapter)
// - Depends on: sha3 crate

use crate::core::types::{DIGEST_LEN, Digest};
use log::debug;
use sha3::{Digest as _, Sha3_256};

const LOG_TARGET: &str = "sha3::validator::hasher";

/// A one-shot 256-bit hash primitive.
///
/// Implementations must be deterministic and must not carry state from one
/// call to the next. The validator relies on this and does not run NIST Monte
/// Carlo (state reuse) vectors; it is an assumption, never checked per call.
/// A zero-length input is a valid call and must produce a digest.
pub trait HashUnderTest {
    fn hash(&self, input: &[u8]) -> Digest;

    /// Short label used in reports and logs
    fn name(&self) -> &str {
        "hash-under-test"
    }
}

/// Reference SHA3-256 from the `sha3` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_256Hasher;

impl HashUnderTest for Sha3_256Hasher {
    fn hash(&self, input: &[u8]) -> Digest {
        Sha3_256::digest(input).into()
    }

    fn name(&self) -> &str {
        "sha3-256 (sha3 crate)"
    }
}

/// Adapts a C-style `hash(out[32], input)` callback, e.g. a wrapper around an
/// `extern "C"` primitive linked from a static library.
pub struct FnHasher<F> {
    name: String,
    func: F,
}

impl<F> FnHasher<F>
where
    F: Fn(&mut [u8; DIGEST_LEN], &[u8]),
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> HashUnderTest for FnHasher<F>
where
    F: Fn(&mut [u8; DIGEST_LEN], &[u8]),
{
    fn hash(&self, input: &[u8]) -> Digest {
        let mut output = [0u8; DIGEST_LEN];
        (self.func)(&mut output, input);
        output
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<H: HashUnderTest + ?Sized> HashUnderTest for &H {
    fn hash(&self, input: &[u8]) -> Digest {
        (**self).hash(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Call the primitive once with a 1-byte input and twice with an empty input.
///
/// Returns false when the two empty-input calls disagree, which means the
/// implementation is not deterministic.
pub fn smoke_check<H: HashUnderTest + ?Sized>(hasher: &H) -> bool {
    let one = hasher.hash(&[0u8]);
    let empty_a = hasher.hash(&[]);
    let empty_b = hasher.hash(&[]);
    debug!(target: LOG_TARGET,
        "Smoke check {}: H(00)={}, H()={}",
        hasher.name(),
        hex::encode(one),
        hex::encode(empty_a)
    );
    empty_a == empty_b
}
