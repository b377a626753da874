// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for the SHA3-256 validator,
// located at the root of the source tree. It exports the known-answer test
// harness (vectors), the timing side-channel harness (timing), and the shared
// core and utility modules used by both binaries.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, vectors, timing, utils

pub mod core;
pub mod timing;
pub mod utils;
pub mod vectors;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{
    HarnessError, HashUnderTest, LeakageVerdict, Result, Sha3_256Hasher, TestRecord,
    TimingSamples, ValidationOutcome, hex_codec,
};
pub use crate::timing::{LeakageAnalyzer, TimingSampler};
pub use crate::vectors::{BatchValidator, VectorCorpusParser};

// Changelog:
// - v1.0.0 (2026-10-16): Initial validator library.
//   - Purpose: Establishes the library root for NIST vector validation and
//     dudect-style timing analysis of SHA3-256 implementations.
//   - Features: Re-exports the parser, batch validator, timing sampler and
//     leakage analyzer so both binaries share a single implementation.
//   - Note: The hash primitive is consumed only through the HashUnderTest
//     trait; the sha3 crate provides the reference implementation.
