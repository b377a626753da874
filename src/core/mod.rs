// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of the
// validator, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod error;
pub mod hasher;
pub mod hex_codec;
pub mod types;

// Re-export the most commonly used items
pub use error::{HarnessError, Result};
pub use hasher::{FnHasher, HashUnderTest, Sha3_256Hasher, smoke_check};
pub use types::{
    BatchReport, CorpusReport, DIGEST_LEN, Digest, LeakageVerdict, SamplerConfig, TestRecord,
    TimingSamples, ValidationOutcome, VectorFailure,
};
