// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/timing/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the timing side-channel modules: sample collection,
// statistical analysis, and report rendering.
//
// Tree Location:
// - src/timing/mod.rs (timing module entry point)
// - Submodules: sampler, analyzer, report

pub mod analyzer;
pub mod report;
pub mod sampler;

pub use analyzer::{ClassStats, LeakageAnalyzer, analyze};
pub use sampler::{Clock, MonotonicClock, TimingSampler};
