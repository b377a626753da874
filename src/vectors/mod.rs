// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/vectors/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the known-answer test modules: the .rsp corpus parser,
// the batch validator, and report rendering.
//
// Tree Location:
// - src/vectors/mod.rs (vectors module entry point)
// - Submodules: parser, validator, report

pub mod parser;
pub mod report;
pub mod validator;

pub use parser::VectorCorpusParser;
pub use validator::{BatchValidator, DEFAULT_PROGRESS_INTERVAL, corpus_name};
