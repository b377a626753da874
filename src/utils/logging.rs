// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file sets up log4rs for the validator binaries. Logs go to stderr so
// that stdout carries only the report (text or JSON).
//
// Tree Location:
// - src/utils/logging.rs (logging setup)
// - Depends on: log, log4rs

use crate::core::error::{HarnessError, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";
const DEFAULT_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

/// Build the default stderr configuration at the given level.
pub fn default_config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))
        .map_err(|e| HarnessError::Logging(e.to_string()))
}

/// Initialize logging from a log4rs YAML file when given, else from `level`.
pub fn initialize_logging(level: &str, config_file: Option<&Path>) -> Result<()> {
    if let Some(path) = config_file {
        return log4rs::init_file(path, Default::default())
            .map_err(|e| HarnessError::Logging(format!("{}: {}", path.display(), e)));
    }

    let level = level
        .parse::<LevelFilter>()
        .map_err(|_| HarnessError::Logging(format!("invalid log level '{}'", level)))?;
    log4rs::init_config(default_config(level)?)
        .map(|_handle| ())
        .map_err(|e| HarnessError::Logging(e.to_string()))
}
